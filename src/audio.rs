//! Sound effects and the audio collaborator trait
//!
//! The simulation never talks to an audio device. It raises
//! [`GameEvent`]s, and the app loop maps drained events to [`Sound`]s and
//! fires them at an [`AudioSink`]. Triggers are fire-and-forget: no
//! acknowledgment, no ordering guarantee across overlapping effects.

use crate::sim::GameEvent;

/// Sound effect types, matched one-to-one with bundle sound names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    /// Fuel pickup collected
    Fuel,
    /// Score star collected
    Star,
    /// Unshielded foe collision
    Hit,
    /// Foe collision absorbed by the shield
    ShieldHit,
    /// Shield pickup activated
    Activated,
    /// Ally "thank you" cues
    Thanks1,
    Thanks2,
    Thanks3,
}

impl Sound {
    /// Bundle sound name for this effect
    pub fn name(&self) -> &'static str {
        match self {
            Sound::Fuel => "fuel",
            Sound::Star => "star",
            Sound::Hit => "hit",
            Sound::ShieldHit => "shield_hit",
            Sound::Activated => "activated",
            Sound::Thanks1 => "thanks1",
            Sound::Thanks2 => "thanks2",
            Sound::Thanks3 => "thanks3",
        }
    }
}

/// Sound cue for a simulation event, if it has one.
///
/// The ally voice is drawn in the sim and carried on the event, so this
/// mapping stays pure.
pub fn sound_for_event(event: GameEvent) -> Option<Sound> {
    match event {
        GameEvent::FuelCollected => Some(Sound::Fuel),
        GameEvent::StarCollected => Some(Sound::Star),
        GameEvent::AllyRescued { voice } => Some(match voice {
            0 => Sound::Thanks1,
            1 => Sound::Thanks2,
            _ => Sound::Thanks3,
        }),
        GameEvent::FoeHit => Some(Sound::Hit),
        GameEvent::ShieldAbsorbed => Some(Sound::ShieldHit),
        GameEvent::ShieldActivated => Some(Sound::Activated),
        GameEvent::RanOutOfFuel => None,
    }
}

/// Audio playback collaborator
pub trait AudioSink {
    /// Fire-and-forget sound effect trigger
    fn play(&mut self, sound: Sound);
    /// Start the background music loop
    fn play_music(&mut self, track: &str);
    /// Stop the background music
    fn stop_music(&mut self);
    /// Whether the background music is currently playing
    fn music_playing(&self) -> bool;
}

/// Audio sink that discards everything; for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullAudio {
    music: bool,
}

impl AudioSink for NullAudio {
    fn play(&mut self, _sound: Sound) {}

    fn play_music(&mut self, track: &str) {
        log::debug!("music start: {track}");
        self.music = true;
    }

    fn stop_music(&mut self) {
        self.music = false;
    }

    fn music_playing(&self) -> bool {
        self.music
    }
}
