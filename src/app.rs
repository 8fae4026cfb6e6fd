//! Screen flow: welcome screen, play loop, end screen
//!
//! Drives the whole program against the three collaborator traits. Each
//! outer iteration is one run: a fresh game state, the welcome screen, the
//! tick loop until game over, then the end screen with a restart-or-exit
//! choice. A quit request from the environment is observed between steps
//! and exits cleanly.

use glam::Vec2;

use crate::assets::{END_FONT, MUSIC_TRACK};
use crate::audio::{AudioSink, sound_for_event};
use crate::input::{InputSource, Key};
use crate::render::{Color, Renderer, draw_frame};
use crate::settings::Settings;
use crate::sim::{GameOverReason, GamePhase, GameState, TickInput, tick};

/// Welcome screen pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuPage {
    /// Rules page, bitmap "1"
    Rules,
    /// Controls page, bitmap "2"
    Controls,
}

/// End-screen decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunOutcome {
    Restart,
    Exit,
}

/// Run the game until the player exits or the environment requests a quit.
pub fn run<R, I, A>(
    renderer: &mut R,
    input: &mut I,
    audio: &mut A,
    settings: &Settings,
    initial_seed: u64,
) where
    R: Renderer,
    I: InputSource,
    A: AudioSink,
{
    let mut seed = initial_seed;

    loop {
        let mut state = GameState::new(seed);
        log::info!("New run with seed {seed}");
        seed = seed.wrapping_add(1);

        if !welcome_screen(renderer, input, settings) {
            break;
        }

        state.phase = GamePhase::Playing;
        play_loop(renderer, input, audio, settings, &mut state);
        audio.stop_music();

        if input.quit_requested() {
            break;
        }

        log::info!(
            "Run over after {} ticks: score {}, reason {:?}",
            state.time_ticks,
            state.player.score,
            state.game_over_by
        );

        match end_screen(renderer, input, &state, settings) {
            RunOutcome::Restart => continue,
            RunOutcome::Exit => break,
        }
    }
}

/// Show the welcome screen until the player starts or a quit is requested.
///
/// Backspace returns to the rules page, Num1 opens the controls page,
/// Space starts the run. Returns false on quit.
fn welcome_screen<R: Renderer, I: InputSource>(
    renderer: &mut R,
    input: &mut I,
    settings: &Settings,
) -> bool {
    let mut page = MenuPage::Rules;

    while !input.quit_requested() {
        input.process_events();
        renderer.clear(Color::BLACK);

        if input.key_typed(Key::Backspace) {
            page = MenuPage::Rules;
        }
        if input.key_typed(Key::Num1) {
            page = MenuPage::Controls;
        }

        let bitmap = match page {
            MenuPage::Rules => "1",
            MenuPage::Controls => "2",
        };
        renderer.draw_bitmap(bitmap, Vec2::ZERO);

        if input.key_typed(Key::Space) {
            return true;
        }

        renderer.refresh(settings.target_fps);
    }

    false
}

/// Tick-and-draw loop for one run; returns when the run ends or on quit.
fn play_loop<R, I, A>(
    renderer: &mut R,
    input: &mut I,
    audio: &mut A,
    settings: &Settings,
    state: &mut GameState,
) where
    R: Renderer,
    I: InputSource,
    A: AudioSink,
{
    while !input.quit_requested() {
        // Keep the background loop alive across track ends
        if settings.music_enabled() && !audio.music_playing() {
            audio.play_music(MUSIC_TRACK);
        }

        input.process_events();
        let tick_input = TickInput {
            pointer: input.pointer(),
            primary_held: input.primary_held(),
            secondary_pressed: input.secondary_pressed(),
        };

        tick(state, &tick_input);

        if settings.sfx_enabled() {
            for event in state.drain_events() {
                if let Some(sound) = sound_for_event(event) {
                    audio.play(sound);
                }
            }
        }

        draw_frame(renderer, state, settings);

        if state.player.game_over {
            break;
        }

        renderer.refresh(settings.target_fps);
    }
}

/// Show the end screen until the player restarts, exits, or quits.
fn end_screen<R: Renderer, I: InputSource>(
    renderer: &mut R,
    input: &mut I,
    state: &GameState,
    settings: &Settings,
) -> RunOutcome {
    let bitmap = match state.game_over_by {
        GameOverReason::FuelExhausted => "end_fuel",
        GameOverReason::Hit => "end_hit",
    };

    while !input.quit_requested() {
        input.process_events();
        renderer.clear(Color::BLACK);

        renderer.draw_bitmap(bitmap, Vec2::ZERO);
        renderer.draw_text(
            &format!("SCORE - {}", state.player.score),
            Color::WHITE,
            END_FONT,
            35,
            Vec2::new(390.0, 350.0),
        );

        if input.key_typed(Key::Space) {
            return RunOutcome::Restart;
        }
        if input.key_typed(Key::X) {
            return RunOutcome::Exit;
        }

        renderer.refresh(settings.target_fps);
    }

    RunOutcome::Exit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{NullAudio, Sound};

    /// One frame of scripted input
    #[derive(Debug, Clone, Copy, Default)]
    struct Frame {
        pointer: Vec2,
        primary: bool,
        secondary: bool,
        key: Option<Key>,
    }

    /// Plays back a fixed input script, then requests a quit.
    struct ScriptedInput {
        frames: Vec<Frame>,
        cursor: usize,
    }

    impl ScriptedInput {
        fn new(frames: Vec<Frame>) -> Self {
            Self { frames, cursor: 0 }
        }

        /// Frame made current by the last `process_events` call
        fn current(&self) -> Frame {
            self.cursor
                .checked_sub(1)
                .and_then(|i| self.frames.get(i))
                .copied()
                .unwrap_or_default()
        }
    }

    impl InputSource for ScriptedInput {
        fn process_events(&mut self) {
            self.cursor += 1;
        }
        fn pointer(&self) -> Vec2 {
            self.current().pointer
        }
        fn primary_held(&self) -> bool {
            self.current().primary
        }
        fn secondary_pressed(&self) -> bool {
            self.current().secondary
        }
        fn key_typed(&self, key: Key) -> bool {
            self.current().key == Some(key)
        }
        fn quit_requested(&self) -> bool {
            self.cursor > self.frames.len()
        }
    }

    /// Renderer that only counts refreshes.
    #[derive(Default)]
    struct CountingRenderer {
        frames: u32,
    }

    impl Renderer for CountingRenderer {
        fn clear(&mut self, _color: Color) {}
        fn draw_bitmap(&mut self, _name: &str, _pos: Vec2) {}
        fn draw_bitmap_part(&mut self, _name: &str, _pos: Vec2, _part_width: f32) {}
        fn draw_text(&mut self, _text: &str, _color: Color, _font: &str, _size: u32, _pos: Vec2) {}
        fn draw_pixel(&mut self, _color: Color, _pos: Vec2) {}
        fn fill_rect(&mut self, _color: Color, _pos: Vec2, _size: Vec2) {}
        fn draw_rect(&mut self, _color: Color, _pos: Vec2, _size: Vec2) {}
        fn bitmap_width(&self, _name: &str) -> f32 {
            200.0
        }
        fn refresh(&mut self, _fps: u32) {
            self.frames += 1;
        }
    }

    /// Audio sink that records every trigger.
    #[derive(Default)]
    struct RecordingAudio {
        sounds: Vec<Sound>,
        music: bool,
    }

    impl AudioSink for RecordingAudio {
        fn play(&mut self, sound: Sound) {
            self.sounds.push(sound);
        }
        fn play_music(&mut self, _track: &str) {
            self.music = true;
        }
        fn stop_music(&mut self) {
            self.music = false;
        }
        fn music_playing(&self) -> bool {
            self.music
        }
    }

    #[test]
    fn test_run_exits_cleanly_on_quit() {
        // Start a run, fly for a few frames, then the script runs out and
        // the quit request unwinds the whole flow.
        let mut frames = vec![Frame {
            key: Some(Key::Space),
            ..Default::default()
        }];
        for _ in 0..20 {
            frames.push(Frame {
                pointer: Vec2::new(1200.0, 300.0),
                primary: true,
                ..Default::default()
            });
        }

        let mut renderer = CountingRenderer::default();
        let mut input = ScriptedInput::new(frames);
        let mut audio = RecordingAudio::default();

        run(&mut renderer, &mut input, &mut audio, &Settings::default(), 42);

        assert!(renderer.frames > 0);
        // stop_music ran on the way out
        assert!(!audio.music_playing());
    }

    #[test]
    fn test_welcome_screen_starts_on_space() {
        let mut renderer = CountingRenderer::default();
        let mut input = ScriptedInput::new(vec![
            Frame::default(),
            Frame {
                key: Some(Key::Num1),
                ..Default::default()
            },
            Frame {
                key: Some(Key::Space),
                ..Default::default()
            },
        ]);
        assert!(welcome_screen(
            &mut renderer,
            &mut input,
            &Settings::default()
        ));
    }

    #[test]
    fn test_end_screen_choices() {
        let mut state = GameState::new(1);
        state.game_over_by = GameOverReason::FuelExhausted;

        let mut renderer = CountingRenderer::default();
        let mut input = ScriptedInput::new(vec![Frame {
            key: Some(Key::Space),
            ..Default::default()
        }]);
        assert_eq!(
            end_screen(&mut renderer, &mut input, &state, &Settings::default()),
            RunOutcome::Restart
        );

        let mut input = ScriptedInput::new(vec![Frame {
            key: Some(Key::X),
            ..Default::default()
        }]);
        assert_eq!(
            end_screen(&mut renderer, &mut input, &state, &Settings::default()),
            RunOutcome::Exit
        );

        let mut input = ScriptedInput::new(vec![]);
        assert_eq!(
            end_screen(&mut renderer, &mut input, &state, &Settings::default()),
            RunOutcome::Exit
        );
    }

    #[test]
    fn test_muted_settings_skip_audio() {
        let settings = Settings {
            master_volume: 0.0,
            ..Default::default()
        };
        let mut state = GameState::new(5);
        state.phase = GamePhase::Playing;
        state.player.fuel_pct = crate::consts::FUEL_DECAY / 2.0;

        let mut renderer = CountingRenderer::default();
        let mut audio = NullAudio::default();
        let mut input = ScriptedInput::new(vec![Frame {
            pointer: Vec2::new(1200.0, 300.0),
            primary: true,
            ..Default::default()
        }]);

        play_loop(
            &mut renderer,
            &mut input,
            &mut audio,
            &settings,
            &mut state,
        );
        assert!(!audio.music_playing());
        assert!(state.player.game_over);
    }
}
