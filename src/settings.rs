//! Game settings and preferences
//!
//! Persisted as JSON next to the executable's working directory, separate
//! from any run state (runs themselves are never saved).

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,

    // === HUD ===
    /// Show the player location readout
    pub show_location: bool,
    /// Show the minimap panel
    pub show_minimap: bool,

    /// Refresh cap; one simulation tick per frame
    pub target_fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            music_volume: 0.7,
            show_location: true,
            show_minimap: true,
            target_fps: crate::consts::TARGET_FPS,
        }
    }
}

impl Settings {
    /// Settings file name
    const FILE_NAME: &'static str = "space_wars_settings.json";

    /// Whether sound effect triggers should fire at all
    pub fn sfx_enabled(&self) -> bool {
        self.master_volume * self.sfx_volume > 0.0
    }

    /// Whether the background music loop should run
    pub fn music_enabled(&self) -> bool {
        self.master_volume * self.music_volume > 0.0
    }

    /// Load settings from disk, falling back to defaults.
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::FILE_NAME) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::FILE_NAME);
                    settings
                }
                Err(e) => {
                    log::warn!("Malformed settings file, using defaults: {e}");
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to disk.
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(Self::FILE_NAME, json) {
                    log::warn!("Failed to save settings: {e}");
                } else {
                    log::info!("Settings saved");
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_enable_audio_and_hud() {
        let settings = Settings::default();
        assert!(settings.sfx_enabled());
        assert!(settings.music_enabled());
        assert!(settings.show_minimap);
        assert_eq!(settings.target_fps, 60);
    }

    #[test]
    fn test_zero_master_volume_mutes_everything() {
        let settings = Settings {
            master_volume: 0.0,
            ..Default::default()
        };
        assert!(!settings.sfx_enabled());
        assert!(!settings.music_enabled());
    }

    #[test]
    fn test_settings_round_trip() {
        let settings = Settings {
            master_volume: 0.25,
            show_minimap: false,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.master_volume, 0.25);
        assert!(!back.show_minimap);
    }
}
