//! Game settings and preferences
//!
//! Persisted as JSON next to the high score file. A malformed or missing
//! file falls back to defaults; saving failures are logged and swallowed.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub effects_volume: f32,
    /// Window size at startup; the world resizes with the window
    pub window_width: f32,
    pub window_height: f32,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_volume: 0.5,
            effects_volume: 0.5,
            window_width: WORLD_WIDTH,
            window_height: WORLD_HEIGHT,
            path: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut settings = match fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<Settings>(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!(
                        "Malformed settings file {}: {err}; using defaults",
                        path.display()
                    );
                    Settings::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Settings::default()
            }
        };
        settings.sanitize();
        settings.path = Some(path);
        settings
    }

    /// Save settings back to their file; a no-op without one.
    pub fn save(&self) {
        let Some(path) = &self.path else { return };
        match serde_json::to_string_pretty(self) {
            Ok(json) => match fs::write(path, json) {
                Ok(()) => log::info!("Settings saved"),
                Err(err) => {
                    log::error!("Failed to save settings to {}: {err}", path.display());
                }
            },
            Err(err) => log::error!("Failed to serialize settings: {err}"),
        }
    }

    /// Clamp loaded values into their valid ranges.
    fn sanitize(&mut self) {
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
        self.effects_volume = self.effects_volume.clamp(0.0, 1.0);
        if !self.window_width.is_finite() || self.window_width < 1.0 {
            self.window_width = WORLD_WIDTH;
        }
        if !self.window_height.is_finite() || self.window_height < 1.0 {
            self.window_height = WORLD_HEIGHT;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "asteroid_dodger_settings_{}_{name}.json",
            std::process::id()
        ))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let settings = Settings::load(temp_path("missing"));
        assert_eq!(settings.music_volume, 0.5);
        assert_eq!(settings.effects_volume, 0.5);
        assert_eq!(settings.window_width, WORLD_WIDTH);
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let path = temp_path("malformed");
        fs::write(&path, "{ this is not json").unwrap();
        let settings = Settings::load(&path);
        assert_eq!(settings.music_volume, 0.5);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_roundtrip() {
        let path = temp_path("roundtrip");
        let _ = fs::remove_file(&path);

        let mut settings = Settings::load(&path);
        settings.music_volume = 0.25;
        settings.effects_volume = 1.0;
        settings.save();

        let reloaded = Settings::load(&path);
        assert_eq!(reloaded.music_volume, 0.25);
        assert_eq!(reloaded.effects_volume, 1.0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_out_of_range_volumes_clamped_on_load() {
        let path = temp_path("clamped");
        fs::write(
            &path,
            r#"{"music_volume": 7.0, "effects_volume": -2.0, "window_width": 800.0, "window_height": 600.0}"#,
        )
        .unwrap();
        let settings = Settings::load(&path);
        assert_eq!(settings.music_volume, 1.0);
        assert_eq!(settings.effects_volume, 0.0);
        let _ = fs::remove_file(&path);
    }
}
