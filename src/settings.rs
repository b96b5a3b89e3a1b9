//! Runtime settings
//!
//! Persisted as JSON next to the binary, separate from level files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the `level<N>` files
    pub level_dir: PathBuf,
    /// Level loaded at startup
    pub start_level: i32,

    // === HUD ===
    /// Show the telemetry graphs on start
    pub show_graph: bool,
    /// Show the debug readout on start
    pub show_debug: bool,

    /// Starting camera zoom
    pub initial_zoom: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            level_dir: PathBuf::from("."),
            start_level: 0,
            show_graph: false,
            show_debug: false,
            initial_zoom: DEFAULT_ZOOM,
        }
    }
}

impl Settings {
    /// Default settings file name
    pub const FILE_NAME: &'static str = "wingflap.json";

    /// Load settings, falling back to defaults if the file is missing or invalid
    pub fn load(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(_) => {
                log::info!("No settings at {}, using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&json) {
            Ok(mut settings) => {
                settings.initial_zoom = settings.initial_zoom.clamp(MIN_ZOOM, MAX_ZOOM);
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                log::warn!("Ignoring invalid settings at {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as pretty JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("wingflap-settings-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir.join(Settings::FILE_NAME)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = temp_path("missing");
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save");
        let settings = Settings {
            level_dir: PathBuf::from("levels"),
            start_level: -2,
            show_graph: true,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults_and_clamps_zoom() {
        let path = temp_path("partial");
        fs::write(&path, r#"{ "start_level": 3, "initial_zoom": 12.0 }"#).unwrap();
        let settings = Settings::load(&path);
        assert_eq!(settings.start_level, 3);
        assert_eq!(settings.level_dir, PathBuf::from("."));
        assert_eq!(settings.initial_zoom, MAX_ZOOM);
    }

    #[test]
    fn test_invalid_file_gives_defaults() {
        let path = temp_path("invalid");
        fs::write(&path, "not json").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }
}
