//! Front-end settings
//!
//! Read from an optional JSON file in the working directory, separate from
//! the wins file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::persistence::{DEFAULT_WINS_PATH, WinsFile};

/// Settings file location, relative to the working directory
pub const SETTINGS_PATH: &str = "tictactoe.json";

/// Front-end preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where win tallies are kept
    pub wins_path: PathBuf,
    /// Clear the board right after announcing a win or draw
    pub auto_reset: bool,
    /// Print the stats line under the board
    pub show_stats: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wins_path: PathBuf::from(DEFAULT_WINS_PATH),
            auto_reset: true,
            show_stats: true,
        }
    }
}

impl Settings {
    /// The wins file these settings point at
    pub fn wins_file(&self) -> WinsFile {
        WinsFile::new(&self.wins_path)
    }

    /// Load settings from `path`, using defaults if it is missing or invalid
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {e}; using defaults", path.display());
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to read {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings to `path` as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path.as_ref(), json)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let settings = Settings::load(dir.path().join(SETTINGS_PATH));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.wins_file().path(), Path::new("wins.txt"));
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(SETTINGS_PATH);
        let settings = Settings {
            wins_path: dir.path().join("scores.txt"),
            auto_reset: false,
            show_stats: false,
        };
        settings.save(&path).expect("save");
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(SETTINGS_PATH);
        fs::write(&path, r#"{ "auto_reset": false }"#).expect("write");

        let settings = Settings::load(&path);
        assert!(!settings.auto_reset);
        assert!(settings.show_stats);
        assert_eq!(settings.wins_path, PathBuf::from(DEFAULT_WINS_PATH));
    }

    #[test]
    fn test_invalid_json_uses_defaults() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join(SETTINGS_PATH);
        fs::write(&path, "{ not json").expect("write");
        assert_eq!(Settings::load(&path), Settings::default());
    }
}
