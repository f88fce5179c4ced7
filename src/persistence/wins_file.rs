use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::PersistenceError;
use crate::tallies::Tallies;

/// Wins file location, relative to the working directory
pub const DEFAULT_WINS_PATH: &str = "wins.txt";

/// The wins file on disk
#[derive(Debug, Clone)]
pub struct WinsFile {
    path: PathBuf,
}

impl Default for WinsFile {
    fn default() -> Self {
        Self::new(DEFAULT_WINS_PATH)
    }
}

impl WinsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the tallies. A missing file is a first run and yields zeroes.
    pub fn load(&self) -> Result<Tallies, PersistenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No wins file at {}, starting fresh", self.path.display());
                return Ok(Tallies::new());
            }
            Err(source) => {
                return Err(PersistenceError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let tallies = contents
            .parse::<Tallies>()
            .map_err(|source| PersistenceError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        log::info!("Loaded tallies ({tallies}) from {}", self.path.display());
        Ok(tallies)
    }

    /// Read the tallies, falling back to zeroes if the file can't be used.
    /// The next save replaces whatever was there.
    pub fn load_or_default(&self) -> Tallies {
        self.load().unwrap_or_else(|e| {
            log::warn!("{e}; using empty tallies");
            Tallies::new()
        })
    }

    /// Overwrite the file with `tallies`
    pub fn save(&self, tallies: &Tallies) -> Result<(), PersistenceError> {
        fs::write(&self.path, tallies.to_string()).map_err(|source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        })?;
        log::info!("Tallies saved ({tallies})");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn wins_file(dir: &TempDir) -> WinsFile {
        WinsFile::new(dir.path().join(DEFAULT_WINS_PATH))
    }

    #[test]
    fn test_missing_file_is_first_run() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = wins_file(&dir);
        assert_eq!(store.load().expect("load"), Tallies { x: 0, o: 0 });
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = wins_file(&dir);
        store.save(&Tallies { x: 3, o: 5 }).expect("save");

        assert_eq!(
            fs::read_to_string(store.path()).expect("read back"),
            "3, 5"
        );
        assert_eq!(store.load().expect("load"), Tallies { x: 3, o: 5 });
    }

    #[test]
    fn test_save_truncates_previous_contents() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = wins_file(&dir);
        store.save(&Tallies { x: 1000, o: 2000 }).expect("save");
        store.save(&Tallies { x: 1, o: 2 }).expect("save");
        assert_eq!(fs::read_to_string(store.path()).expect("read back"), "1, 2");
    }

    #[test]
    fn test_trailing_newline_tolerated() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = wins_file(&dir);
        fs::write(store.path(), "7, 9\n").expect("write");
        assert_eq!(store.load().expect("load"), Tallies { x: 7, o: 9 });
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = wins_file(&dir);
        fs::write(store.path(), "garbage").expect("write");

        assert!(matches!(
            store.load(),
            Err(PersistenceError::Malformed { .. })
        ));
        assert_eq!(store.load_or_default(), Tallies::new());
    }

    #[test]
    fn test_unwritable_path_reports_write_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = WinsFile::new(dir.path().join("missing").join(DEFAULT_WINS_PATH));
        let err = store.save(&Tallies { x: 1, o: 0 }).unwrap_err();
        assert!(matches!(err, PersistenceError::Write { .. }));
        assert!(err.to_string().contains("failed to write"));
    }
}
