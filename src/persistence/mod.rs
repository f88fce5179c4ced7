//! Save/load of win tallies
//!
//! Features:
//! - Plain-text wins file (`"<X>, <O>"`), truncated and rewritten on every save
//! - First-run default when the file is absent
//! - Fallback to zero tallies, with a warning, when the file is unreadable

pub mod wins_file;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::tallies::ParseTalliesError;

pub use wins_file::{DEFAULT_WINS_PATH, WinsFile};

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed wins file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: ParseTalliesError,
    },
}
