//! Cumulative win tallies
//!
//! Persisted to the wins file as a single `"<X>, <O>"` line.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::Player;

/// Separator between the two counts in the wins file
pub const SEPARATOR: &str = ", ";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseTalliesError {
    #[error("expected two comma-separated counts, found {found} field(s)")]
    FieldCount { found: usize },
    #[error("invalid win count for {player}: {source}")]
    InvalidCount {
        player: Player,
        #[source]
        source: ParseIntError,
    },
}

/// Wins per player, carried across rounds and program runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tallies {
    pub x: u32,
    pub o: u32,
}

impl Tallies {
    /// Zero wins for both players (first run)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Count a win for `player`, returning the new total
    pub fn record_win(&mut self, player: Player) -> u32 {
        let count = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *count = count.saturating_add(1);
        *count
    }

    /// Total rounds won by either player
    pub fn total(&self) -> u64 {
        u64::from(self.x) + u64::from(self.o)
    }

    /// Status line shown under the board
    pub fn stats_label(&self) -> String {
        format!("Player Stats: X - {}, O - {}", self.x, self.o)
    }
}

impl fmt::Display for Tallies {
    /// Wins file format, X first
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.x, self.o)
    }
}

impl FromStr for Tallies {
    type Err = ParseTalliesError;

    /// Parse the wins file contents; a trailing newline is tolerated
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split(SEPARATOR).collect();
        let [x, o] = fields[..] else {
            return Err(ParseTalliesError::FieldCount {
                found: fields.len(),
            });
        };

        let parse = |field: &str, player| {
            field
                .trim()
                .parse::<u32>()
                .map_err(|source| ParseTalliesError::InvalidCount { player, source })
        };

        Ok(Self {
            x: parse(x, Player::X)?,
            o: parse(o, Player::O)?,
        })
    }
}
