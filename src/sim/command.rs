//! Discrete front-end commands
//!
//! A front end turns each user action into one [`Command`] and hands it to
//! the session; nothing else reaches the game state.

use std::str::FromStr;

use thiserror::Error;

use super::board::CELL_COUNT;

/// A single user action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A cell was clicked (index 0-8)
    CellClicked(usize),
    /// The reset button was clicked
    ResetClicked,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("no command given")]
    Empty,
    #[error("cell {0} is off the board, pick 1-9")]
    CellOutOfRange(usize),
    #[error("unknown command: {0}")]
    Unknown(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parse a line of shell input. Cells are numbered 1-9 in reading order;
    /// `r` or `reset` resets the board.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseCommandError::Empty);
        }

        if let Ok(number) = s.parse::<usize>() {
            return match number {
                1..=CELL_COUNT => Ok(Command::CellClicked(number - 1)),
                _ => Err(ParseCommandError::CellOutOfRange(number)),
            };
        }

        match s.to_lowercase().as_str() {
            "r" | "reset" => Ok(Command::ResetClicked),
            _ => Err(ParseCommandError::Unknown(s.to_string())),
        }
    }
}
