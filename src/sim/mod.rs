//! Game rules
//!
//! All gameplay logic lives here. This module is pure:
//! - No file or terminal I/O
//! - Fixed line scan order
//! - Outcomes are returned as values, never pushed to a front end

pub mod board;
pub mod command;
pub mod state;

pub use board::{Board, CELL_COUNT, Cell, LINES, Player};
pub use command::{Command, ParseCommandError};
pub use state::{GameState, MoveOutcome};
