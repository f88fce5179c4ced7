//! Tic-Tac-Toe - two players, one board, win tallies kept between runs
//!
//! Core modules:
//! - `sim`: Board, move application and win/draw evaluation
//! - `tallies`: Cumulative win counts and their text format
//! - `persistence`: Wins file load/save
//! - `session`: Command handling that ties the state to its wins file
//! - `settings`: Front-end preferences

pub mod persistence;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tallies;

pub use persistence::{PersistenceError, WinsFile};
pub use session::{Response, Session};
pub use settings::Settings;
pub use sim::{Board, Cell, Command, GameState, MoveOutcome, Player};
pub use tallies::Tallies;
