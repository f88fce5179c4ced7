//! Game state and move application
//!
//! Pure state transitions only: persisting tallies after a win is left to the
//! caller (see [`crate::session::Session`]).

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, Player};
use crate::tallies::Tallies;

/// Result of a single move attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Cell taken, round already decided, or index off the board
    Ignored,
    /// Move accepted, round still undecided
    Continue,
    /// Move accepted and completed a line
    Win(Player),
    /// Move accepted and filled the board without a line
    Draw,
}

impl MoveOutcome {
    /// Whether the move ended the round
    pub fn is_decisive(&self) -> bool {
        matches!(self, MoveOutcome::Win(_) | MoveOutcome::Draw)
    }

    /// Whether the tallies changed as a result of this move
    pub fn changes_tallies(&self) -> bool {
        matches!(self, MoveOutcome::Win(_))
    }
}

/// Complete state of the board and the running tallies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    winner: Option<Player>,
    tallies: Tallies,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tallies::new())
    }
}

impl GameState {
    /// Empty board with X to move, carrying previously recorded tallies
    pub fn new(tallies: Tallies) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            winner: None,
            tallies,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Occupant of a cell, for rendering
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.board.get(index)
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    pub fn tallies(&self) -> &Tallies {
        &self.tallies
    }

    /// The completed line, while a win is on the board
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        self.winner.and(self.board.winning_line())
    }

    /// Whether `index` would accept a move right now
    pub fn is_playable(&self, index: usize) -> bool {
        self.winner.is_none() && self.board.get(index).is_some_and(|c| c.is_empty())
    }

    /// Place the current player's mark at `index`.
    ///
    /// Unplayable cells are ignored without touching any state. Otherwise the
    /// outcome is evaluated for the player who just moved, and the turn passes
    /// only while the round is undecided.
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        if self.winner.is_some() || !self.board.place(index, self.current_player) {
            log::debug!("Ignoring move at cell {index}");
            return MoveOutcome::Ignored;
        }

        let outcome = self.check_outcome();
        if outcome == MoveOutcome::Continue {
            self.current_player = self.current_player.other();
        }
        outcome
    }

    /// Evaluate the board after the current player's move
    fn check_outcome(&mut self) -> MoveOutcome {
        if self.board.winning_line().is_some() {
            let player = self.current_player;
            self.winner = Some(player);
            let wins = self.tallies.record_win(player);
            log::info!("Player {player} wins ({wins} total)");
            MoveOutcome::Win(player)
        } else if self.board.is_full() {
            log::info!("Round drawn");
            MoveOutcome::Draw
        } else {
            MoveOutcome::Continue
        }
    }

    /// Start a new round. Tallies are kept.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.winner = None;
    }
}
