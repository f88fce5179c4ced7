//! One running game: the board state plus the file its tallies live in
//!
//! The front end owns a single [`Session`] for the life of the process and
//! feeds it [`Command`]s. Tallies are written back synchronously after every
//! win, before the response is returned.

use crate::persistence::{PersistenceError, WinsFile};
use crate::sim::{Cell, Command, GameState, MoveOutcome};
use crate::tallies::Tallies;

/// What the front end should react to after a command
#[derive(Debug)]
pub struct Response {
    /// Outcome of a cell click; `None` for a reset
    pub outcome: Option<MoveOutcome>,
    /// Set when the tallies changed but could not be written. The game
    /// carries on in memory.
    pub save_error: Option<PersistenceError>,
}

#[derive(Debug)]
pub struct Session {
    state: GameState,
    store: WinsFile,
}

impl Session {
    /// Start a session with tallies read from `store`. An unreadable or
    /// malformed file starts from zero.
    pub fn new(store: WinsFile) -> Self {
        let tallies = store.load_or_default();
        Self::with_tallies(store, tallies)
    }

    /// Start a session with tallies already in hand
    pub fn with_tallies(store: WinsFile, tallies: Tallies) -> Self {
        Self {
            state: GameState::new(tallies),
            store,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn store(&self) -> &WinsFile {
        &self.store
    }

    pub fn tallies(&self) -> &Tallies {
        self.state.tallies()
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.state.cell(index)
    }

    pub fn handle(&mut self, command: Command) -> Response {
        match command {
            Command::CellClicked(index) => {
                let (outcome, save_error) = self.apply_move(index);
                Response {
                    outcome: Some(outcome),
                    save_error,
                }
            }
            Command::ResetClicked => {
                self.reset();
                Response {
                    outcome: None,
                    save_error: None,
                }
            }
        }
    }

    /// Apply a move and persist the tallies if it won the round
    pub fn apply_move(&mut self, index: usize) -> (MoveOutcome, Option<PersistenceError>) {
        let outcome = self.state.apply_move(index);
        if !outcome.changes_tallies() {
            return (outcome, None);
        }

        let save_error = self.store.save(self.state.tallies()).err();
        if let Some(e) = &save_error {
            log::warn!("{e}; tallies kept in memory only");
        }
        (outcome, save_error)
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::DEFAULT_WINS_PATH;
    use crate::sim::Player;
    use tempfile::TempDir;

    #[test]
    fn test_reset_command() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut session = Session::new(WinsFile::new(dir.path().join(DEFAULT_WINS_PATH)));

        session.handle(Command::CellClicked(0));
        let response = session.handle(Command::ResetClicked);
        assert!(response.outcome.is_none());
        assert!(response.save_error.is_none());
        assert_eq!(session.cell(0), Some(Cell::Empty));
        assert_eq!(session.state().current_player(), Player::X);
    }

    #[test]
    fn test_non_winning_moves_do_not_touch_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = WinsFile::new(dir.path().join(DEFAULT_WINS_PATH));
        let mut session = Session::new(store.clone());

        let (outcome, save_error) = session.apply_move(4);
        assert_eq!(outcome, MoveOutcome::Continue);
        assert!(save_error.is_none());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_save_failure_is_not_fatal() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store = WinsFile::new(dir.path().join("no-such-dir").join(DEFAULT_WINS_PATH));
        let mut session = Session::with_tallies(store, Tallies { x: 2, o: 0 });

        for index in [0, 4, 1, 5] {
            session.handle(Command::CellClicked(index));
        }
        let response = session.handle(Command::CellClicked(2));
        assert_eq!(response.outcome, Some(MoveOutcome::Win(Player::X)));
        assert!(matches!(
            response.save_error,
            Some(PersistenceError::Write { .. })
        ));
        assert_eq!(*session.tallies(), Tallies { x: 3, o: 0 });

        // Play continues after the failed write
        session.handle(Command::ResetClicked);
        let response = session.handle(Command::CellClicked(0));
        assert_eq!(response.outcome, Some(MoveOutcome::Continue));
    }
}
