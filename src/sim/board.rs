//! The 3x3 board and its win lines
//!
//! Cells are addressed by index 0-8 in reading order: row = index / 3,
//! column = index % 3.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// Cells per row/column
pub const SIDE: usize = 3;

/// Every winning line, in scan order (rows, columns, diagonals)
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The player who moves after this one
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contents of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Occupant of the cell, if any
    pub fn player(&self) -> Option<Player> {
        match *self {
            Cell::Empty => None,
            Cell::Taken(player) => Some(player),
        }
    }
}

/// Nine cells in reading order
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell at `index`, or `None` when the index is off the board
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Place `player` on an empty cell. Returns false if the cell is taken or
    /// off the board, leaving the board untouched.
    pub fn place(&mut self, index: usize, player: Player) -> bool {
        match self.cells.get_mut(index) {
            Some(cell) if cell.is_empty() => {
                *cell = Cell::Taken(player);
                true
            }
            _ => false,
        }
    }

    /// Clear every cell
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of occupied cells
    pub fn filled(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// First completed line in [`LINES`] order, if any
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LINES.iter().copied().find(|&[a, b, c]| {
            let first = self.cells[a];
            !first.is_empty() && first == self.cells[b] && first == self.cells[c]
        })
    }

    /// Row and column of a cell index
    pub fn coords(index: usize) -> (usize, usize) {
        (index / SIDE, index % SIDE)
    }
}

impl fmt::Display for Board {
    /// Text grid; empty cells show their 1-based number so the shell can
    /// prompt with them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, chunk) in self.cells.chunks(SIDE).enumerate() {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let labels: Vec<String> = chunk
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell.player() {
                    Some(player) => player.to_string(),
                    None => (row * SIDE + col + 1).to_string(),
                })
                .collect();
            writeln!(f, " {} | {} | {} ", labels[0], labels[1], labels[2])?;
        }
        Ok(())
    }
}
