//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Number of cells along one side of the board.
pub const BOARD_LENGTH: usize = 3;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_LENGTH * BOARD_LENGTH;

/// Player mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Player one (moves first).
    X,
    /// Player two.
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 board, row-major (row = index / 3, column = index % 3).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a board with every cell empty.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Gets the cell at `pos`, or `None` when `pos` is off the board.
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Checks if the cell at `pos` exists and is empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all cells in row-major order.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Iterates over the board one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(BOARD_LENGTH)
    }

    /// Indices of every cell holding `mark`.
    pub fn positions_of(&self, mark: Mark) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(move |(_, square)| **square == Square::Occupied(mark))
            .map(|(pos, _)| pos)
    }

    /// Writes `mark` into an empty cell. Callers validate `pos` first.
    pub(crate) fn place(&mut self, pos: usize, mark: Mark) {
        if let Some(square) = self.squares.get_mut(pos) {
            debug_assert_eq!(*square, Square::Empty);
            *square = Square::Occupied(mark);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
