//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Mark};
use std::collections::BTreeSet;
use tracing::instrument;

/// Every index-triple that wins the game: rows, then columns, then diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line fully held by `mark`, if any.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board, mark: Mark) -> Option<[usize; 3]> {
    let held: BTreeSet<usize> = board.positions_of(mark).collect();
    WINNING_LINES
        .iter()
        .find(|line| line.iter().all(|pos| held.contains(pos)))
        .copied()
}

/// Checks whether `mark` holds a complete winning line.
pub fn check_win(board: &Board, mark: Mark) -> bool {
    winning_line(board, mark).is_some()
}
