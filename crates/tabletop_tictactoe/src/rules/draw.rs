//! Draw detection logic for tic-tac-toe.

use super::win::check_win;
use crate::types::{Board, Mark, Square};

/// Checks if no empty cell remains.
pub fn is_full(board: &Board) -> bool {
    !board.squares().contains(&Square::Empty)
}

/// A full board where neither player holds a line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !check_win(board, Mark::X) && !check_win(board, Mark::O)
}
