//! Game engine for tic-tac-toe.
//!
//! [`Game`] owns the board, the turn indicator and the winner. It is mutated
//! only through [`Game::attempt_move`] and [`Game::reset`]; every rejected
//! move leaves it untouched.

use crate::rules;
use crate::types::{Board, CELL_COUNT, Mark};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current phase of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still being accepted.
    InProgress,
    /// A player completed a line.
    Won(Mark),
    /// The board filled up without a line.
    Drawn,
}

impl GameStatus {
    /// True for `Won` and `Drawn`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Move placed, turn passed to the opponent.
    Continue,
    /// Move completed a line for this mark.
    Win(Mark),
    /// Move filled the last cell without a line.
    Draw,
}

/// Reasons a move is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Index lies outside 0-8.
    #[display("position {index} is out of bounds (expected 0-8)")]
    OutOfBounds {
        /// Index that was requested.
        index: i64,
    },
    /// Target cell already holds a mark.
    #[display("position {index} is already filled")]
    PositionFilled {
        /// Index that was requested.
        index: usize,
    },
    /// The round has already been won or drawn.
    #[display("game is already over")]
    GameOver,
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
    winner: Option<Mark>,
    history: Vec<usize>,
}

impl Game {
    /// Creates a fresh game: empty board, X to move, no winner.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            winner: None,
            history: Vec::new(),
        }
    }

    /// Plays `moves` in order from a fresh game, stopping at the first rejection.
    #[instrument(skip(moves))]
    pub fn replay(moves: impl IntoIterator<Item = i64>) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for index in moves {
            game.attempt_move(index)?;
        }
        Ok(game)
    }

    /// Discards all state and starts a new round.
    #[instrument(skip(self), fields(moves_played = self.history.len()))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("Game reset");
    }

    /// Returns the mark of the player to move.
    pub fn current_player(&self) -> Mark {
        self.to_move
    }

    /// Returns the winner, if the round was won.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the indices of accepted moves, oldest first.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Checks if the board has no empty cell left.
    pub fn has_drawn(&self) -> bool {
        rules::is_full(&self.board)
    }

    /// Checks if the round is won or drawn.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.has_drawn()
    }

    /// Returns the phase of the round.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(mark) => GameStatus::Won(mark),
            None if self.has_drawn() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    /// Checks whether `mark` holds a complete winning line.
    pub fn check_win(&self, mark: Mark) -> bool {
        rules::check_win(&self.board, mark)
    }

    /// Places the current player's mark at `index`.
    ///
    /// The move is applied in full or not at all. On a win the turn stays
    /// with the winner; on a draw the turn also stays put.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the round is already won or drawn.
    /// - [`MoveError::OutOfBounds`] if `index` is outside 0-8.
    /// - [`MoveError::PositionFilled`] if the cell already holds a mark.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn attempt_move(&mut self, index: i64) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            warn!("Move attempted after the game ended");
            return Err(MoveError::GameOver);
        }

        let pos = usize::try_from(index)
            .ok()
            .filter(|pos| *pos < CELL_COUNT)
            .ok_or(MoveError::OutOfBounds { index })?;

        if !self.board.is_empty(pos) {
            debug!(pos, "Position already filled");
            return Err(MoveError::PositionFilled { index: pos });
        }

        let mover = self.to_move;
        self.board.place(pos, mover);
        self.history.push(pos);

        if self.check_win(mover) {
            self.winner = Some(mover);
            info!(winner = %mover, moves = self.history.len(), "Game won");
            return Ok(MoveOutcome::Win(mover));
        }

        if self.has_drawn() {
            info!("Game drawn");
            return Ok(MoveOutcome::Draw);
        }

        self.to_move = mover.opponent();
        Ok(MoveOutcome::Continue)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_first_move_passes_turn() {
        let mut game = Game::new();
        assert_eq!(game.attempt_move(4), Ok(MoveOutcome::Continue));
        assert_eq!(game.board().get(4), Some(Square::Occupied(Mark::X)));
        assert_eq!(game.current_player(), Mark::O);
        assert_eq!(game.history(), &[4]);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.attempt_move(-1),
            Err(MoveError::OutOfBounds { index: -1 })
        );
        assert_eq!(
            game.attempt_move(9),
            Err(MoveError::OutOfBounds { index: 9 })
        );
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut game = Game::new();
        game.attempt_move(0).unwrap();
        let before = game.clone();
        assert_eq!(
            game.attempt_move(0),
            Err(MoveError::PositionFilled { index: 0 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_win_keeps_turn_with_winner() {
        let mut game = Game::replay([0, 3, 1, 4]).unwrap();
        assert_eq!(game.attempt_move(2), Ok(MoveOutcome::Win(Mark::X)));
        assert_eq!(game.current_player(), Mark::X);
        assert_eq!(game.status(), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_status_transitions() {
        let mut game = Game::new();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.status().is_terminal());

        // X O X / X O O / O X X
        for index in [0, 1, 2, 4, 3, 5, 7, 6] {
            assert_eq!(game.attempt_move(index), Ok(MoveOutcome::Continue));
        }
        assert_eq!(game.attempt_move(8), Ok(MoveOutcome::Draw));
        assert_eq!(game.status(), GameStatus::Drawn);
        assert!(game.status().is_terminal());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::OutOfBounds { index: 12 }.to_string(),
            "position 12 is out of bounds (expected 0-8)"
        );
        assert_eq!(
            MoveError::PositionFilled { index: 3 }.to_string(),
            "position 3 is already filled"
        );
    }
}
