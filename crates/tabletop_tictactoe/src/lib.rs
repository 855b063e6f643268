//! Pure tic-tac-toe game logic.
//!
//! The engine owns a 3x3 board, whose turn it is and who (if anyone) has
//! won. Callers feed it raw move indices and act on the returned outcome;
//! it never prints or prompts.
//!
//! # Example
//!
//! ```
//! use tabletop_tictactoe::{Game, Mark, MoveOutcome};
//!
//! let mut game = Game::new();
//! for index in [0, 3, 1, 4] {
//!     assert_eq!(game.attempt_move(index), Ok(MoveOutcome::Continue));
//! }
//! assert_eq!(game.attempt_move(2), Ok(MoveOutcome::Win(Mark::X)));
//! assert!(game.is_over());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
pub mod rules;
mod types;

pub use game::{Game, GameStatus, MoveError, MoveOutcome};
pub use types::{BOARD_LENGTH, Board, CELL_COUNT, Mark, Square};
