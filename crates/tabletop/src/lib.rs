//! Tabletop - console front end for two small exercises.
//!
//! - **Tic-tac-toe**: two players share one terminal. The
//!   [`Orchestrator`] drives a [`tabletop_tictactoe::Game`] through a
//!   [`Console`], which prompts for moves and draws the board.
//! - **Calculator**: evaluates a single `lhs operator rhs` expression.
//!
//! # Example
//!
//! ```
//! use tabletop::{Console, Orchestrator};
//!
//! let input = "0\n3\n1\n4\n2\nn\n";
//! let mut output = Vec::new();
//! let console = Console::new(input.as_bytes(), &mut output, 1);
//! let summary = Orchestrator::new(console).run().unwrap();
//! assert_eq!(*summary.x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod calculator;
mod cli;
mod config;
mod console;
mod orchestrator;

pub use calculator::{CalcError, Calculation, Operator};
pub use cli::{Cli, Command};
pub use config::{ConfigError, ConsoleConfig};
pub use console::{Console, ConsoleError, MoveSource, Presenter, render_board};
pub use orchestrator::{Orchestrator, SessionSummary};
