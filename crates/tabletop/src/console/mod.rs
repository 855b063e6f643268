//! Terminal collaborators for the game engine.
//!
//! The engine only ever sees integers. Everything textual lives here: the
//! move prompt, the retry on non-numeric input, board drawing and the
//! end-of-round messages.

mod board;

pub use board::render_board;

use derive_more::{Display, Error};
use std::io::{BufRead, StdinLock, Stdout, Write};
use tabletop_tictactoe::{Board, GameStatus, Mark, MoveError};
use tracing::{debug, instrument};

const INVALID_INPUT: &str = "Wrong input. Please try again.";
const OUT_OF_BOUNDS: &str = "Position out of bounds. Please try again.";
const POSITION_FILLED: &str = "Position already filled. Please try again.";
const GAME_OVER: &str = "The game is already over.";
const DRAW_MESSAGE: &str = "The game ended in a draw.";
const REPLAY_PROMPT: &str = "Do you wish to play again? [y/N] ";

/// Console failure.
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// Reading or writing the terminal failed.
    #[display("console I/O failed: {_0}")]
    Io(std::io::Error),
    /// Input reached end-of-file.
    #[display("input closed")]
    InputClosed,
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Supplies raw moves for the engine.
pub trait MoveSource {
    /// Asks `player` for a move. Non-numeric input is handled here and never
    /// reaches the engine; range checks are left to the engine.
    fn next_raw_move(&mut self, player: Mark) -> Result<i64, ConsoleError>;

    /// Asks whether another round should be played.
    fn play_again(&mut self) -> Result<bool, ConsoleError>;
}

/// Shows game state to the people playing.
pub trait Presenter {
    /// Draws the board.
    fn show_board(&mut self, board: &Board) -> Result<(), ConsoleError>;

    /// Explains why a move was not accepted.
    fn show_rejection(&mut self, error: &MoveError) -> Result<(), ConsoleError>;

    /// Announces how the round ended.
    fn show_outcome(&mut self, status: GameStatus) -> Result<(), ConsoleError>;
}

/// Line-based terminal console over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    padding: usize,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio(padding: usize) -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout(), padding)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console; `padding` is the space either side of each cell.
    pub fn new(input: R, output: W, padding: usize) -> Self {
        Self {
            input,
            output,
            padding,
        }
    }

    /// Consumes the console, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed);
        }
        Ok(line.trim().to_string())
    }

    fn say(&mut self, text: &str) -> Result<(), ConsoleError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> MoveSource for Console<R, W> {
    #[instrument(skip(self))]
    fn next_raw_move(&mut self, player: Mark) -> Result<i64, ConsoleError> {
        let text = format!("Player {player}, please enter the index of your next move: ");
        loop {
            let answer = self.prompt(&text)?;
            match answer.parse::<i64>() {
                Ok(index) => return Ok(index),
                Err(e) => {
                    debug!(%answer, error = %e, "Rejected non-numeric move");
                    self.say(INVALID_INPUT)?;
                }
            }
        }
    }

    #[instrument(skip(self))]
    fn play_again(&mut self) -> Result<bool, ConsoleError> {
        match self.prompt(REPLAY_PROMPT) {
            Ok(answer) => Ok(answer.eq_ignore_ascii_case("y")),
            Err(ConsoleError::InputClosed) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

impl<R: BufRead, W: Write> Presenter for Console<R, W> {
    fn show_board(&mut self, board: &Board) -> Result<(), ConsoleError> {
        let drawing = render_board(board, self.padding);
        write!(self.output, "{drawing}")?;
        Ok(())
    }

    fn show_rejection(&mut self, error: &MoveError) -> Result<(), ConsoleError> {
        let message = match error {
            MoveError::OutOfBounds { .. } => OUT_OF_BOUNDS,
            MoveError::PositionFilled { .. } => POSITION_FILLED,
            MoveError::GameOver => GAME_OVER,
        };
        self.say(message)
    }

    fn show_outcome(&mut self, status: GameStatus) -> Result<(), ConsoleError> {
        match status {
            GameStatus::Won(mark) => self.say(&format!("\nPlayer {mark} has won the game!!")),
            GameStatus::Drawn => self.say(DRAW_MESSAGE),
            GameStatus::InProgress => Ok(()),
        }
    }
}
