//! Round and session loop between the engine and the console.

use crate::console::{ConsoleError, MoveSource, Presenter};
use derive_getters::Getters;
use tabletop_tictactoe::{Game, GameStatus, Mark};
use tracing::{debug, info, instrument};

/// Tally of finished rounds in one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Rounds played to completion.
    rounds: usize,
    /// Rounds won by X.
    x_wins: usize,
    /// Rounds won by O.
    o_wins: usize,
    /// Rounds drawn.
    draws: usize,
}

impl SessionSummary {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Drawn => self.draws += 1,
            GameStatus::InProgress => return,
        }
        self.rounds += 1;
    }
}

/// Drives rounds of tic-tac-toe through a console.
#[derive(Debug)]
pub struct Orchestrator<C> {
    game: Game,
    console: C,
    summary: SessionSummary,
}

impl<C: MoveSource + Presenter> Orchestrator<C> {
    /// Creates an orchestrator with a fresh game.
    pub fn new(console: C) -> Self {
        Self {
            game: Game::new(),
            console,
            summary: SessionSummary::default(),
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the session tally so far.
    pub fn summary(&self) -> &SessionSummary {
        &self.summary
    }

    /// Consumes the orchestrator, returning the console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Plays the current game until it is won or drawn.
    ///
    /// Rejected moves are reported and the same player is asked again.
    #[instrument(skip(self), fields(round = self.summary.rounds + 1))]
    pub fn play_round(&mut self) -> Result<GameStatus, ConsoleError> {
        while !self.game.is_over() {
            self.console.show_board(self.game.board())?;

            let player = self.game.current_player();
            let index = self.console.next_raw_move(player)?;
            match self.game.attempt_move(index) {
                Ok(outcome) => debug!(%player, index, ?outcome, "Move accepted"),
                Err(e) => {
                    debug!(%player, index, error = %e, "Move rejected");
                    self.console.show_rejection(&e)?;
                }
            }
        }

        self.console.show_board(self.game.board())?;
        let status = self.game.status();
        self.console.show_outcome(status)?;
        self.summary.record(status);
        info!(?status, "Round finished");
        Ok(status)
    }

    /// Plays rounds until the players decline a rematch or input runs out.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<SessionSummary, ConsoleError> {
        loop {
            match self.play_round() {
                Ok(_) => {}
                Err(ConsoleError::InputClosed) => {
                    info!("Input closed mid-round");
                    break;
                }
                Err(e) => return Err(e),
            }

            if !self.console.play_again()? {
                break;
            }
            self.game.reset();
        }

        info!(
            rounds = self.summary.rounds,
            x_wins = self.summary.x_wins,
            o_wins = self.summary.o_wins,
            draws = self.summary.draws,
            "Session finished"
        );
        Ok(self.summary.clone())
    }
}
