//! Turn resolution: the only path that mutates a game's board and state.

use tracing::{debug, info, instrument};

use crate::contracts::{AddRoundContract, Contract, RedoContract, UndoContract};
use crate::error::GameError;
use crate::game::Game;
use crate::state::{PlayerRole, determine_winner};
use crate::types::{Combination, Feedback};

/// Applies add, undo and redo to a borrowed [`Game`].
///
/// Every operation checks its contract's preconditions first, so a failed call
/// leaves the game untouched. In debug builds the postconditions are checked
/// too and a breach surfaces as [`GameError::InvariantViolation`].
#[derive(Debug)]
pub struct GameService<'g> {
    game: &'g mut Game,
}

impl<'g> GameService<'g> {
    /// Wraps `game`.
    pub fn new(game: &'g mut Game) -> Self {
        Self { game }
    }

    /// Records a guess and its feedback, then resolves the winner.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameEnded`] if a winner is already resolved.
    /// - [`GameError::InvalidRound`] if the round does not fit the configuration.
    #[instrument(skip(self, guess), fields(guess = %guess, feedback = %feedback))]
    pub fn add_round(&mut self, guess: Combination, feedback: Feedback) -> Result<(), GameError> {
        let round = AddRoundContract::admit(self.game, guess, feedback)?;

        #[cfg(debug_assertions)]
        let before = self.game.clone();

        self.game.board.add_round(round);
        self.game.state.mark_started();

        let configuration = *self.game.configuration();
        let winner = determine_winner(
            self.game.board.len(),
            *configuration.attempts_allowed(),
            feedback,
            *configuration.number_of_dots(),
        );
        self.game.state.set_winner(winner);

        #[cfg(debug_assertions)]
        AddRoundContract::post(&before, self.game)?;

        match winner {
            PlayerRole::Undetermined => debug!(
                round = self.game.board.len(),
                remaining = self.attempts_remaining(),
                "Round recorded"
            ),
            _ => info!(%winner, rounds = self.game.board.len(), "Game over"),
        }
        Ok(())
    }

    /// Takes back the most recent round.
    ///
    /// Neither `game_started` nor the winner is recomputed.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameNotStarted`] before the first round.
    /// - [`GameError::GameEnded`] once a winner is resolved.
    /// - [`GameError::EmptyHistory`] if every round has been undone.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<(), GameError> {
        UndoContract::pre(self.game, &())?;

        #[cfg(debug_assertions)]
        let before = self.game.clone();

        self.game.board.undo()?;

        #[cfg(debug_assertions)]
        UndoContract::post(&before, self.game)?;

        info!(rounds = self.game.board.len(), "Round undone");
        Ok(())
    }

    /// Restores the most recently undone round.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameNotStarted`] before the first round.
    /// - [`GameError::NoRedoAvailable`] if nothing was undone since the last
    ///   added round.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> Result<(), GameError> {
        RedoContract::pre(self.game, &())?;

        #[cfg(debug_assertions)]
        let before = self.game.clone();

        self.game.board.redo()?;

        #[cfg(debug_assertions)]
        RedoContract::post(&before, self.game)?;

        info!(rounds = self.game.board.len(), "Round redone");
        Ok(())
    }

    /// Guesses the breaker may still make.
    pub fn attempts_remaining(&self) -> usize {
        usize::from(*self.game.configuration().attempts_allowed())
            .saturating_sub(self.game.board.len())
    }

    /// The game being served.
    pub fn game(&self) -> &Game {
        self.game
    }
}
