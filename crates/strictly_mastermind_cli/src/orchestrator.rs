//! Game loop wiring players to the turn resolution service.

use std::io::Write;

use anyhow::Result;
use derive_new::new;
use strictly_mastermind::{
    CodeBreaker, CodeSetter, Game, GameError, PlayerAction, PlayerRole, validate_combination,
};
use tracing::{debug, info, instrument, warn};

use crate::render::render_board;

/// How a play session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A winner was resolved.
    Finished(PlayerRole),
    /// A player chose to save and quit.
    Saved,
    /// A player chose to drop the game.
    Discarded,
}

/// Runs one session of a game with seated players.
#[derive(new)]
pub struct GameOrchestrator<'g, W: Write> {
    game: &'g mut Game,
    setter: Box<dyn CodeSetter>,
    breaker: Box<dyn CodeBreaker>,
    out: W,
}

impl<W: Write> GameOrchestrator<'_, W> {
    /// Plays until the game ends or a player leaves.
    ///
    /// Rejected transitions such as undo on an empty history are reported to
    /// the output and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns an error if a player fails or the output cannot be written.
    #[instrument(skip(self), fields(mode = %self.game.configuration().game_mode()))]
    pub fn run(&mut self) -> Result<SessionOutcome> {
        if !self.game.state().game_over() {
            if let Some(outcome) = self.ensure_secret()? {
                return Ok(outcome);
            }
        }
        write!(self.out, "{}", render_board(self.game))?;

        loop {
            if self.game.state().game_over() {
                return self.finish();
            }

            let guess = match self.breaker.obtain_guess()? {
                PlayerAction::Play(guess) => guess,
                PlayerAction::Undo => {
                    self.apply(|game| game.service().undo())?;
                    continue;
                }
                PlayerAction::Redo => {
                    self.apply(|game| game.service().redo())?;
                    continue;
                }
                PlayerAction::Quit => return self.leave(SessionOutcome::Saved),
                PlayerAction::Discard => return self.leave(SessionOutcome::Discarded),
            };

            if let Err(e) = validate_combination(&guess, self.game.configuration()) {
                warn!(guess = %guess, error = %e, "Breaker offered an invalid guess");
                writeln!(self.out, "{}", GameError::from(e))?;
                continue;
            }

            let feedback = match self.setter.obtain_feedback(&guess)? {
                PlayerAction::Play(feedback) => feedback,
                PlayerAction::Undo => {
                    self.apply(|game| game.service().undo())?;
                    continue;
                }
                PlayerAction::Redo => {
                    self.apply(|game| game.service().redo())?;
                    continue;
                }
                PlayerAction::Quit => return self.leave(SessionOutcome::Saved),
                PlayerAction::Discard => return self.leave(SessionOutcome::Discarded),
            };

            writeln!(self.out, "{} -> {}", guess, feedback)?;
            self.apply(|game| game.service().add_round(guess, feedback))?;
        }
    }

    /// Asks the setter for a secret when one is needed and none is stored.
    fn ensure_secret(&mut self) -> Result<Option<SessionOutcome>> {
        if !self.setter.needs_secret() || self.setter.secret_code().is_some() {
            return Ok(None);
        }
        loop {
            match self.setter.set_secret_code()? {
                PlayerAction::Play(secret) => {
                    self.game.bind_secret_code(secret)?;
                    debug!("Secret code bound");
                    return Ok(None);
                }
                PlayerAction::Quit => return self.leave(SessionOutcome::Saved).map(Some),
                PlayerAction::Discard => return self.leave(SessionOutcome::Discarded).map(Some),
                PlayerAction::Undo | PlayerAction::Redo => {
                    writeln!(self.out, "{}", GameError::GameNotStarted)?;
                }
            }
        }
    }

    /// Applies a transition, rendering on success and reporting on failure.
    fn apply(&mut self, transition: impl FnOnce(&mut Game) -> Result<(), GameError>) -> Result<()> {
        match transition(self.game) {
            Ok(()) => write!(self.out, "{}", render_board(self.game))?,
            Err(GameError::InvariantViolation(message)) => {
                anyhow::bail!("Invariant violation: {}", message)
            }
            Err(e) => {
                debug!(error = %e, "Transition rejected");
                writeln!(self.out, "{}", e)?;
            }
        }
        Ok(())
    }

    fn leave(&mut self, outcome: SessionOutcome) -> Result<SessionOutcome> {
        match outcome {
            SessionOutcome::Saved => writeln!(self.out, "Game saved.")?,
            SessionOutcome::Discarded => writeln!(self.out, "Game discarded.")?,
            SessionOutcome::Finished(_) => {}
        }
        info!(?outcome, "Session ended");
        Ok(outcome)
    }

    fn finish(&mut self) -> Result<SessionOutcome> {
        let winner = self.game.state().winner();
        let steps = self.game.board().len();
        match winner {
            PlayerRole::CodeBreaker => {
                writeln!(self.out, "Congratulations! The code was cracked in {} steps!", steps)?
            }
            _ => match self.secret_text() {
                Some(secret) => writeln!(
                    self.out,
                    "Sorry, out of attempts. The secret code was {}.",
                    secret
                )?,
                None => writeln!(self.out, "Sorry, out of attempts.")?,
            },
        }
        info!(%winner, steps, "Game finished");
        Ok(SessionOutcome::Finished(winner))
    }

    fn secret_text(&self) -> Option<String> {
        self.setter
            .secret_code()
            .or_else(|| self.game.entities().secret_code())
            .map(ToString::to_string)
    }
}
