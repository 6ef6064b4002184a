//! Contract-based validation for the turn resolution service.
//!
//! Each ledger operation has a contract: preconditions run before any
//! mutation, postconditions re-check the invariants afterwards.
//! {P} operation {Q}

use tracing::{instrument, warn};

use crate::error::GameError;
use crate::game::Game;
use crate::invariants::{InvariantSet, MastermindInvariants};
use crate::round::Round;
use crate::types::{Combination, Feedback};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

/// A guess and its feedback, not yet recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSubmission<'a> {
    /// The proposed guess.
    pub guess: &'a Combination,
    /// The feedback for it.
    pub feedback: Feedback,
}

/// Precondition: no winner has been resolved.
pub struct GameNotOver;

impl GameNotOver {
    /// Fails with [`GameError::GameEnded`] once the game is over.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), GameError> {
        if game.state().game_over() {
            warn!(winner = %game.state().winner(), "Game already ended");
            Err(GameError::GameEnded)
        } else {
            Ok(())
        }
    }
}

/// Precondition: at least one round has ever been added.
pub struct GameStarted;

impl GameStarted {
    /// Fails with [`GameError::GameNotStarted`] on a fresh game.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), GameError> {
        if game.state().game_started() {
            Ok(())
        } else {
            warn!("Game has not started");
            Err(GameError::GameNotStarted)
        }
    }
}

/// Precondition: the submission fits the game's configuration.
///
/// Passing the check yields the validated [`Round`].
pub struct RoundFits;

impl RoundFits {
    /// Fails with [`GameError::InvalidRound`] on a malformed guess or feedback.
    #[instrument(skip(guess, game), fields(guess = %guess))]
    pub fn check(guess: Combination, feedback: Feedback, game: &Game) -> Result<Round, GameError> {
        Ok(Round::new(guess, feedback, game.configuration())?)
    }
}

fn check_invariants(after: &Game) -> Result<(), GameError> {
    MastermindInvariants::check_all(after).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
    })
}

fn check_length_change(before: &Game, after: &Game, expected: usize) -> Result<(), GameError> {
    if after.board().len() == expected {
        Ok(())
    } else {
        Err(GameError::InvariantViolation(format!(
            "Postcondition failed: history went from {} to {} rounds, expected {}",
            before.board().len(),
            after.board().len(),
            expected
        )))
    }
}

/// Contract for recording a round.
///
/// Preconditions:
/// - Game is not over
/// - Round fits the configuration
///
/// Postconditions:
/// - History grew by one round
/// - Game is marked started
/// - All invariants hold
pub struct AddRoundContract;

impl AddRoundContract {
    /// Checks the preconditions and hands back the round to record.
    ///
    /// `GameEnded` takes precedence over a malformed round.
    pub fn admit(game: &Game, guess: Combination, feedback: Feedback) -> Result<Round, GameError> {
        GameNotOver::check(game)?;
        RoundFits::check(guess, feedback, game)
    }
}

impl<'a> Contract<Game, RoundSubmission<'a>> for AddRoundContract {
    fn pre(game: &Game, submission: &RoundSubmission<'a>) -> Result<(), GameError> {
        Self::admit(game, submission.guess.clone(), submission.feedback).map(drop)
    }

    fn post(before: &Game, after: &Game) -> Result<(), GameError> {
        check_length_change(before, after, before.board().len() + 1)?;
        if !after.state().game_started() {
            return Err(GameError::InvariantViolation(
                "Postcondition failed: game not marked started".to_string(),
            ));
        }
        check_invariants(after)
    }
}

/// Contract for undoing the most recent round.
///
/// Preconditions:
/// - Game has started
/// - Game is not over
///
/// Postconditions:
/// - History shrank by one round
/// - Winner is unchanged
pub struct UndoContract;

impl Contract<Game, ()> for UndoContract {
    fn pre(game: &Game, _action: &()) -> Result<(), GameError> {
        GameStarted::check(game)?;
        GameNotOver::check(game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), GameError> {
        check_length_change(before, after, before.board().len().saturating_sub(1))?;
        if before.state() != after.state() {
            return Err(GameError::InvariantViolation(
                "Postcondition failed: undo changed the game state".to_string(),
            ));
        }
        check_invariants(after)
    }
}

/// Contract for redoing the most recently undone round.
///
/// Redo carries no game-over guard: a finished game never has a pending
/// redo, since the round that ended it cleared the undo buffer.
pub struct RedoContract;

impl Contract<Game, ()> for RedoContract {
    fn pre(game: &Game, _action: &()) -> Result<(), GameError> {
        GameStarted::check(game)
    }

    fn post(before: &Game, after: &Game) -> Result<(), GameError> {
        check_length_change(before, after, before.board().len() + 1)?;
        check_invariants(after)
    }
}
