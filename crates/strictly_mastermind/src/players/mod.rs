//! Player capabilities for the two Mastermind roles.
//!
//! The core never calls players itself. A game loop asks the breaker for a
//! guess and the setter for feedback, then feeds both into
//! [`GameService::add_round`](crate::GameService::add_round).

mod computer;
mod scripted;

pub use computer::{ComputerBreaker, ComputerSetter, random_combination};
pub use scripted::{ScriptedBreaker, ScriptedSetter};

use crate::configuration::PlayerKind;
use crate::error::PlayerError;
use crate::types::{Combination, Feedback};

/// What a player chose to do when asked for a move.
///
/// Besides a move, a player may ask the game loop to undo, redo, save and
/// quit, or discard the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerAction<T> {
    /// A move: a secret, a guess or a feedback.
    Play(T),
    /// Take back the last round.
    Undo,
    /// Restore the last undone round.
    Redo,
    /// Save and leave the game.
    Quit,
    /// Leave the game without saving.
    Discard,
}

impl<T> PlayerAction<T> {
    /// Converts the move, leaving commands as they are.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PlayerAction<U> {
        match self {
            Self::Play(value) => PlayerAction::Play(f(value)),
            Self::Undo => PlayerAction::Undo,
            Self::Redo => PlayerAction::Redo,
            Self::Quit => PlayerAction::Quit,
            Self::Discard => PlayerAction::Discard,
        }
    }
}

/// The party that holds the secret and scores guesses.
pub trait CodeSetter {
    /// Kind of actor behind this setter.
    fn kind(&self) -> PlayerKind;

    /// Whether the game loop must ask for a secret before the first guess.
    ///
    /// Setters that type feedback by hand never need one.
    fn needs_secret(&self) -> bool {
        true
    }

    /// Picks the secret code and remembers it.
    fn set_secret_code(&mut self) -> Result<PlayerAction<Combination>, PlayerError>;

    /// Scores `guess`.
    fn obtain_feedback(
        &mut self,
        guess: &Combination,
    ) -> Result<PlayerAction<Feedback>, PlayerError>;

    /// The secret, once picked.
    fn secret_code(&self) -> Option<&Combination>;
}

/// The party that guesses.
pub trait CodeBreaker {
    /// Kind of actor behind this breaker.
    fn kind(&self) -> PlayerKind;

    /// Produces the next guess.
    fn obtain_guess(&mut self) -> Result<PlayerAction<Combination>, PlayerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_keeps_commands() {
        let undo: PlayerAction<u8> = PlayerAction::Undo;
        assert_eq!(undo.map(|v| v + 1), PlayerAction::Undo);
        assert_eq!(PlayerAction::Play(1u8).map(|v| v + 1), PlayerAction::Play(2));
    }
}
