//! Externally fed players that replay a queue of actions.

use std::collections::VecDeque;

use tracing::debug;

use super::{CodeBreaker, CodeSetter, PlayerAction};
use crate::configuration::PlayerKind;
use crate::error::PlayerError;
use crate::types::{Combination, Feedback};

/// Code setter whose feedback comes from a pre-supplied queue.
///
/// An exhausted queue answers [`PlayerAction::Quit`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedSetter {
    secret: Option<Combination>,
    feedbacks: VecDeque<PlayerAction<Feedback>>,
}

impl ScriptedSetter {
    /// Creates a setter answering with `feedbacks` in order.
    pub fn new(feedbacks: impl IntoIterator<Item = PlayerAction<Feedback>>) -> Self {
        Self {
            secret: None,
            feedbacks: feedbacks.into_iter().collect(),
        }
    }

    /// Attaches a secret to reveal once the game ends.
    pub fn with_secret(mut self, secret: Combination) -> Self {
        self.secret = Some(secret);
        self
    }

    /// Actions not yet consumed.
    pub fn remaining(&self) -> usize {
        self.feedbacks.len()
    }
}

impl CodeSetter for ScriptedSetter {
    fn kind(&self) -> PlayerKind {
        PlayerKind::External
    }

    fn needs_secret(&self) -> bool {
        self.secret.is_some()
    }

    fn set_secret_code(&mut self) -> Result<PlayerAction<Combination>, PlayerError> {
        self.secret
            .clone()
            .map(PlayerAction::Play)
            .ok_or_else(|| PlayerError::new("Scripted setter has no secret code"))
    }

    fn obtain_feedback(
        &mut self,
        guess: &Combination,
    ) -> Result<PlayerAction<Feedback>, PlayerError> {
        let action = self.feedbacks.pop_front().unwrap_or(PlayerAction::Quit);
        debug!(guess = %guess, ?action, "Scripted feedback");
        Ok(action)
    }

    fn secret_code(&self) -> Option<&Combination> {
        self.secret.as_ref()
    }
}

/// Code breaker whose guesses come from a pre-supplied queue.
///
/// An exhausted queue answers [`PlayerAction::Quit`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedBreaker {
    guesses: VecDeque<PlayerAction<Combination>>,
}

impl ScriptedBreaker {
    /// Creates a breaker playing `guesses` in order.
    pub fn new(guesses: impl IntoIterator<Item = PlayerAction<Combination>>) -> Self {
        Self {
            guesses: guesses.into_iter().collect(),
        }
    }

    /// Shorthand for a script made only of guesses.
    pub fn from_guesses(guesses: impl IntoIterator<Item = Combination>) -> Self {
        Self::new(guesses.into_iter().map(PlayerAction::Play))
    }

    /// Actions not yet consumed.
    pub fn remaining(&self) -> usize {
        self.guesses.len()
    }
}

impl CodeBreaker for ScriptedBreaker {
    fn kind(&self) -> PlayerKind {
        PlayerKind::External
    }

    fn obtain_guess(&mut self) -> Result<PlayerAction<Combination>, PlayerError> {
        let action = self.guesses.pop_front().unwrap_or(PlayerAction::Quit);
        debug!(?action, "Scripted guess");
        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breaker_replays_then_quits() {
        let mut breaker = ScriptedBreaker::new([
            PlayerAction::Play([1, 2, 3, 4].into()),
            PlayerAction::Undo,
        ]);
        assert_eq!(
            breaker.obtain_guess().unwrap(),
            PlayerAction::Play(Combination::from([1, 2, 3, 4]))
        );
        assert_eq!(breaker.obtain_guess().unwrap(), PlayerAction::Undo);
        assert_eq!(breaker.obtain_guess().unwrap(), PlayerAction::Quit);
        assert_eq!(breaker.remaining(), 0);
    }

    #[test]
    fn test_setter_needs_secret_only_when_given_one() {
        let setter = ScriptedSetter::new([]);
        assert!(!setter.needs_secret());
        assert!(setter.with_secret([1, 1].into()).needs_secret());
    }
}
