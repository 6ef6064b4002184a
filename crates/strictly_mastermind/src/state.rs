//! Game state and the win determination rule.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::types::Feedback;

/// Resolved winner of a game, or [`PlayerRole::Undetermined`] while it runs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum PlayerRole {
    /// No winner yet.
    #[default]
    Undetermined,
    /// The code setter won: the budget ran out.
    CodeSetter,
    /// The code breaker won: the code was cracked.
    CodeBreaker,
}

/// Whether the game has started and who, if anyone, has won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    game_started: bool,
    winner: PlayerRole,
}

impl GameState {
    /// Creates the state of a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the first round has been added.
    pub fn game_started(&self) -> bool {
        self.game_started
    }

    /// The resolved winner.
    pub fn winner(&self) -> PlayerRole {
        self.winner
    }

    /// True iff a winner has been resolved.
    pub fn game_over(&self) -> bool {
        self.winner != PlayerRole::Undetermined
    }

    pub(crate) fn mark_started(&mut self) {
        self.game_started = true;
    }

    pub(crate) fn set_winner(&mut self, winner: PlayerRole) {
        self.winner = winner;
    }
}

/// Decides the winner after a round has been recorded.
///
/// A perfect last feedback wins for the breaker even on the final attempt;
/// otherwise reaching the attempt budget wins for the setter.
#[instrument]
pub fn determine_winner(
    rounds_played: usize,
    attempts_allowed: u8,
    last_feedback: Feedback,
    number_of_dots: u8,
) -> PlayerRole {
    if last_feedback.is_perfect(number_of_dots) {
        PlayerRole::CodeBreaker
    } else if rounds_played >= usize::from(attempts_allowed) {
        PlayerRole::CodeSetter
    } else {
        PlayerRole::Undetermined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_exhausted() {
        assert_eq!(
            determine_winner(5, 5, Feedback::new(1, 0), 4),
            PlayerRole::CodeSetter
        );
    }

    #[test]
    fn test_perfect_on_last_attempt() {
        assert_eq!(
            determine_winner(5, 5, Feedback::new(4, 0), 4),
            PlayerRole::CodeBreaker
        );
    }

    #[test]
    fn test_game_continues() {
        assert_eq!(
            determine_winner(4, 5, Feedback::new(1, 0), 4),
            PlayerRole::Undetermined
        );
    }

    #[test]
    fn test_game_over_is_derived() {
        let mut state = GameState::new();
        assert!(!state.game_over());
        state.set_winner(PlayerRole::CodeSetter);
        assert!(state.game_over());
    }
}
