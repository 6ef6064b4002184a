//! First-class invariants for Mastermind games.
//!
//! Invariants are properties the turn resolution service must preserve. They
//! are checked as postconditions in debug builds and when games are loaded
//! from storage.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not only the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

mod budget;
mod outcome;
mod started;
mod well_formed;

pub use budget::HistoryWithinBudget;
pub use outcome::OutcomeConsistent;
pub use started::StartedWhenPlayed;
pub use well_formed::RoundsWellFormed;

/// All Mastermind invariants as a composable set.
pub type MastermindInvariants = (
    HistoryWithinBudget,
    RoundsWellFormed,
    OutcomeConsistent,
    StartedWhenPlayed,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Feedback, Game, GameConfiguration, GameMode};

    fn game() -> Game {
        Game::new(GameConfiguration::new(6, 4, 3, GameMode::PVP).unwrap())
    }

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(MastermindInvariants::check_all(&game()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_rounds() {
        let mut game = game();
        let mut service = game.service();
        service.add_round([1, 1, 2, 2].into(), Feedback::new(1, 1)).unwrap();
        service.add_round([3, 3, 4, 4].into(), Feedback::new(0, 2)).unwrap();
        service.undo().unwrap();

        assert!(MastermindInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_each_violation() {
        let mut game = game();
        game.state.set_winner(crate::PlayerRole::CodeBreaker);

        let violations = MastermindInvariants::check_all(&game).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, OutcomeConsistent::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (HistoryWithinBudget, StartedWhenPlayed);
        assert!(TwoInvariants::check_all(&game()).is_ok());
    }
}
