//! Well-formedness invariant: every round fits the configuration.

use super::Invariant;
use crate::Game;

/// Invariant: each recorded round passes [`Round::validate`](crate::Round::validate).
pub struct RoundsWellFormed;

impl Invariant<Game> for RoundsWellFormed {
    fn holds(game: &Game) -> bool {
        game.board()
            .rounds()
            .iter()
            .all(|round| round.validate(game.configuration()).is_ok())
    }

    fn description() -> &'static str {
        "Every round fits the game configuration"
    }
}
