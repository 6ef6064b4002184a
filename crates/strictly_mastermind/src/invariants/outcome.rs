//! Outcome invariant: the winner agrees with the history.

use super::Invariant;
use crate::{Game, PlayerRole};

/// Invariant: the resolved winner matches the last round and budget.
///
/// - `CodeBreaker` requires a perfect last round.
/// - `CodeSetter` requires an exhausted budget without a perfect last round.
/// - `Undetermined` requires neither.
pub struct OutcomeConsistent;

impl Invariant<Game> for OutcomeConsistent {
    fn holds(game: &Game) -> bool {
        let dots = *game.configuration().number_of_dots();
        let cracked = game
            .board()
            .last_round()
            .is_some_and(|round| round.feedback().is_perfect(dots));
        let exhausted =
            game.board().len() >= usize::from(*game.configuration().attempts_allowed());

        match game.state().winner() {
            PlayerRole::CodeBreaker => cracked,
            PlayerRole::CodeSetter => exhausted && !cracked,
            PlayerRole::Undetermined => !cracked && !exhausted,
        }
    }

    fn description() -> &'static str {
        "Winner is consistent with the last round and attempt budget"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Feedback, GameConfiguration, GameMode};

    fn game(attempts: u8) -> Game {
        Game::new(GameConfiguration::new(6, 4, attempts, GameMode::PVP).unwrap())
    }

    #[test]
    fn test_breaker_win_holds() {
        let mut game = game(3);
        game.service()
            .add_round([1, 2, 3, 4].into(), Feedback::new(4, 0))
            .unwrap();
        assert!(OutcomeConsistent::holds(&game));
    }

    #[test]
    fn test_setter_win_holds() {
        let mut game = game(1);
        game.service()
            .add_round([1, 2, 3, 4].into(), Feedback::new(2, 0))
            .unwrap();
        assert_eq!(game.state().winner(), PlayerRole::CodeSetter);
        assert!(OutcomeConsistent::holds(&game));
    }

    #[test]
    fn test_unresolved_perfect_round_violates() {
        let mut game = game(3);
        game.service()
            .add_round([1, 2, 3, 4].into(), Feedback::new(4, 0))
            .unwrap();
        game.state.set_winner(PlayerRole::Undetermined);
        assert!(!OutcomeConsistent::holds(&game));
    }
}
