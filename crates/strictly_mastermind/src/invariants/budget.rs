//! Budget invariant: history never exceeds the attempt budget.

use super::Invariant;
use crate::Game;

/// Invariant: number of recorded rounds <= attempts allowed.
pub struct HistoryWithinBudget;

impl Invariant<Game> for HistoryWithinBudget {
    fn holds(game: &Game) -> bool {
        game.board().len() <= usize::from(*game.configuration().attempts_allowed())
    }

    fn description() -> &'static str {
        "Round count does not exceed attempts allowed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Feedback, GameConfiguration, GameMode};

    #[test]
    fn test_full_budget_holds() {
        let mut game = Game::new(GameConfiguration::new(6, 4, 2, GameMode::PVP).unwrap());
        let mut service = game.service();
        service.add_round([1, 2, 3, 4].into(), Feedback::new(0, 0)).unwrap();
        service.add_round([4, 3, 2, 1].into(), Feedback::new(0, 0)).unwrap();

        assert!(HistoryWithinBudget::holds(&game));
        assert_eq!(game.board().len(), 2);
    }
}
