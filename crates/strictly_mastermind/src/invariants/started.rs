//! Start invariant: rounds on the board imply the game has started.

use super::Invariant;
use crate::Game;

/// Invariant: a non-empty history implies `game_started`.
///
/// The converse does not hold: undoing every round leaves the game started.
pub struct StartedWhenPlayed;

impl Invariant<Game> for StartedWhenPlayed {
    fn holds(game: &Game) -> bool {
        game.board().is_empty() || game.state().game_started()
    }

    fn description() -> &'static str {
        "Recorded rounds imply the game has started"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Feedback, GameConfiguration, GameMode, Round};

    #[test]
    fn test_started_after_undo_all() {
        let mut game = Game::new(GameConfiguration::new(6, 4, 5, GameMode::PVP).unwrap());
        game.service()
            .add_round([1, 2, 3, 4].into(), Feedback::new(0, 1))
            .unwrap();
        game.service().undo().unwrap();

        assert!(game.board().is_empty());
        assert!(game.state().game_started());
        assert!(StartedWhenPlayed::holds(&game));
    }

    #[test]
    fn test_rounds_without_start_violates() {
        let config = GameConfiguration::new(6, 4, 5, GameMode::PVP).unwrap();
        let mut game = Game::new(config);
        let round = Round::new([1, 2, 3, 4].into(), Feedback::new(0, 1), &config).unwrap();
        game.board.add_round(round);

        assert!(!StartedWhenPlayed::holds(&game));
    }
}
