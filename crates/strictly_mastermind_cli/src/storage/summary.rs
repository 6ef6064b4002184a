//! Flat, read-only view of a stored game for listings.

use derive_getters::Getters;
use serde::Serialize;
use strictly_mastermind::{Combination, Feedback, Game, GameMode, PlayerKind, PlayerRole};
use tracing::instrument;

/// What the `list` and `show` commands print about a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameSummary {
    id: String,
    number_of_colors: u8,
    number_of_dots: u8,
    attempts_allowed: u8,
    game_mode: GameMode,
    game_started: bool,
    winner: PlayerRole,
    game_over: bool,
    attempts_made: usize,
    guesses: Vec<Combination>,
    feedbacks: Vec<Feedback>,
    code_setter: PlayerKind,
    code_breaker: PlayerKind,
}

impl GameSummary {
    /// Summarizes `game` stored under `id`.
    #[instrument(skip(game))]
    pub fn from_game(id: impl Into<String> + std::fmt::Debug, game: &Game) -> Self {
        let configuration = game.configuration();
        let board = game.board();
        Self {
            id: id.into(),
            number_of_colors: *configuration.number_of_colors(),
            number_of_dots: *configuration.number_of_dots(),
            attempts_allowed: *configuration.attempts_allowed(),
            game_mode: *configuration.game_mode(),
            game_started: game.state().game_started(),
            winner: game.state().winner(),
            game_over: game.state().game_over(),
            attempts_made: board.len(),
            guesses: board.guesses().cloned().collect(),
            feedbacks: board.feedbacks().collect(),
            code_setter: game.entities().code_setter(),
            code_breaker: game.entities().code_breaker(),
        }
    }

    /// True while the game can still be played.
    pub fn is_continuable(&self) -> bool {
        !self.game_over
    }
}

impl std::fmt::Display for GameSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.game_over {
            format!("winner: {}", self.winner)
        } else if self.game_started {
            "in progress".to_string()
        } else {
            "not started".to_string()
        };
        write!(
            f,
            "{}  {}  colors={} dots={}  {}/{} attempts  {}",
            self.id,
            self.game_mode,
            self.number_of_colors,
            self.number_of_dots,
            self.attempts_made,
            self.attempts_allowed,
            status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_mastermind::GameConfiguration;

    #[test]
    fn test_summary_reflects_game() {
        let mut game = Game::new(GameConfiguration::new(6, 4, 10, GameMode::PVC).unwrap());
        game.service()
            .add_round([1, 2, 3, 4].into(), Feedback::new(1, 2))
            .unwrap();

        let summary = GameSummary::from_game("abc234", &game);

        assert_eq!(summary.id(), "abc234");
        assert_eq!(*summary.attempts_made(), 1);
        assert_eq!(summary.feedbacks(), &vec![Feedback::new(1, 2)]);
        assert_eq!(*summary.code_breaker(), PlayerKind::Computer);
        assert!(summary.is_continuable());
        assert!(summary.to_string().contains("in progress"));
    }
}
