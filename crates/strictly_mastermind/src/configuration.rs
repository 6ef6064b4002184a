//! Game configuration and game modes.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::error::ConfigurationError;

/// Kind of actor playing a role.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum PlayerKind {
    /// A person at the keyboard.
    Human,
    /// A program choosing at random.
    Computer,
    /// Moves fed in from outside, such as a physical board.
    External,
}

/// Who sets the code and who breaks it.
///
/// The first letter names the code setter, the last the code breaker.
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Human sets, human breaks.
    PVP,
    /// Human sets, computer breaks.
    PVC,
    /// Computer sets, human breaks.
    #[default]
    CVP,
    /// Both sides are fed externally.
    EVE,
}

impl GameMode {
    /// Returns the (code setter, code breaker) kinds for this mode.
    #[instrument]
    pub fn roster(self) -> (PlayerKind, PlayerKind) {
        match self {
            Self::PVP => (PlayerKind::Human, PlayerKind::Human),
            Self::PVC => (PlayerKind::Human, PlayerKind::Computer),
            Self::CVP => (PlayerKind::Computer, PlayerKind::Human),
            Self::EVE => (PlayerKind::External, PlayerKind::External),
        }
    }

    /// Short description for menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::PVP => "Player vs Player",
            Self::PVC => "Player sets, Computer breaks",
            Self::CVP => "Computer sets, Player breaks",
            Self::EVE => "External vs External",
        }
    }
}

/// Fixed rules of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameConfiguration {
    /// Number of colors a peg can take.
    number_of_colors: u8,
    /// Pegs per combination.
    number_of_dots: u8,
    /// Guesses the code breaker may make.
    attempts_allowed: u8,
    /// Who sets and who breaks.
    game_mode: GameMode,
}

impl GameConfiguration {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] if there are fewer than two colors, no
    /// dots or no attempts.
    #[instrument]
    pub fn new(
        number_of_colors: u8,
        number_of_dots: u8,
        attempts_allowed: u8,
        game_mode: GameMode,
    ) -> Result<Self, ConfigurationError> {
        let configuration = Self {
            number_of_colors,
            number_of_dots,
            attempts_allowed,
            game_mode,
        };
        configuration.validate()?;
        debug!(?configuration, "Game configuration created");
        Ok(configuration)
    }

    /// Checks the value ranges.
    ///
    /// Deserialized configurations bypass [`GameConfiguration::new`], so
    /// loaders call this directly.
    ///
    /// # Errors
    ///
    /// Returns the first violated range as a [`ConfigurationError`].
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.number_of_colors < 2 {
            return Err(ConfigurationError::TooFewColors(self.number_of_colors));
        }
        if self.number_of_dots == 0 {
            return Err(ConfigurationError::NoDots);
        }
        if self.attempts_allowed == 0 {
            return Err(ConfigurationError::NoAttempts);
        }
        Ok(())
    }
}

impl Default for GameConfiguration {
    fn default() -> Self {
        Self {
            number_of_colors: 6,
            number_of_dots: 4,
            attempts_allowed: 10,
            game_mode: GameMode::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_new_accepts_minimum_values() {
        let config = GameConfiguration::new(2, 1, 1, GameMode::PVP).unwrap();
        assert_eq!(*config.number_of_colors(), 2);
        assert_eq!(*config.game_mode(), GameMode::PVP);
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert_eq!(
            GameConfiguration::new(1, 4, 10, GameMode::PVP),
            Err(ConfigurationError::TooFewColors(1))
        );
        assert_eq!(
            GameConfiguration::new(6, 0, 10, GameMode::PVP),
            Err(ConfigurationError::NoDots)
        );
        assert_eq!(
            GameConfiguration::new(6, 4, 0, GameMode::PVP),
            Err(ConfigurationError::NoAttempts)
        );
    }

    #[test]
    fn test_roster_covers_every_mode() {
        for mode in GameMode::iter() {
            let (setter, breaker) = mode.roster();
            match mode {
                GameMode::PVP => {
                    assert_eq!((setter, breaker), (PlayerKind::Human, PlayerKind::Human))
                }
                GameMode::PVC => assert_eq!(breaker, PlayerKind::Computer),
                GameMode::CVP => assert_eq!(setter, PlayerKind::Computer),
                GameMode::EVE => assert_eq!(
                    (setter, breaker),
                    (PlayerKind::External, PlayerKind::External)
                ),
            }
        }
    }

    #[test]
    fn test_mode_parses_by_name() {
        assert_eq!("pvc".parse::<GameMode>().unwrap(), GameMode::PVC);
        assert_eq!(GameMode::EVE.to_string(), "EVE");
        assert!("XYZ".parse::<GameMode>().is_err());
    }
}
