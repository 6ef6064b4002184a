//! The game aggregate: configuration, board, state and entities.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::board::GameBoard;
use crate::configuration::{GameConfiguration, PlayerKind};
use crate::error::{GameError, GameValidationError};
use crate::invariants::{InvariantSet, MastermindInvariants};
use crate::round::validate_combination;
use crate::service::GameService;
use crate::state::GameState;
use crate::types::Combination;

/// The two participants of a game.
///
/// Kinds are fixed by the game mode. The secret code is bound once, when the
/// code setter first picks it, so a resumed game can rebuild its setter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntities {
    code_setter: PlayerKind,
    code_breaker: PlayerKind,
    #[serde(default)]
    secret_code: Option<Combination>,
}

impl GameEntities {
    /// Entities for the mode in `configuration`.
    #[instrument]
    pub fn from_configuration(configuration: &GameConfiguration) -> Self {
        let (code_setter, code_breaker) = configuration.game_mode().roster();
        Self {
            code_setter,
            code_breaker,
            secret_code: None,
        }
    }

    /// Kind of the code setter.
    pub fn code_setter(&self) -> PlayerKind {
        self.code_setter
    }

    /// Kind of the code breaker.
    pub fn code_breaker(&self) -> PlayerKind {
        self.code_breaker
    }

    /// The secret code, once bound.
    pub fn secret_code(&self) -> Option<&Combination> {
        self.secret_code.as_ref()
    }
}

/// One Mastermind game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    configuration: GameConfiguration,
    pub(crate) board: GameBoard,
    pub(crate) state: GameState,
    entities: GameEntities,
}

impl Game {
    /// Creates a fresh game with an empty board.
    #[instrument]
    pub fn new(configuration: GameConfiguration) -> Self {
        info!(mode = %configuration.game_mode(), "Creating new game");
        Self {
            entities: GameEntities::from_configuration(&configuration),
            configuration,
            board: GameBoard::new(),
            state: GameState::new(),
        }
    }

    /// Returns the turn resolution service for this game.
    pub fn service(&mut self) -> GameService<'_> {
        GameService::new(self)
    }

    /// The configuration.
    pub fn configuration(&self) -> &GameConfiguration {
        &self.configuration
    }

    /// The board.
    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    /// The state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The entities.
    pub fn entities(&self) -> &GameEntities {
        &self.entities
    }

    /// Binds the secret code.
    ///
    /// A secret that is already bound is replaced only while no round has been
    /// played.
    ///
    /// # Errors
    ///
    /// - [`GameError::InvalidRound`] if the code does not fit the configuration.
    /// - [`GameError::SecretCodeLocked`] if a bound secret has been played against.
    #[instrument(skip(self, secret))]
    pub fn bind_secret_code(&mut self, secret: Combination) -> Result<(), GameError> {
        validate_combination(&secret, &self.configuration)?;
        if self.entities.secret_code.is_some() && self.state.game_started() {
            warn!("Refusing to replace a secret code already played against");
            return Err(GameError::SecretCodeLocked);
        }
        self.entities.secret_code = Some(secret);
        Ok(())
    }

    /// Re-checks a game that came from storage.
    ///
    /// # Errors
    ///
    /// Returns [`GameValidationError`] naming the first problem found.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), GameValidationError> {
        self.configuration
            .validate()
            .map_err(GameValidationError::Configuration)?;

        for (index, round) in self.board.rounds().iter().enumerate() {
            round
                .validate(&self.configuration)
                .map_err(|error| GameValidationError::Round { index, error })?;
        }

        if let Some(secret) = self.entities.secret_code() {
            validate_combination(secret, &self.configuration)
                .map_err(GameValidationError::SecretCode)?;
        }

        MastermindInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameValidationError::Inconsistent(descriptions)
        })
    }
}
