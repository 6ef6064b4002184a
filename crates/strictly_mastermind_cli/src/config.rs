//! Application configuration loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use strictly_mastermind::{GameConfiguration, GameMode};
use tracing::{debug, info, instrument};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "MASTERMIND_CONFIG";

/// File picked up from the working directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "mastermind.toml";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Settings for new games.
    defaults: GameDefaults,

    /// Where games are stored.
    storage: StorageSettings,

    /// Interactive play toggles.
    play: PlaySettings,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: GameDefaults::default(),
            storage: StorageSettings::default(),
            play: PlaySettings::default(),
            log_filter: default_log_filter(),
        }
    }
}

/// Configuration values for new games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameDefaults {
    number_of_colors: u8,
    number_of_dots: u8,
    attempts_allowed: u8,
    game_mode: GameMode,
}

impl Default for GameDefaults {
    fn default() -> Self {
        Self {
            number_of_colors: 6,
            number_of_dots: 4,
            attempts_allowed: 10,
            game_mode: GameMode::CVP,
        }
    }
}

/// Storage location.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    games_dir: PathBuf,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            games_dir: PathBuf::from("mastermind_games"),
        }
    }
}

/// Interactive play toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaySettings {
    /// Ask a human setter to type the secret twice.
    confirm_secret: bool,
    /// Save finished games too, not only quit ones.
    autosave: bool,
}

impl Default for PlaySettings {
    fn default() -> Self {
        Self {
            confirm_secret: true,
            autosave: true,
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        config.game_configuration(None, None, None, None)?;
        info!(games_dir = %config.storage.games_dir.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Picks the configuration file to read, if any.
    ///
    /// Order: `explicit`, then `env_value`, then [`DEFAULT_CONFIG_FILE`] if it
    /// exists in the working directory.
    pub fn resolve_path(explicit: Option<&Path>, env_value: Option<String>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| env_value.filter(|v| !v.is_empty()).map(PathBuf::from))
            .or_else(|| {
                let fallback = PathBuf::from(DEFAULT_CONFIG_FILE);
                fallback.is_file().then_some(fallback)
            })
    }

    /// Loads the configuration the binary runs with.
    ///
    /// Falls back to built-in defaults when no file is found.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::resolve_path(explicit, std::env::var(CONFIG_ENV_VAR).ok()) {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Directory games are stored in, overridden by `games_dir` if given.
    pub fn games_dir_or(&self, games_dir: Option<&Path>) -> PathBuf {
        games_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.storage.games_dir.clone())
    }

    /// Builds a game configuration from the defaults and any overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the resulting values are out of range.
    #[instrument(skip(self))]
    pub fn game_configuration(
        &self,
        number_of_colors: Option<u8>,
        number_of_dots: Option<u8>,
        attempts_allowed: Option<u8>,
        game_mode: Option<GameMode>,
    ) -> Result<GameConfiguration, ConfigError> {
        let d = &self.defaults;
        GameConfiguration::new(
            number_of_colors.unwrap_or(d.number_of_colors),
            number_of_dots.unwrap_or(d.number_of_dots),
            attempts_allowed.unwrap_or(d.attempts_allowed),
            game_mode.unwrap_or(d.game_mode),
        )
        .map_err(|e| ConfigError::new(format!("Invalid game settings: {}", e)))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.log_filter(), "warn");
        assert_eq!(*config.defaults().game_mode(), GameMode::CVP);
        assert!(*config.play().confirm_secret());
        assert_eq!(config.storage().games_dir(), &PathBuf::from("mastermind_games"));
    }

    #[test]
    fn test_explicit_path_wins() {
        let path = AppConfig::resolve_path(
            Some(Path::new("explicit.toml")),
            Some("env.toml".to_string()),
        );
        assert_eq!(path, Some(PathBuf::from("explicit.toml")));

        let path = AppConfig::resolve_path(None, Some("env.toml".to_string()));
        assert_eq!(path, Some(PathBuf::from("env.toml")));
    }

    #[test]
    fn test_overrides_apply() {
        let config = AppConfig::default();
        let game = config
            .game_configuration(Some(8), None, Some(12), Some(GameMode::PVP))
            .unwrap();
        assert_eq!(*game.number_of_colors(), 8);
        assert_eq!(*game.number_of_dots(), 4);
        assert_eq!(*game.attempts_allowed(), 12);
        assert!(config.game_configuration(Some(1), None, None, None).is_err());
    }
}
