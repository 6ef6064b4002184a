//! Strictly Mastermind CLI - terminal play and JSON game storage
//!
//! # Architecture
//!
//! - **Config**: [`AppConfig`] read from TOML with built-in defaults
//! - **Storage**: [`GameRepository`] keeps one JSON file per game
//! - **Players**: console setters and breakers seated by game mode
//! - **Orchestrator**: [`GameOrchestrator`] runs the play loop
//! - **Session**: [`GameSession`] seats players and stores the result

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod orchestrator;
mod players;
mod render;
mod session;
mod storage;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{
    AppConfig, CONFIG_ENV_VAR, ConfigError, DEFAULT_CONFIG_FILE, GameDefaults, PlaySettings,
    StorageSettings,
};

// Crate-level exports - Storage
pub use storage::{
    GameRepository, GameSummary, ID_ALPHABET, ID_LENGTH, StorageError, generate_id, validate_id,
};

// Crate-level exports - Players
pub use players::{
    ExternalSetter, HumanSetter, Prompt, PromptBreaker, SharedPrompt, build_breaker, build_setter,
};

// Crate-level exports - Game loop
pub use orchestrator::{GameOrchestrator, SessionOutcome};
pub use render::render_board;
pub use session::{Disposition, GameSession};
