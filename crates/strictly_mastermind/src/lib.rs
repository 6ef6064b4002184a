//! Strictly Mastermind - type-safe Mastermind game logic
//!
//! This library holds the rules of Mastermind and nothing else: no terminal,
//! no storage.
//!
//! # Architecture
//!
//! - **Feedback**: [`compute_feedback`] scores a guess against a secret
//! - **Board**: [`GameBoard`] keeps the round history with undo and redo
//! - **Service**: [`GameService`] is the only way to mutate a [`Game`]
//! - **Contracts**: preconditions and invariants guarding each transition
//! - **Players**: [`CodeSetter`] and [`CodeBreaker`] capabilities
//!
//! # Example
//!
//! ```
//! use strictly_mastermind::{Feedback, Game, GameConfiguration, GameMode, PlayerRole};
//!
//! let configuration = GameConfiguration::new(6, 4, 10, GameMode::PVP)?;
//! let mut game = Game::new(configuration);
//!
//! game.service().add_round([1, 2, 3, 4].into(), Feedback::new(1, 2))?;
//! game.service().add_round([2, 1, 4, 3].into(), Feedback::perfect(4))?;
//!
//! assert_eq!(game.state().winner(), PlayerRole::CodeBreaker);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod configuration;
mod contracts;
mod error;
mod feedback;
mod game;
mod invariants;
mod players;
mod round;
mod service;
mod state;
mod types;

// Crate-level exports - Data model
pub use configuration::{GameConfiguration, GameMode, PlayerKind};
pub use game::{Game, GameEntities};
pub use round::{Round, validate_combination, validate_feedback};
pub use state::{GameState, PlayerRole, determine_winner};
pub use types::{Color, Combination, Feedback};

// Crate-level exports - Ledger and service
pub use board::GameBoard;
pub use feedback::compute_feedback;
pub use service::GameService;

// Crate-level exports - Contracts and invariants
pub use contracts::{
    AddRoundContract, Contract, GameNotOver, GameStarted, RedoContract, RoundFits, RoundSubmission,
    UndoContract,
};
pub use invariants::{
    HistoryWithinBudget, Invariant, InvariantSet, InvariantViolation, MastermindInvariants,
    OutcomeConsistent, RoundsWellFormed, StartedWhenPlayed,
};

// Crate-level exports - Errors
pub use error::{
    ConfigurationError, GameError, GameValidationError, ParseError, PlayerError, RoundError,
};

// Crate-level exports - Players
pub use players::{
    CodeBreaker, CodeSetter, ComputerBreaker, ComputerSetter, PlayerAction, ScriptedBreaker,
    ScriptedSetter, random_combination,
};
