//! Error kinds raised by the Mastermind core.

use crate::types::Color;

/// A guess or feedback that does not fit the game's configuration.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RoundError {
    /// Guess has the wrong number of pegs.
    #[display("Guess must be of length {expected} (the number of dots), got {actual}")]
    WrongLength {
        /// Required number of pegs.
        expected: usize,
        /// Pegs in the guess.
        actual: usize,
    },

    /// Guess contains a color outside `1..=number_of_colors`.
    #[display("Guess must contain only numbers between 1 and {number_of_colors}, found {color}")]
    ColorOutOfRange {
        /// Offending peg.
        color: Color,
        /// Configured number of colors.
        number_of_colors: u8,
    },

    /// Feedback awards more pegs than the code has.
    #[display("Feedback ({black}, {white}) cannot exceed {number_of_dots} pegs in total")]
    FeedbackOverflow {
        /// Black pegs.
        black: u8,
        /// White pegs.
        white: u8,
        /// Configured number of dots.
        number_of_dots: u8,
    },

    /// Combination has more pegs than a peg count can represent.
    #[display("Combinations may hold at most {} pegs, got {pegs}", u8::MAX)]
    TooManyPegs {
        /// Pegs in the combination.
        pegs: usize,
    },
}

impl std::error::Error for RoundError {}

/// Turn resolution failures.
///
/// Each case is a distinct kind so callers can tell "not started yet" apart
/// from "already over".
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The round failed validation.
    #[display("Invalid round: {}", _0)]
    InvalidRound(RoundError),

    /// Undo or redo before any round was ever added.
    #[display("Game has not started yet")]
    GameNotStarted,

    /// A winner has already been resolved.
    #[display("Game has already ended")]
    GameEnded,

    /// The secret code is fixed once rounds have been played against it.
    #[display("Secret code cannot change once the game has started")]
    SecretCodeLocked,

    /// Undo with no rounds in history.
    #[display("No rounds to undo")]
    EmptyHistory,

    /// Redo with an empty undo buffer.
    #[display("No round available to redo")]
    NoRedoAvailable,

    /// A postcondition failed after a transition.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

impl From<RoundError> for GameError {
    fn from(err: RoundError) -> Self {
        Self::InvalidRound(err)
    }
}

/// Rejected game configuration values.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigurationError {
    /// Fewer than two colors.
    #[display("Number of colors must be at least 2, got {}", _0)]
    TooFewColors(u8),

    /// Zero dots.
    #[display("Number of dots must be at least 1")]
    NoDots,

    /// Zero attempts.
    #[display("Attempts allowed must be at least 1")]
    NoAttempts,
}

impl std::error::Error for ConfigurationError {}

/// Text that could not be read as a combination or feedback.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// Nothing was entered.
    #[display("Input is empty")]
    Empty,

    /// A peg is not a non-negative number.
    #[display("'{}' is not a valid peg", _0)]
    InvalidPeg(String),

    /// Feedback needs exactly two numbers.
    #[display("Feedback must consist of 2 numbers, got {}", _0)]
    FeedbackArity(usize),
}

impl std::error::Error for ParseError {}

/// A stored game that no longer satisfies the rules it was created with.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameValidationError {
    /// The configuration is out of range.
    #[display("Invalid configuration: {}", _0)]
    Configuration(ConfigurationError),

    /// A recorded round does not fit the configuration.
    #[display("Round {} is invalid: {}", index + 1, error)]
    Round {
        /// Zero-based round index.
        index: usize,
        /// What is wrong with it.
        error: RoundError,
    },

    /// The stored secret code does not fit the configuration.
    #[display("Secret code is invalid: {}", _0)]
    SecretCode(RoundError),

    /// State and history disagree.
    #[display("Inconsistent game: {}", _0)]
    Inconsistent(String),
}

impl std::error::Error for GameValidationError {}

/// A player could not produce a move.
///
/// Records where it was raised, like the storage errors of the application
/// layer.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Player error: {} at {}:{}", message, file, line)]
pub struct PlayerError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl PlayerError {
    /// Creates a new player error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<RoundError> for PlayerError {
    #[track_caller]
    fn from(err: RoundError) -> Self {
        Self::new(err.to_string())
    }
}
