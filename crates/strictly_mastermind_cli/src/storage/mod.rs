//! File-based persistence: one JSON document per game.

mod error;
mod repository;
mod summary;

pub use error::StorageError;
pub use repository::{GameRepository, ID_ALPHABET, ID_LENGTH, generate_id, validate_id};
pub use summary::GameSummary;
