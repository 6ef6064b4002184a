//! The game board: the ordered history of rounds plus its undo buffer.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use crate::error::GameError;
use crate::round::Round;
use crate::types::{Combination, Feedback};

/// Round history with stack-style undo and redo.
///
/// Both buffers behave as stacks. Adding a round clears the undo buffer, so
/// redo is only possible directly after an undo and history never branches.
///
/// Mutation goes through [`GameService`](crate::GameService); callers only
/// read the board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameBoard {
    rounds: Vec<Round>,
    #[serde(skip)]
    undo_stack: Vec<Round>,
}

impl GameBoard {
    /// Creates an empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validated round and discards any pending redo.
    #[instrument(skip(self), fields(round = %round))]
    pub(crate) fn add_round(&mut self, round: Round) {
        self.rounds.push(round);
        if !self.undo_stack.is_empty() {
            debug!(discarded = self.undo_stack.len(), "Clearing undo stack");
        }
        self.undo_stack.clear();
    }

    /// Moves the most recent round onto the undo buffer.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyHistory`] if there is nothing to undo.
    #[instrument(skip(self), fields(rounds = self.rounds.len()))]
    pub(crate) fn undo(&mut self) -> Result<(), GameError> {
        let round = self.rounds.pop().ok_or_else(|| {
            warn!("Undo requested on empty history");
            GameError::EmptyHistory
        })?;
        debug!(round = %round, "Round undone");
        self.undo_stack.push(round);
        Ok(())
    }

    /// Restores the most recently undone round.
    ///
    /// Rounds further back in the undo buffer stay available.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoRedoAvailable`] if the undo buffer is empty.
    #[instrument(skip(self), fields(pending = self.undo_stack.len()))]
    pub(crate) fn redo(&mut self) -> Result<(), GameError> {
        let round = self.undo_stack.pop().ok_or_else(|| {
            warn!("Redo requested with empty undo stack");
            GameError::NoRedoAvailable
        })?;
        debug!(round = %round, "Round redone");
        self.rounds.push(round);
        Ok(())
    }

    /// Rounds in chronological order.
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// The most recent round.
    pub fn last_round(&self) -> Option<&Round> {
        self.rounds.last()
    }

    /// Guesses in chronological order.
    pub fn guesses(&self) -> impl Iterator<Item = &Combination> + Clone + '_ {
        self.rounds.iter().map(Round::guess)
    }

    /// Feedbacks in chronological order.
    pub fn feedbacks(&self) -> impl Iterator<Item = Feedback> + Clone + '_ {
        self.rounds.iter().map(Round::feedback)
    }

    /// Number of rounds in history, excluding undone ones.
    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    /// Returns true if no rounds are in history.
    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// Number of undone rounds waiting to be redone.
    pub fn redo_available(&self) -> usize {
        self.undo_stack.len()
    }
}
