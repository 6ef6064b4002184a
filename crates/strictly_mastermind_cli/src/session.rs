//! A game bound to its storage slot, from seating players to storing the result.

use std::io::Write;

use strictly_mastermind::Game;
use tracing::{info, instrument};

use crate::config::PlaySettings;
use crate::orchestrator::{GameOrchestrator, SessionOutcome};
use crate::players::{SharedPrompt, build_breaker, build_setter};
use crate::storage::{GameRepository, StorageError};

/// What happened to the stored copy once a session ended.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Disposition {
    /// A new game was stored under a fresh id.
    #[display("Game saved as {_0}. Resume it with: mastermind resume {_0}")]
    Added(String),
    /// A resumed game was written back over its file.
    #[display("Game {_0} saved.")]
    Saved(String),
    /// A resumed game was discarded and its file removed.
    #[display("Game {_0} deleted.")]
    Deleted(String),
    /// Nothing was written.
    #[display("Game not stored.")]
    Dropped,
}

/// A game and the id it is stored under, if any.
#[derive(Debug, Clone)]
pub struct GameSession {
    id: Option<String>,
    game: Game,
}

impl GameSession {
    /// A session for a game that has never been stored.
    #[instrument(skip(game))]
    pub fn new(game: Game) -> Self {
        Self { id: None, game }
    }

    /// Loads the game stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the game cannot be loaded.
    #[instrument(skip(repository))]
    pub fn resume(repository: &GameRepository, id: &str) -> Result<Self, StorageError> {
        let game = repository.load(id)?;
        info!(id, rounds = game.board().len(), "Resuming game");
        Ok(Self {
            id: Some(id.to_string()),
            game,
        })
    }

    /// Storage id, `None` for a game not yet stored.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Seats the players for the game's mode and plays until the session ends.
    ///
    /// # Errors
    ///
    /// Returns an error if a player cannot be seated or fails mid-game.
    #[instrument(skip_all, fields(id = ?self.id))]
    pub fn play(
        &mut self,
        prompt: SharedPrompt,
        out: impl Write,
        settings: &PlaySettings,
    ) -> anyhow::Result<SessionOutcome> {
        let setter = build_setter(&self.game, prompt.clone(), settings)?;
        let breaker = build_breaker(&self.game, prompt);
        GameOrchestrator::new(&mut self.game, setter, breaker, out).run()
    }

    /// Applies the storage rules for `outcome`.
    ///
    /// Quitting always stores the game. A finished game is stored only with
    /// `autosave` on. Discarding removes the file of a resumed game and stores
    /// nothing for a new one.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the repository cannot be written.
    #[instrument(skip(self, repository, settings), fields(id = ?self.id))]
    pub fn settle(
        self,
        repository: &GameRepository,
        outcome: SessionOutcome,
        settings: &PlaySettings,
    ) -> Result<Disposition, StorageError> {
        let disposition = match outcome {
            SessionOutcome::Saved => self.store(repository)?,
            SessionOutcome::Finished(_) if *settings.autosave() => self.store(repository)?,
            SessionOutcome::Finished(_) => Disposition::Dropped,
            SessionOutcome::Discarded => match self.id {
                Some(id) => {
                    repository.delete(&id)?;
                    Disposition::Deleted(id)
                }
                None => Disposition::Dropped,
            },
        };
        info!(?disposition, "Session settled");
        Ok(disposition)
    }

    fn store(self, repository: &GameRepository) -> Result<Disposition, StorageError> {
        match self.id {
            Some(id) => {
                repository.save(&id, &self.game)?;
                Ok(Disposition::Saved(id))
            }
            None => repository.add(&self.game).map(Disposition::Added),
        }
    }
}
