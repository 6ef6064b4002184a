//! JSON file repository for Mastermind games.

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use strictly_mastermind::Game;
use tracing::{debug, info, instrument, warn};

use super::{GameSummary, StorageError};

/// Characters game ids are drawn from. Look-alike glyphs are left out.
pub const ID_ALPHABET: &str = "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Length of a game id.
pub const ID_LENGTH: usize = 6;

/// Draws a random game id.
pub fn generate_id<R: Rng>(rng: &mut R) -> String {
    let alphabet = ID_ALPHABET.as_bytes();
    (0..ID_LENGTH)
        .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
        .collect()
}

/// Checks that `id` could have come from [`generate_id`].
///
/// # Errors
///
/// Returns [`StorageError`] for the wrong length or a foreign character.
pub fn validate_id(id: &str) -> Result<(), StorageError> {
    if id.chars().count() != ID_LENGTH {
        return Err(StorageError::new(format!(
            "Game id must be {} characters, got '{}'",
            ID_LENGTH, id
        )));
    }
    if let Some(c) = id.chars().find(|c| !ID_ALPHABET.contains(*c)) {
        return Err(StorageError::new(format!(
            "Game id '{}' contains invalid character '{}'",
            id, c
        )));
    }
    Ok(())
}

/// Stores each game as `<id>.json` inside one directory.
#[derive(Debug, Clone)]
pub struct GameRepository {
    games_dir: PathBuf,
}

impl GameRepository {
    /// Opens the repository at `games_dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the directory cannot be created.
    #[instrument(skip(games_dir), fields(games_dir = %games_dir.as_ref().display()))]
    pub fn open(games_dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let games_dir = games_dir.as_ref().to_path_buf();
        fs::create_dir_all(&games_dir).map_err(|e| {
            StorageError::new(format!(
                "Failed to create games directory '{}': {}",
                games_dir.display(),
                e
            ))
        })?;
        info!(path = %games_dir.display(), "Opened game repository");
        Ok(Self { games_dir })
    }

    /// Directory holding the game files.
    pub fn games_dir(&self) -> &Path {
        &self.games_dir
    }

    fn path_for(&self, id: &str) -> PathBuf {
        self.games_dir.join(format!("{}.json", id))
    }

    fn write(&self, id: &str, game: &Game) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(game)?;
        let tmp = self.games_dir.join(format!(".{}.json.tmp", id));
        fs::write(&tmp, json)?;
        fs::rename(&tmp, self.path_for(id))?;
        Ok(())
    }

    /// Stores a new game under a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file cannot be written.
    #[instrument(skip(self, game))]
    pub fn add(&self, game: &Game) -> Result<String, StorageError> {
        let mut rng = rand::rng();
        let mut id = generate_id(&mut rng);
        while self.path_for(&id).exists() {
            debug!(id = %id, "Game id collision, drawing again");
            id = generate_id(&mut rng);
        }
        self.write(&id, game)?;
        info!(id = %id, "Game added");
        Ok(id)
    }

    /// Loads and re-validates the game stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the id is malformed, the game does not
    /// exist, or the stored document is corrupt.
    #[instrument(skip(self))]
    pub fn load(&self, id: &str) -> Result<Game, StorageError> {
        validate_id(id)?;
        let path = self.path_for(id);
        if !path.exists() {
            return Err(StorageError::new(format!("Game '{}' not found", id)));
        }
        let content = fs::read_to_string(&path)?;
        let game: Game = serde_json::from_str(&content)?;
        game.validate().map_err(|e| {
            warn!(id = %id, error = %e, "Stored game failed validation");
            StorageError::new(format!("Game '{}' is corrupt: {}", id, e))
        })?;
        debug!(id = %id, rounds = game.board().len(), "Game loaded");
        Ok(game)
    }

    /// Overwrites the game stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the id is malformed or no such game exists.
    #[instrument(skip(self, game))]
    pub fn save(&self, id: &str, game: &Game) -> Result<(), StorageError> {
        if !self.exists(id)? {
            return Err(StorageError::new(format!("Game '{}' not found", id)));
        }
        self.write(id, game)?;
        info!(id = %id, "Game saved");
        Ok(())
    }

    /// Removes the game stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the id is malformed or no such game exists.
    #[instrument(skip(self))]
    pub fn delete(&self, id: &str) -> Result<(), StorageError> {
        if !self.exists(id)? {
            return Err(StorageError::new(format!("Game '{}' not found", id)));
        }
        fs::remove_file(self.path_for(id))?;
        info!(id = %id, "Game deleted");
        Ok(())
    }

    /// Whether a game is stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the id is malformed.
    pub fn exists(&self, id: &str) -> Result<bool, StorageError> {
        validate_id(id)?;
        Ok(self.path_for(id).is_file())
    }

    /// Ids of every stored game, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the directory cannot be read.
    #[instrument(skip(self))]
    pub fn list_ids(&self) -> Result<Vec<String>, StorageError> {
        let mut ids = Vec::new();
        for entry in fs::read_dir(&self.games_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if validate_id(stem).is_ok() {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        debug!(count = ids.len(), "Listed game ids");
        Ok(ids)
    }

    /// Summaries of stored games, optionally only those still in play.
    ///
    /// Files that fail to load are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the directory cannot be read.
    #[instrument(skip(self))]
    pub fn summaries(&self, only_continuable: bool) -> Result<Vec<GameSummary>, StorageError> {
        let mut summaries = Vec::new();
        for id in self.list_ids()? {
            match self.load(&id) {
                Ok(game) => {
                    let summary = GameSummary::from_game(id, &game);
                    if !only_continuable || summary.is_continuable() {
                        summaries.push(summary);
                    }
                }
                Err(e) => warn!(id = %id, error = %e, "Skipping unreadable game"),
            }
        }
        Ok(summaries)
    }
}
