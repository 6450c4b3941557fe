//! Game store abstraction.
//!
//! Map semantics: insert-once, read-many, no delete. Games live for the
//! lifetime of the process.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use tracing::debug;

use crate::error::DomainError;
use crate::game::{Game, GameId};

/// A stored game. The mutex serializes mutating calls against one game.
pub type SharedGame = Arc<Mutex<Box<dyn Game>>>;

/// Lookup-by-id store for running games.
pub trait GameStore: Send + Sync {
    /// Stores `game` under `id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GameIdConflict` if `id` is already taken.
    fn insert(&self, id: GameId, game: Box<dyn Game>) -> Result<(), DomainError>;

    /// Looks up the game stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::GameNotFound` if nothing is stored under `id`.
    fn get(&self, id: GameId) -> Result<SharedGame, DomainError>;
}

/// Process-local store backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct InMemoryGameStore {
    games: RwLock<HashMap<GameId, SharedGame>>,
}

impl InMemoryGameStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for InMemoryGameStore {
    fn insert(&self, id: GameId, game: Box<dyn Game>) -> Result<(), DomainError> {
        let mut games = self
            .games
            .write()
            .map_err(|e| DomainError::Infrastructure(format!("game store lock poisoned: {e}")))?;
        if games.contains_key(&id) {
            return Err(DomainError::GameIdConflict(id));
        }
        games.insert(id, Arc::new(Mutex::new(game)));
        debug!(game_id = %id, stored_games = games.len(), "game stored");
        Ok(())
    }

    fn get(&self, id: GameId) -> Result<SharedGame, DomainError> {
        let games = self
            .games
            .read()
            .map_err(|e| DomainError::Infrastructure(format!("game store lock poisoned: {e}")))?;
        games
            .get(&id)
            .map(Arc::clone)
            .ok_or(DomainError::GameNotFound(id))
    }
}
