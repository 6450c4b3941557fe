//! Test stores: stub `GameStore` implementations for tests.

use bowling_core::error::DomainError;
use bowling_core::game::{Game, GameId};
use bowling_core::store::{GameStore, SharedGame};

/// A store that silently drops inserted games and never finds anything.
/// Useful for testing "game not found" scenarios.
#[derive(Debug)]
pub struct EmptyGameStore;

impl GameStore for EmptyGameStore {
    fn insert(&self, _id: GameId, _game: Box<dyn Game>) -> Result<(), DomainError> {
        Ok(())
    }

    fn get(&self, id: GameId) -> Result<SharedGame, DomainError> {
        Err(DomainError::GameNotFound(id))
    }
}

/// A store that always returns an infrastructure error.
#[derive(Debug)]
pub struct FailingGameStore;

impl GameStore for FailingGameStore {
    fn insert(&self, _id: GameId, _game: Box<dyn Game>) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("game store unavailable".into()))
    }

    fn get(&self, _id: GameId) -> Result<SharedGame, DomainError> {
        Err(DomainError::Infrastructure("game store unavailable".into()))
    }
}
