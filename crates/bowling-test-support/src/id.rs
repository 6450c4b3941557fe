//! Test id generators: deterministic `IdGenerator` implementations for tests.

use std::sync::Mutex;

use bowling_core::error::DomainError;
use bowling_core::game::GameId;
use bowling_core::id::IdGenerator;

/// An id generator that hands out the same id on every call. Useful for
/// provoking insert-once conflicts in the store.
#[derive(Debug, Clone, Copy)]
pub struct FixedIdGenerator(pub GameId);

impl IdGenerator for FixedIdGenerator {
    fn next_id(&self) -> Result<GameId, DomainError> {
        Ok(self.0)
    }
}

/// An id generator that returns ids from a predetermined sequence. Panics if
/// the sequence is exhausted.
#[derive(Debug)]
pub struct SequenceIdGenerator {
    ids: Vec<GameId>,
    index: Mutex<usize>,
}

impl SequenceIdGenerator {
    /// Create a new `SequenceIdGenerator` with the given raw ids.
    #[must_use]
    pub fn new(ids: Vec<i32>) -> Self {
        Self {
            ids: ids.into_iter().map(GameId).collect(),
            index: Mutex::new(0),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> Result<GameId, DomainError> {
        let mut index = self.index.lock().unwrap();
        let id = self.ids[*index];
        *index += 1;
        Ok(id)
    }
}

/// An id generator that always fails. Useful for testing error-handling paths.
#[derive(Debug)]
pub struct FailingIdGenerator;

impl IdGenerator for FailingIdGenerator {
    fn next_id(&self) -> Result<GameId, DomainError> {
        Err(DomainError::Infrastructure("game id space exhausted".into()))
    }
}
