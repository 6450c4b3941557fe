//! Game id assignment.
//!
//! The registry receives its id source explicitly at startup instead of
//! reaching for a process-wide counter. Tests inject deterministic ids.

use std::sync::atomic::{AtomicI32, Ordering};

use crate::error::DomainError;
use crate::game::GameId;

/// Source of unique, strictly increasing game ids.
pub trait IdGenerator: Send + Sync {
    /// Returns the next id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if the id space is exhausted.
    fn next_id(&self) -> Result<GameId, DomainError>;
}

/// Lock-free production generator. The first id handed out is 1.
#[derive(Debug, Default)]
pub struct AtomicIdGenerator {
    last: AtomicI32,
}

impl AtomicIdGenerator {
    /// Creates a generator whose first id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for AtomicIdGenerator {
    fn next_id(&self) -> Result<GameId, DomainError> {
        self.last
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |n| n.checked_add(1))
            .map(|previous| GameId(previous + 1))
            .map_err(|_| DomainError::Infrastructure("game id space exhausted".to_owned()))
    }
}
