//! Shared application state.

use std::sync::Arc;

use bowling_core::id::IdGenerator;
use bowling_core::store::GameStore;

/// Application state shared across all request handlers.
///
/// The id generator and game store together back the game registry; both are
/// constructed once at startup and injected here.
#[derive(Clone)]
pub struct AppState {
    /// Source of new game ids.
    pub id_generator: Arc<dyn IdGenerator>,
    /// Running games, by id.
    pub game_store: Arc<dyn GameStore>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(id_generator: Arc<dyn IdGenerator>, game_store: Arc<dyn GameStore>) -> Self {
        Self {
            id_generator,
            game_store,
        }
    }
}
