//! Command handlers for the ten-pin scoring context.
//!
//! Together with the injected `IdGenerator` and `GameStore` these handlers
//! form the game registry: they assign ids, store games, and are the only
//! callers of a game's mutating operations.

use std::sync::MutexGuard;

use bowling_core::command::Command;
use bowling_core::error::DomainError;
use bowling_core::game::{Game, GameId, GameType};
use bowling_core::id::IdGenerator;
use bowling_core::store::{GameStore, SharedGame};
use tracing::{debug, warn};

use crate::domain::commands::{AdvanceFrame, CreateGame, RecordRoll};
use crate::domain::ten_pin::TenPinGame;

/// Builds the game implementation registered for `game_type`.
fn new_game(game_type: GameType, player_names: &[String]) -> Result<Box<dyn Game>, DomainError> {
    match game_type {
        GameType::TenPin => Ok(Box::new(TenPinGame::start_game(player_names)?)),
    }
}

/// The targeted game id as a log field value; empty for create commands.
fn game_field(command: &impl Command) -> Option<i32> {
    command.target_game().map(|GameId(id)| id)
}

/// Locks a stored game for the duration of one synchronous call.
pub(crate) fn lock_game(game: &SharedGame) -> Result<MutexGuard<'_, Box<dyn Game>>, DomainError> {
    game.lock()
        .map_err(|e| DomainError::Infrastructure(format!("game mutex poisoned: {e}")))
}

/// Handles the `CreateGame` command: resolves the game type, validates the
/// roster, assigns an id and stores the new game.
///
/// The roster is validated before an id is drawn, so rejected requests do not
/// consume ids.
///
/// # Errors
///
/// Returns `DomainError::UnsupportedGameType` for an unknown game type,
/// `DomainError::Validation` for a malformed roster, and any error of the id
/// generator or store.
pub fn handle_create_game(
    command: &CreateGame,
    ids: &dyn IdGenerator,
    store: &dyn GameStore,
) -> Result<GameId, DomainError> {
    let game_type: GameType = command.game_type.parse()?;
    let game = new_game(game_type, &command.player_names).inspect_err(|e| {
        warn!(correlation_id = %command.correlation_id(), error = %e, "rejected roster");
    })?;

    let game_id = ids.next_id()?;
    store.insert(game_id, game)?;

    debug!(
        command = command.command_type(),
        %game_id,
        %game_type,
        players = command.player_names.len(),
        "game created"
    );
    Ok(game_id)
}

/// Handles the `RecordRoll` command: records the rolls of one player for the
/// game's current frame.
///
/// # Errors
///
/// Returns `DomainError::GameNotFound` for an unknown game,
/// `DomainError::InvalidPlayerIndex` for an unknown player, and
/// `DomainError::Validation` if the frame rejects the rolls. The game is left
/// untouched on error.
pub fn handle_record_roll(command: &RecordRoll, store: &dyn GameStore) -> Result<(), DomainError> {
    let shared = store.get(command.game_id)?;
    let mut game = lock_game(&shared)?;

    let frame = game.current_frame();
    game.set_frame_result(command.player_index, &command.pins)
        .inspect_err(|e| {
            warn!(
                correlation_id = %command.correlation_id(),
                game_id = game_field(command),
                frame,
                error = %e,
                "rejected rolls"
            );
        })?;

    debug!(
        command = command.command_type(),
        game_id = game_field(command),
        player_index = command.player_index,
        frame,
        pins = ?command.pins,
        "rolls recorded"
    );
    Ok(())
}

/// Handles the `AdvanceFrame` command and returns the new frame index.
///
/// # Errors
///
/// Returns `DomainError::GameNotFound` for an unknown game.
pub fn handle_advance_frame(
    command: &AdvanceFrame,
    store: &dyn GameStore,
) -> Result<usize, DomainError> {
    let shared = store.get(command.game_id)?;
    let current_frame = lock_game(&shared)?.next_frame();

    debug!(
        command = command.command_type(),
        game_id = game_field(command),
        current_frame,
        "frame advanced"
    );
    Ok(current_frame)
}
