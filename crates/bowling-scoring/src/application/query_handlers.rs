//! Query handlers for the ten-pin scoring context.
//!
//! This module contains query handlers that read a stored game and return
//! read-only view DTOs.

use bowling_core::error::DomainError;
use bowling_core::game::{GameId, GameType, ScoreCard};
use bowling_core::store::GameStore;
use serde::Serialize;

use crate::application::command_handlers::lock_game;

/// Read-only view of one player's score sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    /// Player name.
    pub name: String,
    /// Raw rolls of every frame; unplayed frames are empty.
    pub frame_rolls: Vec<Vec<u8>>,
    /// Per-frame scores including strike and spare bonuses.
    pub frame_scores: Vec<u32>,
    /// Prefix sums of `frame_scores`.
    pub running_totals: Vec<u32>,
    /// Score so far.
    pub total_score: u32,
}

impl From<ScoreCard> for PlayerSnapshot {
    fn from(card: ScoreCard) -> Self {
        let running_totals: Vec<u32> = card
            .frame_scores
            .iter()
            .scan(0, |total, score| {
                *total += score;
                Some(*total)
            })
            .collect();

        Self {
            name: card.name,
            frame_rolls: card.frame_rolls,
            frame_scores: card.frame_scores,
            running_totals,
            total_score: card.total_score,
        }
    }
}

/// Read-only view of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    /// The game identifier.
    pub game_id: GameId,
    /// The game variant.
    pub game_type: GameType,
    /// Zero-based index of the frame being played.
    pub current_frame: usize,
    /// One score sheet per player, in roster order.
    pub players: Vec<PlayerSnapshot>,
}

/// Retrieves a snapshot of the game stored under `game_id`.
///
/// # Errors
///
/// Returns `DomainError::GameNotFound` if no game is stored under the id.
pub fn get_game_snapshot(
    game_id: GameId,
    store: &dyn GameStore,
) -> Result<GameSnapshot, DomainError> {
    let shared = store.get(game_id)?;
    let game = lock_game(&shared)?;

    Ok(GameSnapshot {
        game_id,
        game_type: game.game_type(),
        current_frame: game.current_frame(),
        players: game
            .score_cards()
            .into_iter()
            .map(PlayerSnapshot::from)
            .collect(),
    })
}
