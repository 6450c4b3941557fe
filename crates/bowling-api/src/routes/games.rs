//! Routes for the ten-pin scoring context.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use bowling_core::game::{GameId, GameType};
use bowling_scoring::application::command_handlers;
use bowling_scoring::application::query_handlers::{self, GameSnapshot};
use bowling_scoring::domain::commands;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::notation;
use crate::state::AppState;

fn default_game_type() -> String {
    GameType::TenPin.as_str().to_owned()
}

/// Request body for POST /.
#[derive(Debug, Deserialize)]
pub struct CreateGameRequest {
    /// Game variant; defaults to `ten_pin`.
    #[serde(default = "default_game_type")]
    pub game_type: String,
    /// Player names, in playing order.
    pub player_names: Vec<String>,
}

/// Response body for POST /.
#[derive(Debug, Serialize)]
pub struct CreateGameResponse {
    /// The id assigned to the new game.
    pub game_id: GameId,
}

/// Request body for POST /{game_id}/rolls.
///
/// Exactly one of `pins` and `notation` must be given.
#[derive(Debug, Deserialize)]
pub struct RecordRollRequest {
    /// Zero-based position of the player in the roster.
    pub player_index: usize,
    /// Pins knocked down by each roll of the current frame.
    pub pins: Option<Vec<u8>>,
    /// The same rolls in bowling notation, e.g. `"X"`, `"7/"`, `"X7/"`.
    pub notation: Option<String>,
}

impl RecordRollRequest {
    fn into_pins(self) -> Result<Vec<u8>, ApiError> {
        match (self.pins, self.notation) {
            (Some(pins), None) => Ok(pins),
            (None, Some(notation)) => Ok(notation::parse_rolls(&notation)?),
            (Some(_), Some(_)) => Err(ApiError::InvalidRequest(
                "give either pins or notation, not both",
            )),
            (None, None) => Err(ApiError::InvalidRequest("pins or notation is required")),
        }
    }
}

/// Response body for POST /{game_id}/next-frame.
#[derive(Debug, Serialize)]
pub struct AdvanceFrameResponse {
    /// Zero-based index of the frame now being played.
    pub current_frame: usize,
}

/// POST /
#[instrument(skip(state, request), fields(game_type = %request.game_type))]
async fn create_game(
    State(state): State<AppState>,
    Json(request): Json<CreateGameRequest>,
) -> Result<Json<CreateGameResponse>, ApiError> {
    let command = commands::CreateGame {
        correlation_id: Uuid::new_v4(),
        game_type: request.game_type,
        player_names: request.player_names,
    };

    info!(correlation_id = %command.correlation_id, "handling create_game command");

    let game_id = command_handlers::handle_create_game(
        &command,
        state.id_generator.as_ref(),
        state.game_store.as_ref(),
    )?;

    Ok(Json(CreateGameResponse { game_id }))
}

/// POST /{game_id}/rolls
#[instrument(skip(state, request), fields(player_index = request.player_index))]
async fn record_roll(
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
    Json(request): Json<RecordRollRequest>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let game_id = GameId(game_id);
    let player_index = request.player_index;
    let command = commands::RecordRoll {
        correlation_id: Uuid::new_v4(),
        game_id,
        player_index,
        pins: request.into_pins()?,
    };

    info!(correlation_id = %command.correlation_id, "handling record_roll command");

    command_handlers::handle_record_roll(&command, state.game_store.as_ref())?;
    let snapshot = query_handlers::get_game_snapshot(game_id, state.game_store.as_ref())?;

    Ok(Json(snapshot))
}

/// POST /{game_id}/next-frame
#[instrument(skip(state))]
async fn advance_frame(
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
) -> Result<Json<AdvanceFrameResponse>, ApiError> {
    let command = commands::AdvanceFrame {
        correlation_id: Uuid::new_v4(),
        game_id: GameId(game_id),
    };

    info!(correlation_id = %command.correlation_id, "handling advance_frame command");

    let current_frame = command_handlers::handle_advance_frame(&command, state.game_store.as_ref())?;

    Ok(Json(AdvanceFrameResponse { current_frame }))
}

/// GET /{game_id}
#[instrument(skip(state))]
async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<i32>,
) -> Result<Json<GameSnapshot>, ApiError> {
    let snapshot = query_handlers::get_game_snapshot(GameId(game_id), state.game_store.as_ref())?;
    Ok(Json(snapshot))
}

/// Returns the router for the games context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_game))
        .route("/{game_id}", get(get_game))
        .route("/{game_id}/rolls", post(record_roll))
        .route("/{game_id}/next-frame", post(advance_frame))
}
