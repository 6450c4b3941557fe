//! Commands for the ten-pin scoring context.

use bowling_core::command::Command;
use bowling_core::game::GameId;
use uuid::Uuid;

/// Command to start a new game.
#[derive(Debug, Clone)]
pub struct CreateGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Requested game variant, by wire name (e.g. `ten_pin`).
    pub game_type: String,
    /// Player names, in playing order.
    pub player_names: Vec<String>,
}

impl Command for CreateGame {
    fn command_type(&self) -> &'static str {
        "scoring.create_game"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to record one player's rolls for the current frame.
#[derive(Debug, Clone)]
pub struct RecordRoll {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The game to record into.
    pub game_id: GameId,
    /// Zero-based position of the player in the roster.
    pub player_index: usize,
    /// Pins knocked down by each roll of the frame.
    pub pins: Vec<u8>,
}

impl Command for RecordRoll {
    fn command_type(&self) -> &'static str {
        "scoring.record_roll"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn target_game(&self) -> Option<GameId> {
        Some(self.game_id)
    }
}

/// Command to move every player of a game to the next frame.
#[derive(Debug, Clone)]
pub struct AdvanceFrame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The game to advance.
    pub game_id: GameId,
}

impl Command for AdvanceFrame {
    fn command_type(&self) -> &'static str {
        "scoring.advance_frame"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    fn target_game(&self) -> Option<GameId> {
        Some(self.game_id)
    }
}
