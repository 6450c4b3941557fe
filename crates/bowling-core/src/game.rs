//! Game capability shared by every bowling variant.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Registry-assigned identity of a running game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub i32);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Game variants with a registered implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    /// Ten-pin bowling.
    TenPin,
}

impl GameType {
    /// Every registered variant.
    pub const ALL: [Self; 1] = [Self::TenPin];

    /// Wire name of the variant.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TenPin => "ten_pin",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|game_type| game_type.as_str() == s)
            .ok_or_else(|| DomainError::UnsupportedGameType(s.to_owned()))
    }
}

/// Read-only scoring view of one player, produced by a `Game`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCard {
    /// Player name.
    pub name: String,
    /// Raw rolls recorded per frame (empty for frames not yet played).
    pub frame_rolls: Vec<Vec<u8>>,
    /// Per-frame scores, bonus rolls included. Not cumulative.
    pub frame_scores: Vec<u32>,
    /// Score so far.
    pub total_score: u32,
}

/// Capability implemented by every game variant.
///
/// Implementations are not internally synchronized: at most one mutating call
/// per game may be in flight. `GameStore` enforces this by handing out each
/// game behind a mutex.
pub trait Game: Send + Sync + fmt::Debug {
    /// The variant this game implements.
    fn game_type(&self) -> GameType;

    /// Zero-based index of the frame currently being played.
    fn current_frame(&self) -> usize;

    /// Advances the shared frame pointer and returns the new value.
    /// A no-op on the last frame.
    fn next_frame(&mut self) -> usize;

    /// Records the rolls of the player at `player_index` for the current frame.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPlayerIndex` for an unknown player and
    /// `DomainError::Validation` if the frame rejects the rolls. Nothing is
    /// mutated on error.
    fn set_frame_result(&mut self, player_index: usize, pins: &[u8]) -> Result<(), DomainError>;

    /// Score cards of all players, in roster order.
    fn score_cards(&self) -> Vec<ScoreCard>;
}
