//! Domain error types.

use thiserror::Error;

use crate::game::GameId;

/// Top-level domain error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// No game is registered under the given id.
    #[error("game not found: {0}")]
    GameNotFound(GameId),

    /// The player index does not address a player of the game.
    #[error("invalid player index {index}: game has {player_count} players")]
    InvalidPlayerIndex {
        /// The requested index.
        index: usize,
        /// Number of players in the game.
        player_count: usize,
    },

    /// The requested game variant has no registered implementation.
    #[error("game type is not supported: {0}")]
    UnsupportedGameType(String),

    /// A game is already stored under the id.
    #[error("game id already in use: {0}")]
    GameIdConflict(GameId),

    /// Malformed roster or roll input.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An infrastructure error (poisoned lock, exhausted id space).
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

/// Input validation failures. Always reported to the caller, never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A game needs at least one player.
    #[error("player names are empty")]
    EmptyRoster,

    /// More players than the game allows.
    #[error("max num of players is {max}, got {actual}")]
    TooManyPlayers {
        /// Maximum roster size.
        max: usize,
        /// Requested roster size.
        actual: usize,
    },

    /// A roster entry is the empty string.
    #[error("player at index {index} has empty name")]
    EmptyPlayerName {
        /// Position of the offending entry.
        index: usize,
    },

    /// Wrong number of rolls for the frame's shape.
    #[error("expected {expected} rolls for {shape}, got {actual}")]
    InvalidRollCount {
        /// Frame shape the rolls were read as (strike, spare, open...).
        shape: &'static str,
        /// Number of rolls that shape requires.
        expected: usize,
        /// Number of rolls supplied.
        actual: usize,
    },

    /// A single roll knocked down more pins than a rack holds.
    #[error("roll {roll} knocked down {pins} pins, max is 10")]
    InvalidPinCount {
        /// Zero-based roll position within the frame.
        roll: usize,
        /// The offending pin count.
        pins: u8,
    },

    /// Two rolls of the same rack exceed the pins in a rack.
    #[error("rolls {first} and {second} sum to more than 10 pins")]
    InvalidPinSum {
        /// First roll of the rack.
        first: u8,
        /// Second roll of the rack.
        second: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_converts_into_domain_error() {
        let err: DomainError = ValidationError::EmptyRoster.into();

        assert_eq!(err, DomainError::Validation(ValidationError::EmptyRoster));
        assert_eq!(err.to_string(), "validation error: player names are empty");
    }

    #[test]
    fn test_empty_player_name_reports_offending_index() {
        let err = ValidationError::EmptyPlayerName { index: 2 };

        assert_eq!(err.to_string(), "player at index 2 has empty name");
    }

    #[test]
    fn test_invalid_player_index_message() {
        let err = DomainError::InvalidPlayerIndex {
            index: 5,
            player_count: 1,
        };

        assert_eq!(
            err.to_string(),
            "invalid player index 5: game has 1 players"
        );
    }
}
