//! Human-readable roll notation.
//!
//! `X` is a strike, `/` a spare, `-` a miss, and a digit a literal pin count.
//! A `/` scores `10` minus the roll before it and is only valid as the second
//! roll of a rack. Whitespace and commas between symbols are ignored, so
//! `"X 7/"` and `"X,7,/"` both read as `[10, 7, 3]`.

use bowling_scoring::domain::frame::PINS_PER_RACK;
use thiserror::Error;

/// Errors produced while translating notation into pin counts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    /// No roll symbols at all.
    #[error("roll notation is empty")]
    Empty,

    /// A `/` that does not follow the first roll of a rack.
    #[error("'/' at position {position} does not complete a rack")]
    UnexpectedSpare {
        /// Character offset of the `/`.
        position: usize,
    },

    /// A character that is not a roll symbol.
    #[error("invalid roll symbol {symbol:?} at position {position}")]
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Character offset of the symbol.
        position: usize,
    },
}

/// Translates `notation` into the pin count of each roll.
///
/// The result is not checked against frame rules; that is the frame's job.
///
/// # Errors
///
/// Returns a `NotationError` for empty input, a misplaced `/`, or an unknown
/// symbol.
pub fn parse_rolls(notation: &str) -> Result<Vec<u8>, NotationError> {
    let mut rolls = Vec::new();
    // First roll of a rack that is still waiting for its second roll.
    let mut open_rack: Option<u8> = None;

    for (position, symbol) in notation.chars().enumerate() {
        match symbol {
            c if c.is_whitespace() || c == ',' => {}
            'X' | 'x' => {
                rolls.push(PINS_PER_RACK);
                open_rack = None;
            }
            '/' => {
                let first = open_rack
                    .take()
                    .ok_or(NotationError::UnexpectedSpare { position })?;
                rolls.push(PINS_PER_RACK.saturating_sub(first));
            }
            '-' | '0'..='9' => {
                let pins = symbol
                    .to_digit(10)
                    .and_then(|d| u8::try_from(d).ok())
                    .unwrap_or(0);
                rolls.push(pins);
                open_rack = match open_rack {
                    Some(_) => None,
                    None => Some(pins),
                };
            }
            other => {
                return Err(NotationError::InvalidSymbol {
                    symbol: other,
                    position,
                });
            }
        }
    }

    if rolls.is_empty() {
        return Err(NotationError::Empty);
    }
    Ok(rolls)
}
