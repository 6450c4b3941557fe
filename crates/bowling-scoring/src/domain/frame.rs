//! Frames and the roll-acceptance rules of ten-pin bowling.
//!
//! Frames 1–9 are `NormalFrame`s: a strike is recorded as the single roll
//! `[10]`, anything else as exactly two rolls from one rack. The tenth frame is
//! a `LastFrame` which carries its own bonus rolls and is the only frame that
//! can hold three rolls.

use bowling_core::error::ValidationError;

/// Pins standing in a full rack.
pub const PINS_PER_RACK: u8 = 10;

/// One of the ten frames of a player's game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Frames 1–9.
    Normal(NormalFrame),
    /// Frame 10.
    Last(LastFrame),
}

impl Frame {
    /// Validates `pins` and, if they are acceptable, replaces the stored rolls.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` describing the first rule the rolls break.
    /// The stored rolls are unchanged on error.
    pub fn knock_pins(&mut self, pins: &[u8]) -> Result<(), ValidationError> {
        match self {
            Self::Normal(frame) => frame.knock_pins(pins),
            Self::Last(frame) => frame.knock_pins(pins),
        }
    }

    /// Raw rolls recorded for this frame. Empty until the frame is played.
    #[must_use]
    pub fn pins(&self) -> &[u8] {
        match self {
            Self::Normal(frame) => frame.pins(),
            Self::Last(frame) => frame.pins(),
        }
    }

    /// Pins knocked down in this frame alone, without bonus rolls.
    #[must_use]
    pub fn pin_total(&self) -> u32 {
        sum(self.pins())
    }
}

/// A frame among the first nine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalFrame {
    pins: Vec<u8>,
}

impl NormalFrame {
    /// Records a strike (`[10]`) or two rolls from one rack.
    ///
    /// # Errors
    ///
    /// - `InvalidPinCount` if a roll exceeds 10.
    /// - `InvalidRollCount` if a strike carries extra rolls or a non-strike
    ///   does not have exactly two.
    /// - `InvalidPinSum` if the two rolls exceed 10.
    pub fn knock_pins(&mut self, pins: &[u8]) -> Result<(), ValidationError> {
        check_pin_counts(pins)?;

        match pins {
            [PINS_PER_RACK] => {}
            [PINS_PER_RACK, ..] => {
                return Err(ValidationError::InvalidRollCount {
                    shape: "strike",
                    expected: 1,
                    actual: pins.len(),
                });
            }
            [first, second] => check_rack(*first, *second)?,
            _ => {
                return Err(ValidationError::InvalidRollCount {
                    shape: "non-strike frame",
                    expected: 2,
                    actual: pins.len(),
                });
            }
        }

        self.pins = pins.to_vec();
        Ok(())
    }

    /// Raw rolls recorded for this frame.
    #[must_use]
    pub fn pins(&self) -> &[u8] {
        &self.pins
    }

    /// All ten pins on the first roll.
    #[must_use]
    pub fn is_strike(&self) -> bool {
        self.pins.first() == Some(&PINS_PER_RACK)
    }

    /// All ten pins with both rolls.
    #[must_use]
    pub fn is_spare(&self) -> bool {
        !self.is_strike() && self.pins.len() == 2 && sum(&self.pins) == u32::from(PINS_PER_RACK)
    }

    /// Number of later rolls credited to this frame.
    #[must_use]
    pub fn bonus_rolls(&self) -> usize {
        if self.is_strike() {
            2
        } else if self.is_spare() {
            1
        } else {
            0
        }
    }

    /// Frame score: own pins plus as many bonus rolls as `next_rolls` can
    /// supply. Missing bonus rolls are not an error.
    pub fn score<I>(&self, next_rolls: I) -> u32
    where
        I: IntoIterator<Item = u8>,
    {
        let bonus: u32 = next_rolls
            .into_iter()
            .take(self.bonus_rolls())
            .map(u32::from)
            .sum();
        sum(&self.pins) + bonus
    }
}

/// The tenth frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastFrame {
    pins: Vec<u8>,
}

impl LastFrame {
    /// Records the tenth frame's rolls, bonus rolls included.
    ///
    /// The first two rolls select the shape:
    /// - strike: three rolls; after a second strike the third roll is a fresh
    ///   rack, otherwise rolls two and three share a rack.
    /// - spare: three rolls; the third is a fresh rack.
    /// - open: exactly two rolls, with no check on their sum.
    ///
    /// # Errors
    ///
    /// - `InvalidPinCount` if a roll exceeds 10.
    /// - `InvalidRollCount` if the number of rolls does not match the shape.
    /// - `InvalidPinSum` if the strike's bonus rack exceeds 10.
    pub fn knock_pins(&mut self, pins: &[u8]) -> Result<(), ValidationError> {
        check_pin_counts(pins)?;

        match pins {
            [] | [_] => {
                return Err(ValidationError::InvalidRollCount {
                    shape: "tenth frame",
                    expected: 2,
                    actual: pins.len(),
                });
            }
            [PINS_PER_RACK, second, bonus @ ..] => {
                let [third] = bonus else {
                    return Err(ValidationError::InvalidRollCount {
                        shape: "tenth-frame strike",
                        expected: 3,
                        actual: pins.len(),
                    });
                };
                if *second != PINS_PER_RACK {
                    check_rack(*second, *third)?;
                }
            }
            [first, second, bonus @ ..] if first + second == PINS_PER_RACK => {
                if bonus.len() != 1 {
                    return Err(ValidationError::InvalidRollCount {
                        shape: "tenth-frame spare",
                        expected: 3,
                        actual: pins.len(),
                    });
                }
            }
            // Open tenth frame: only the roll count is checked.
            [_, _, rest @ ..] => {
                if !rest.is_empty() {
                    return Err(ValidationError::InvalidRollCount {
                        shape: "tenth-frame open",
                        expected: 2,
                        actual: pins.len(),
                    });
                }
            }
        }

        self.pins = pins.to_vec();
        Ok(())
    }

    /// Raw rolls recorded for this frame.
    #[must_use]
    pub fn pins(&self) -> &[u8] {
        &self.pins
    }

    /// Sum of all rolls; the tenth frame already holds its own bonus rolls.
    #[must_use]
    pub fn score(&self) -> u32 {
        sum(&self.pins)
    }
}

fn check_pin_counts(pins: &[u8]) -> Result<(), ValidationError> {
    match pins.iter().position(|&p| p > PINS_PER_RACK) {
        Some(roll) => Err(ValidationError::InvalidPinCount {
            roll,
            pins: pins[roll],
        }),
        None => Ok(()),
    }
}

/// Two rolls from the same rack cannot knock down more than the rack holds.
fn check_rack(first: u8, second: u8) -> Result<(), ValidationError> {
    if u16::from(first) + u16::from(second) > u16::from(PINS_PER_RACK) {
        return Err(ValidationError::InvalidPinSum { first, second });
    }
    Ok(())
}

fn sum(pins: &[u8]) -> u32 {
    pins.iter().copied().map(u32::from).sum()
}
