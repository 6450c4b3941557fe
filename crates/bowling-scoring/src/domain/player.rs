//! A player's ten frames and their scores.

use bowling_core::error::ValidationError;

use super::frame::{Frame, LastFrame, NormalFrame};

/// Frames in a game of ten-pin.
pub const FRAMES_PER_GAME: usize = 10;

/// Index of the tenth frame.
pub const LAST_FRAME: usize = FRAMES_PER_GAME - 1;

/// A named player and the rolls of each of their frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    frames: [Frame; FRAMES_PER_GAME],
}

impl Player {
    /// Creates a player with nine empty normal frames and an empty tenth frame.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let frames = std::array::from_fn(|index| {
            if index == LAST_FRAME {
                Frame::Last(LastFrame::default())
            } else {
                Frame::Normal(NormalFrame::default())
            }
        });
        Self {
            name: name.into(),
            frames,
        }
    }

    /// Player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All ten frames, in order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Records `pins` into the frame at `frame_index`.
    ///
    /// # Errors
    ///
    /// Propagates the frame's `ValidationError`.
    ///
    /// # Panics
    ///
    /// Panics if `frame_index` is not below `FRAMES_PER_GAME`; the game's frame
    /// pointer never leaves that range.
    pub fn knock_pins(&mut self, frame_index: usize, pins: &[u8]) -> Result<(), ValidationError> {
        self.frames[frame_index].knock_pins(pins)
    }

    /// Raw rolls of every frame.
    #[must_use]
    pub fn frame_rolls(&self) -> Vec<Vec<u8>> {
        self.frames.iter().map(|f| f.pins().to_vec()).collect()
    }

    /// Per-frame scores (not cumulative).
    ///
    /// A normal frame scores its own pins plus its bonus rolls, taken from the
    /// flattened rolls of all later frames. Frames that have not been played
    /// contribute nothing, so this can be called at any point in the game.
    #[must_use]
    pub fn scores(&self) -> Vec<u32> {
        self.frames
            .iter()
            .enumerate()
            .map(|(index, frame)| match frame {
                Frame::Normal(normal) => {
                    let later_rolls = self.frames[index + 1..]
                        .iter()
                        .flat_map(|f| f.pins().iter().copied());
                    normal.score(later_rolls)
                }
                Frame::Last(last) => last.score(),
            })
            .collect()
    }

    /// Sum of all frame scores.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.scores().iter().sum()
    }
}
