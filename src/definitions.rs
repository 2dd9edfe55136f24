use std::num::NonZeroU32;

use image::Rgba;
use serde::{Deserialize, Serialize};

// Grid definitions
/// Width and height of every [`crate::ColorGrid`]. Frames of any size are
/// resampled to this resolution before they are compared.
pub const GRID_SIZE: usize = 100;

pub(crate) const GRID_DIM: NonZeroU32 = match NonZeroU32::new(GRID_SIZE as u32) {
    Some(dim) => dim,
    None => panic!("GRID_SIZE must be nonzero"),
};

/// The resolution that accumulated masks are shrunk to during noise suppression.
/// Marked regions smaller than roughly one cell at this resolution are treated as
/// noise. Lower numbers suppress more aggressively.
///
/// Recommended range: 5-25.
pub const DEFAULT_DENOISE_SIZE: NonZeroU32 = match NonZeroU32::new(10) {
    Some(size) => size,
    None => panic!("denoise size must be nonzero"),
};

// Comparison definitions
/// The default per-channel tolerance. Two samples are similar when each of their red,
/// green and blue channels differ by less than this amount.
pub const DEFAULT_TOLERANCE: u8 = 20;

/// A sample is black when all of its colour channels are below this value.
pub const DEFAULT_BLACK_THRESHOLD: u8 = 10;

/// A sample is white when all of its colour channels are above this value.
pub const DEFAULT_WHITE_THRESHOLD: u8 = 200;

/// At least two frames are needed before anything can be compared.
pub const MIN_FRAMES: usize = 2;

/// Where the app writes the composite mask unless told otherwise.
pub const DEFAULT_OUTPUT_PATH: &str = "images/results.jpg";

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// How the distance between two channel values is measured when deciding whether
/// two samples are similar.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum ChannelDifference {
    /// `subject - candidate` in unsigned 8 bit arithmetic. When the candidate is
    /// brighter than the subject the subtraction wraps around to a large value, so
    /// any brightening registers as a change while darkening is tolerated.
    Wrapping,

    /// `|subject - candidate|`. Brightening and darkening are treated alike.
    Absolute,
}

impl ChannelDifference {
    #[must_use]
    pub fn delta(self, subject: u8, candidate: u8) -> u8 {
        match self {
            Self::Wrapping => subject.wrapping_sub(candidate),
            Self::Absolute => subject.abs_diff(candidate),
        }
    }
}
