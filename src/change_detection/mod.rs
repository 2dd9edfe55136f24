pub mod change_mask;
pub mod change_mask_builder;
pub mod classify;
pub mod color_grid;
pub mod difference;
pub mod frame_io;
pub mod noise;
pub mod sequence;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error that prevented a change mask from being produced. None of these are
/// recoverable: the sequence is abandoned and nothing is written.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Error {
    /// A frame could not be read from disk (missing file, no permission etc.)
    #[error("Failed to read frame {}: {msg}", .path.display())]
    FrameIo { path: PathBuf, msg: String },

    /// A frame was read but is not an image in any supported encoding.
    #[error("Failed to decode frame {}: {msg}", .path.display())]
    FrameDecode { path: PathBuf, msg: String },

    #[error("At least two frames are needed to detect change, got {0}")]
    NotEnoughFrames(usize),

    /// The composite mask could not be encoded or written.
    #[error("Failed to write {}: {msg}", .path.display())]
    Write { path: PathBuf, msg: String },
}
