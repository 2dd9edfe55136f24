#![allow(clippy::let_and_return)]
#![allow(clippy::len_without_is_empty)]
#![warn(clippy::cast_lossless)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::todo)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::unimplemented)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::doc_markdown)]

//! # Overview
//! `change_mask_lib` finds the parts of a scene that changed, and stayed changed, across
//! a sequence of still frames (for example successive snapshots from a fixed camera).
//! The result is a single composite image in which every persistently changed area is
//! painted black while isolated noise from the sensor or from compression is discarded.
//!
//! Frames must already be aligned and show the same view. The library does not attempt
//! registration or colour correction.
//!
//! # High Level API
//! Give the frames to a [`SequenceAccumulator`] in order, or hand a list of paths to a
//! [`ChangeMaskBuilder`], and collect the resulting [`ChangeMask`].
//! ```rust
//! use change_mask_lib::{DetectionOptions, SequenceAccumulator};
//! use image::{Rgba, RgbaImage};
//!
//! // An empty scene, then the same scene with an object placed in it.
//! let empty = RgbaImage::from_pixel(100, 100, Rgba([255, 255, 255, 255]));
//! let mut occupied = empty.clone();
//! for x in 40..50 {
//!     for y in 40..50 {
//!         occupied.put_pixel(x, y, Rgba([0, 0, 0, 255]));
//!     }
//! }
//!
//! let mask = SequenceAccumulator::new(&empty, DetectionOptions::default())
//!     .push_frame(&occupied)
//!     .push_frame(&occupied)
//!     .finish()
//!     .unwrap();
//!
//! // The object covers 100 cells of the grid, and nothing else changed.
//! assert_eq!(mask.changed_cells(), 100);
//! ```
//!
//! # How it works
//! Every frame is resampled with a Lanczos3 filter to a fixed 100x100 [`ColorGrid`].
//! Consecutive grids are compared cell by cell: a cell is marked black when the two samples
//! differ by at least the tolerance in any colour channel, or when the earlier sample was
//! already black. Before the next comparison the accumulated mask is shrunk to a 10x10 grid
//! and blown back up again. Marks that cover less than roughly one cell of the small grid
//! fade to near-white in that round trip and are dropped; the marks that survive are
//! painted onto the subject grid, which carries them into every later comparison.
//!
//! # Limitations
//! The resolution of the result is coarse (100x100), so small misalignments between
//! frames are absorbed by the grid. Changes much smaller than a tenth of the frame width are
//! indistinguishable from noise and will not be reported.
//!
//! With the default [`ChannelDifference::Wrapping`] comparison a sample that gets brighter
//! is always reported as changed, while one that gets darker by less than the tolerance is
//! not. Use [`ChannelDifference::Absolute`] for a symmetric comparison.

#[macro_use]
extern crate log;

mod change_detection;
mod definitions;

pub use change_detection::{
    change_mask::ChangeMask,
    change_mask_builder::{ChangeMaskBuilder, DetectionOptions},
    classify::ColorThresholds,
    color_grid::{sample, ColorGrid},
    difference::diff,
    frame_io::{load_frame, write_grid},
    noise::{marks_only, project, round_trip, suppress},
    sequence::SequenceAccumulator,
    Error,
};

pub use definitions::{
    ChannelDifference, BLACK, DEFAULT_BLACK_THRESHOLD, DEFAULT_DENOISE_SIZE,
    DEFAULT_OUTPUT_PATH, DEFAULT_TOLERANCE, DEFAULT_WHITE_THRESHOLD, GRID_SIZE, MIN_FRAMES, WHITE,
};

type ChangeMaskResult<T> = Result<T, crate::Error>;
