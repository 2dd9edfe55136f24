use std::{num::NonZeroU32, path::Path};

use serde::{Deserialize, Serialize};

use crate::definitions::{DEFAULT_DENOISE_SIZE, DEFAULT_TOLERANCE, MIN_FRAMES};
use crate::{
    load_frame, ChangeMask, ChangeMaskResult, ChannelDifference, ColorThresholds,
    SequenceAccumulator,
};

use crate::Error;

/// Options for how frames are compared and how aggressively noise is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DetectionOptions {
    /// Two samples are similar when each colour channel differs by less than this.
    /// Higher numbers ignore more sensor and compression noise, but also miss subtle
    /// changes. A value of 0 treats every cell as changed.
    ///
    /// Recommended range: 10-60.
    pub tolerance: u8,

    /// Thresholds used to decide which samples are black (changed) and which are white.
    /// The white threshold controls how dark a denoised region must remain to be kept.
    pub thresholds: ColorThresholds,

    /// How the per-channel distance between two samples is measured.
    pub difference: ChannelDifference,

    /// The side length of the small grid used during noise suppression.
    pub denoise_size: NonZeroU32,
}

impl std::default::Default for DetectionOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            thresholds: ColorThresholds::default(),
            difference: ChannelDifference::Wrapping,
            denoise_size: DEFAULT_DENOISE_SIZE,
        }
    }
}

/// A factory for change masks from frames stored on disk.
///
/// Use the default constructor [`ChangeMaskBuilder::default`] unless supplying custom options.
#[derive(Debug, Default)]
pub struct ChangeMaskBuilder {
    options: DetectionOptions,
}

impl ChangeMaskBuilder {
    /// Create a change mask builder with the selected [`DetectionOptions`]
    pub fn from_options(options: DetectionOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> DetectionOptions {
        self.options
    }

    /// Load each frame in order and fold it into a [`ChangeMask`]. Frames are decoded one at
    /// a time. The first frame that cannot be read or decoded aborts the whole sequence.
    pub fn build<P: AsRef<Path>>(&self, frame_paths: &[P]) -> ChangeMaskResult<ChangeMask> {
        let (first_path, rest_paths) = match frame_paths.split_first() {
            Some(split) if frame_paths.len() >= MIN_FRAMES => split,
            _ => return Err(Error::NotEnoughFrames(frame_paths.len())),
        };

        let first_frame = load_frame(first_path.as_ref())?;
        let first_dimensions = first_frame.dimensions();
        debug!(
            target: "change_mask_builder",
            "frame 0: {} ({}x{})",
            first_path.as_ref().display(),
            first_dimensions.0,
            first_dimensions.1
        );

        let acc = SequenceAccumulator::new(&first_frame, self.options);
        drop(first_frame);

        let acc = rest_paths.iter().try_fold(acc, |acc, path| {
            let path = path.as_ref();
            let frame = load_frame(path)?;
            debug!(
                target: "change_mask_builder",
                "frame {}: {}",
                acc.num_frames(),
                path.display()
            );

            //aligned frames are assumed. Different sizes are still resampled onto the grid.
            if frame.dimensions() != first_dimensions {
                warn!(
                    "frames not all same size: Expected {:?}, Actual {:?} ({})",
                    first_dimensions,
                    frame.dimensions(),
                    path.display()
                );
            }

            Ok::<_, Error>(acc.push_frame(&frame))
        })?;

        let mask = acc.finish()?;
        info!(
            target: "change_mask_builder",
            "{} frames compared, {} cells changed",
            mask.num_frames(),
            mask.changed_cells()
        );

        Ok(mask)
    }
}
