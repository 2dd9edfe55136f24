use std::num::NonZeroU32;

use change_mask_common::resize_img_rgba;

use crate::{
    definitions::{BLACK, GRID_DIM},
    ColorGrid, ColorThresholds, DetectionOptions,
};

/// Shrink a grid to `denoise_size` x `denoise_size` and blow it back up to full size.
/// Both passes use the Lanczos3 filter, so features smaller than one cell of the small
/// grid are smoothed away.
#[must_use]
pub fn round_trip(grid: &ColorGrid, denoise_size: NonZeroU32) -> ColorGrid {
    let small = resize_img_rgba(&grid.to_image(), denoise_size, denoise_size);
    let restored = resize_img_rgba(&small, GRID_DIM, GRID_DIM);

    ColorGrid::from_image(&restored).expect("image was just resized to the grid dimensions")
}

/// Reduce a mask to its marks: black cells stay black, every other cell becomes white.
#[must_use]
pub fn marks_only(mask: &ColorGrid, thresholds: &ColorThresholds) -> ColorGrid {
    let mut ret = ColorGrid::default();
    for (x, y) in ColorGrid::coords() {
        if thresholds.is_black(mask.get(x, y)) {
            ret.set(x, y, BLACK);
        }
    }

    ret
}

/// Remove speckle from an accumulated mask.
///
/// The marks of the mask are sent through a [`round_trip`] on their own, without the scene
/// they were painted on, and each mark is kept only if the smoothed grid is not white at
/// that cell. An isolated mark is diluted by its unmarked surroundings and fades past the
/// white threshold; a contiguous region covering about one small-grid cell or more stays
/// dark enough to survive. Every other cell of the result is white, so suppression never
/// adds marks that were not in the input.
#[must_use]
pub fn suppress(mask: &ColorGrid, opts: &DetectionOptions) -> ColorGrid {
    let thresholds = &opts.thresholds;
    let marks = marks_only(mask, thresholds);
    let smoothed = round_trip(&marks, opts.denoise_size);

    let mut ret = ColorGrid::default();
    for (x, y) in ColorGrid::coords() {
        if thresholds.is_black(marks.get(x, y)) && !thresholds.is_white(smoothed.get(x, y)) {
            ret.set(x, y, BLACK);
        }
    }

    ret
}

/// Paint every black cell of `noise` onto `reference`. All other cells of the
/// reference are left as they were.
#[must_use]
pub fn project(noise: &ColorGrid, mut reference: ColorGrid, thresholds: &ColorThresholds) -> ColorGrid {
    for (x, y) in ColorGrid::coords() {
        if thresholds.is_black(noise.get(x, y)) {
            reference.set(x, y, BLACK);
        }
    }

    reference
}
