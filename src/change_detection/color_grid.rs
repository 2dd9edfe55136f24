use std::num::NonZeroU32;

use change_mask_common::resize_img_rgba;
use image::{Rgba, RgbaImage};
use itertools::iproduct;

use crate::{
    definitions::{BLACK, GRID_DIM, GRID_SIZE, WHITE},
    ColorThresholds,
};

type Cells = [[Rgba<u8>; GRID_SIZE]; GRID_SIZE];

/// A frame downsampled to exactly `GRID_SIZE` x `GRID_SIZE` samples.
///
/// The dimensions are fixed at compile time, so any two grids can always be compared
/// cell for cell. Cells are addressed as `(x, y)` with the origin at the top left.
#[derive(Clone, PartialEq, Eq)]
pub struct ColorGrid {
    //indexed as cells[x][y]
    cells: Box<Cells>,
}

impl std::fmt::Debug for ColorGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let black = self.count(|pix| pix == BLACK);
        let white = self.count(|pix| pix == WHITE);
        f.debug_struct("ColorGrid")
            .field("size", &GRID_SIZE)
            .field("black_marks", &black)
            .field("white_marks", &white)
            .finish()
    }
}

impl Default for ColorGrid {
    fn default() -> Self {
        Self::filled(WHITE)
    }
}

impl ColorGrid {
    /// A grid with every cell set to `sample`.
    #[must_use]
    pub fn filled(sample: Rgba<u8>) -> Self {
        Self {
            cells: Box::new([[sample; GRID_SIZE]; GRID_SIZE]),
        }
    }

    /// Downsample (or upsample) a frame of any size onto the grid.
    #[must_use]
    pub fn sample(frame: &RgbaImage) -> Self {
        let resized = resize_img_rgba(frame, GRID_DIM, GRID_DIM);
        Self::from_image(&resized).expect("image was just resized to the grid dimensions")
    }

    /// Copy an image that is already exactly `GRID_SIZE` x `GRID_SIZE` into a grid.
    /// Returns None for any other size; use [`ColorGrid::sample`] to resample instead.
    #[must_use]
    pub fn from_image(img: &RgbaImage) -> Option<Self> {
        if img.dimensions() != (GRID_DIM.get(), GRID_DIM.get()) {
            return None;
        }

        let mut ret = Self::default();
        for (x, y, pix) in img.enumerate_pixels() {
            ret.cells[x as usize][y as usize] = *pix;
        }

        Some(ret)
    }

    #[must_use]
    pub fn to_image(&self) -> RgbaImage {
        RgbaImage::from_fn(GRID_DIM.get(), GRID_DIM.get(), |x, y| {
            self.cells[x as usize][y as usize]
        })
    }

    /// Panics if `x` or `y` is not below `GRID_SIZE`.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Rgba<u8> {
        self.cells[x][y]
    }

    /// Panics if `x` or `y` is not below `GRID_SIZE`.
    pub fn set(&mut self, x: usize, y: usize, sample: Rgba<u8>) {
        self.cells[x][y] = sample;
    }

    /// Every `(x, y)` coordinate of a grid, column by column.
    pub fn coords() -> impl Iterator<Item = (usize, usize)> {
        iproduct!(0..GRID_SIZE, 0..GRID_SIZE)
    }

    pub fn count(&self, pred: impl Fn(Rgba<u8>) -> bool) -> usize {
        self.cells.iter().flatten().filter(|pix| pred(**pix)).count()
    }

    pub fn count_black(&self, thresholds: &ColorThresholds) -> usize {
        self.count(|pix| thresholds.is_black(pix))
    }
}

/// Resample a frame of any size to `new_width` x `new_height` with a Lanczos3 filter.
#[must_use]
pub fn sample(frame: &RgbaImage, new_width: NonZeroU32, new_height: NonZeroU32) -> RgbaImage {
    resize_img_rgba(frame, new_width, new_height)
}
