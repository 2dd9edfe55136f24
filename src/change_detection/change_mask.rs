use std::{num::NonZeroU32, path::Path};

use crate::{write_grid, ChangeMaskResult, ColorGrid, ColorThresholds};

/// The composite result of folding a frame sequence: a grid where every persistently
/// changed cell is black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeMask {
    grid: ColorGrid,
    num_frames: usize,
    changed_cells: usize,
}

impl ChangeMask {
    pub(crate) fn new(grid: ColorGrid, num_frames: usize, thresholds: &ColorThresholds) -> Self {
        let changed_cells = grid.count_black(thresholds);
        Self {
            grid,
            num_frames,
            changed_cells,
        }
    }

    pub fn grid(&self) -> &ColorGrid {
        &self.grid
    }

    #[must_use]
    pub fn into_grid(self) -> ColorGrid {
        self.grid
    }

    /// The number of frames that were compared to produce this mask.
    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// The number of grid cells marked as changed.
    pub fn changed_cells(&self) -> usize {
        self.changed_cells
    }

    /// Encode the mask to `path`. See [`write_grid`].
    pub fn write(
        &self,
        path: impl AsRef<Path>,
        size: Option<(NonZeroU32, NonZeroU32)>,
    ) -> ChangeMaskResult<()> {
        write_grid(&self.grid, path.as_ref(), size)
    }
}
