use std::path::{Path, PathBuf};

use change_mask_lib::{ChangeMask, DetectionOptions};
use serde::Serialize;

use super::OutputFormat;

/// What a successful run did, printed to stdout once the change mask is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    frames: usize,
    tolerance: u8,
    changed_cells: usize,
    output: PathBuf,
}

impl RunSummary {
    pub fn new(mask: &ChangeMask, opts: &DetectionOptions, output: &Path) -> Self {
        Self {
            frames: mask.num_frames(),
            tolerance: opts.tolerance,
            changed_cells: mask.changed_cells(),
            output: output.to_path_buf(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Normal => Ok(format!(
                "{} frames compared at tolerance {}: {} cells changed, written to {}",
                self.frames,
                self.tolerance,
                self.changed_cells,
                self.output.display()
            )),
            OutputFormat::Json => serde_json::to_string_pretty(self),
        }
    }
}
