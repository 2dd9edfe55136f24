use std::num::NonZeroU32;
use std::path::PathBuf;

use change_mask_lib::DetectionOptions;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReportVerbosity {
    Quiet,
    Default,
    Verbose,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OutputFormat {
    Normal,
    Json,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(super) enum DifferenceArg {
    Wrapping,
    Absolute,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputCfg {
    pub path: PathBuf,
    pub size: Option<(NonZeroU32, NonZeroU32)>,
    pub format: OutputFormat,
    pub verbosity: ReportVerbosity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppCfg {
    pub frame_paths: Vec<PathBuf>,
    pub detection: DetectionOptions,
    pub output_cfg: OutputCfg,
}
