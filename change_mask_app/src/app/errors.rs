use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Change detection error: {0}")]
    ChangeMaskError(#[from] change_mask_lib::Error),

    #[error("Failed to print run summary: {0}")]
    SummaryError(#[from] serde_json::Error),
}
