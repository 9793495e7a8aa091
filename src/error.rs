use std::path::PathBuf;
use thiserror::Error;

pub type SplitResult<T> = Result<T, SplitError>;

/// Exit code for an invocation with fewer than two positional arguments.
/// Raised before any `SplitError` exists, so it lives here as a constant.
pub const EXIT_MISSING_ARGUMENTS: u8 = 81;

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Input workbook does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to create output directory {path}: {source}")]
    OutputDirCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SplitError {
    /// Process exit code for this failure.
    ///
    /// Parse, serialization, and write errors all collapse to 99: the
    /// conversion step reports a single generic failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            SplitError::InputNotFound(_) => 82,
            SplitError::OutputDirCreation { .. } => 83,
            SplitError::Workbook(_) | SplitError::Csv(_) | SplitError::Io(_) => 99,
        }
    }
}
