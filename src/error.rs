//! Error types for trialstat
//!
//! Toyota Way: Clear error messages with actionable guidance (Respect for People)

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// trialstat error types
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed trial row
    #[error("Trial parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number within the trial file
        line: usize,
        /// What was wrong with the row
        message: String,
    },

    /// Failure while reading one specific trial file
    #[error("Failed to read trial file {}: {source}", path.display())]
    TrialFile {
        /// Trial file path
        path: PathBuf,
        /// Underlying read or parse failure
        #[source]
        source: Box<Error>,
    },

    /// Condition subdirectory outside the canonical label list
    #[error("Unknown condition directory '{name}': not found in list {expected:?}")]
    UnknownCondition {
        /// Directory name as found on disk
        name: String,
        /// Canonical labels
        expected: &'static [&'static str],
    },

    /// Invalid parameter or input shape
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Chart backend failure
    #[error("Chart rendering failed: {0}")]
    Chart(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Arrow compute/schema error
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Report serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Attach the trial file path to a read or parse failure.
    #[must_use]
    pub fn in_trial_file(self, path: impl Into<PathBuf>) -> Self {
        Self::TrialFile {
            path: path.into(),
            source: Box::new(self),
        }
    }
}
