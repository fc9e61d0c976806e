//! Infrastructure layer for the prediction leaderboard
//!
//! This crate provides implementations for:
//! - Submission storage on the local filesystem
//! - In-memory submission storage for tests and ephemeral runs
//! - Loading the ground-truth table at startup
//!
//! ## Usage
//!
//! ```rust,no_run
//! use leaderboard_infrastructure::{ground_truth::load_ground_truth, FsSubmissionRepository};
//!
//! # async fn run() -> leaderboard_infrastructure::Result<()> {
//! let truth = load_ground_truth("test_data.csv").await?;
//! let repository = FsSubmissionRepository::open("uploads").await?;
//! # Ok(())
//! # }
//! ```

pub mod ground_truth;
pub mod repositories;

pub use repositories::{FsSubmissionRepository, InMemorySubmissionRepository};

use leaderboard_domain::DataFormatError;
use std::path::PathBuf;

// Re-export result and error types
pub type Result<T> = std::result::Result<T, Error>;

/// Infrastructure-level errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem errors
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The ground-truth file does not exist
    #[error("Ground truth file not found: {0}")]
    GroundTruthMissing(PathBuf),

    /// The ground-truth file exists but cannot be used
    #[error("Invalid ground truth in {path}: {source}")]
    GroundTruthFormat {
        path: PathBuf,
        #[source]
        source: DataFormatError,
    },
}

impl Error {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Io { .. })
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::GroundTruthMissing(PathBuf::from("test_data.csv"));
        assert_eq!(err.to_string(), "Ground truth file not found: test_data.csv");
        assert!(!err.is_retryable());

        let err = Error::io(
            "uploads",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.is_retryable());
    }
}
