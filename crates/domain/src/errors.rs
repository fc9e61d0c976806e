//! Error types for the prediction leaderboard domain.
//!
//! Each concern has its own enum; the application layer maps them onto
//! HTTP statuses and error codes.

use crate::submission::SubmissionName;

/// Errors raised while parsing or scoring a `match` column
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DataFormatError {
    /// The header row does not contain the required column
    #[error("missing required column '{column}'")]
    MissingColumn {
        /// Name of the column that was looked up
        column: String,
    },

    /// The CSV could not be parsed
    #[error("CSV parse error: {0}")]
    Csv(String),

    /// The table has a header but no data rows
    #[error("table has no data rows")]
    Empty,

    /// Predictions and ground truth differ in length under the strict policy
    #[error("row count mismatch: predictions have {predictions} rows, ground truth has {ground_truth}")]
    RowCountMismatch {
        /// Rows in the submission
        predictions: usize,
        /// Rows in the ground truth
        ground_truth: usize,
    },
}

/// Submission store errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    /// No submission is stored under this name
    #[error("Submission not found: {0}")]
    NotFound(SubmissionName),

    /// Underlying storage I/O failure
    #[error("I/O failure: {0}")]
    Io(String),
}

/// Validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A submission name is unusable as a store key
    #[error("Invalid submission name '{name}': {reason}")]
    InvalidSubmissionName {
        /// The rejected name
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// Uploaded file is not a CSV file
    #[error("Unsupported file type for '{0}': only .csv files are accepted")]
    UnsupportedFileType(String),

    /// A required request field is absent
    #[error("Missing field: {0}")]
    MissingField(String),
}

/// Result of parsing or scoring a table
pub type DataFormatResult<T> = Result<T, DataFormatError>;

/// Result of a store operation
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_submission() {
        let name = SubmissionName::parse("a.csv").unwrap();
        assert_eq!(StoreError::NotFound(name).to_string(), "Submission not found: a.csv");
    }

    #[test]
    fn test_missing_column_message() {
        let err = DataFormatError::MissingColumn {
            column: "match".to_string(),
        };
        assert_eq!(err.to_string(), "missing required column 'match'");
    }
}
