//! Application layer for the prediction leaderboard
//!
//! This crate orchestrates domain logic and coordinates between layers.
//!
//! ## Modules
//!
//! - `services` - The submission repository port and the leaderboard service

pub mod services;

pub use services::{LeaderboardService, LeaderboardSnapshot, SubmissionRepository};

use leaderboard_domain::{DataFormatError, StoreError, ValidationError};
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApplicationError {
    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A table could not be parsed or scored
    #[error("Unprocessable data: {0}")]
    DataFormat(String),

    /// The submission store is unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl ApplicationError {
    /// Get HTTP status code for this error
    pub fn http_status(&self) -> u16 {
        match self {
            ApplicationError::NotFound(_) => 404,
            ApplicationError::InvalidInput(_) => 400,
            ApplicationError::DataFormat(_) => 422,
            ApplicationError::ServiceUnavailable(_) => 503,
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApplicationError::ServiceUnavailable(_))
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            ApplicationError::NotFound(_) => "NOT_FOUND",
            ApplicationError::InvalidInput(_) => "INVALID_INPUT",
            ApplicationError::DataFormat(_) => "DATA_FORMAT_ERROR",
            ApplicationError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }
}

impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(name) => ApplicationError::NotFound(name.to_string()),
            StoreError::Io(_) => ApplicationError::ServiceUnavailable(err.to_string()),
        }
    }
}

impl From<ValidationError> for ApplicationError {
    fn from(err: ValidationError) -> Self {
        ApplicationError::InvalidInput(err.to_string())
    }
}

impl From<DataFormatError> for ApplicationError {
    fn from(err: DataFormatError) -> Self {
        ApplicationError::DataFormat(err.to_string())
    }
}

pub type ApplicationResult<T> = Result<T, ApplicationError>;
