//! Submission names and per-file scoring reports.

use crate::errors::ValidationError;
use crate::scoring::Accuracy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest name most filesystems accept for a single path component.
const MAX_NAME_BYTES: usize = 255;

/// Validated filename under which a submission is stored.
///
/// The name is the unique key of a submission in the store. It is always a
/// single path component, so it can be joined onto the upload directory
/// without escaping it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubmissionName(String);

impl SubmissionName {
    /// Validate and wrap a filename.
    pub fn parse(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let reject = |reason: &str| ValidationError::InvalidSubmissionName {
            name: name.clone(),
            reason: reason.to_string(),
        };

        if name.trim().is_empty() {
            return Err(reject("name is empty"));
        }
        if name.len() > MAX_NAME_BYTES {
            return Err(reject("name is longer than 255 bytes"));
        }
        if name == "." || name == ".." {
            return Err(reject("name is a relative path"));
        }
        if name.contains(|c| matches!(c, '/' | '\\' | '\0')) {
            return Err(reject("name contains a path separator"));
        }
        if name.starts_with('.') {
            return Err(reject("hidden files are reserved"));
        }

        Ok(Self(name))
    }

    /// Borrow the raw filename.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name carries a `.csv` extension (case-insensitive).
    pub fn is_csv(&self) -> bool {
        self.0
            .rsplit_once('.')
            .map(|(stem, ext)| !stem.is_empty() && ext.eq_ignore_ascii_case("csv"))
            .unwrap_or(false)
    }
}

impl fmt::Display for SubmissionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SubmissionName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SubmissionName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<SubmissionName> for String {
    fn from(name: SubmissionName) -> Self {
        name.0
    }
}

/// Outcome of scoring one stored submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// The file parsed and was compared against the ground truth
    Scored {
        /// Fraction of agreeing rows
        accuracy: Accuracy,
        /// Number of rows that were compared
        rows: usize,
    },
    /// The file could not be read or scored
    Failed {
        /// Human-readable failure reason
        reason: String,
    },
}

impl SubmissionStatus {
    /// Accuracy if the submission was scored.
    pub fn accuracy(&self) -> Option<Accuracy> {
        match self {
            Self::Scored { accuracy, .. } => Some(*accuracy),
            Self::Failed { .. } => None,
        }
    }

    /// Whether scoring failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// A stored submission together with its scoring outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReport {
    /// Stored filename
    pub filename: SubmissionName,
    /// Accuracy or failure marker
    #[serde(flatten)]
    pub status: SubmissionStatus,
}

impl SubmissionReport {
    /// Report for a successfully scored file.
    pub fn scored(filename: SubmissionName, accuracy: Accuracy, rows: usize) -> Self {
        Self {
            filename,
            status: SubmissionStatus::Scored { accuracy, rows },
        }
    }

    /// Report for a file that could not be scored.
    pub fn failed(filename: SubmissionName, reason: impl Into<String>) -> Self {
        Self {
            filename,
            status: SubmissionStatus::Failed {
                reason: reason.into(),
            },
        }
    }
}
