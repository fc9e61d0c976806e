//! Accuracy scoring of a submission against the ground truth.
//!
//! Accuracy is the mean of elementwise agreement between the submission's
//! `match` column and the ground truth's, compared strictly by position.

use crate::errors::{DataFormatError, DataFormatResult};
use crate::table::{GroundTruth, MatchColumn};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Fraction of rows where a submission agrees with the ground truth, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Accuracy(f64);

impl Accuracy {
    /// Accuracy from a count of agreeing rows out of `total`.
    ///
    /// `total` must be non-zero.
    fn from_counts(agreeing: usize, total: usize) -> Self {
        Self(agreeing as f64 / total as f64)
    }

    /// Raw value in `[0, 1]`.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Descending order, for ranking.
    pub fn cmp_desc(&self, other: &Self) -> Ordering {
        other.0.total_cmp(&self.0)
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}

/// What to do when a submission and the ground truth differ in row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthPolicy {
    /// Reject the submission with [`DataFormatError::RowCountMismatch`]
    #[default]
    Strict,
    /// Compare only the common prefix of both columns
    Truncate,
}

impl FromStr for LengthPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "truncate" => Ok(Self::Truncate),
            other => Err(format!(
                "unknown length policy '{}': expected 'strict' or 'truncate'",
                other
            )),
        }
    }
}

impl fmt::Display for LengthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Truncate => write!(f, "truncate"),
        }
    }
}

/// Scores prediction columns against the ground truth.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scorer {
    policy: LengthPolicy,
}

impl Scorer {
    /// Create a scorer with the given row-count policy.
    pub fn new(policy: LengthPolicy) -> Self {
        Self { policy }
    }

    /// The configured row-count policy.
    pub fn policy(&self) -> LengthPolicy {
        self.policy
    }

    /// Accuracy of `predictions` against `ground_truth`.
    pub fn score(
        &self,
        predictions: &MatchColumn,
        ground_truth: &GroundTruth,
    ) -> DataFormatResult<Accuracy> {
        self.score_with_rows(predictions, ground_truth)
            .map(|(accuracy, _)| accuracy)
    }

    /// Accuracy together with the number of rows that were compared.
    pub fn score_with_rows(
        &self,
        predictions: &MatchColumn,
        ground_truth: &GroundTruth,
    ) -> DataFormatResult<(Accuracy, usize)> {
        let truth = ground_truth.column();

        if predictions.len() != truth.len() && self.policy == LengthPolicy::Strict {
            return Err(DataFormatError::RowCountMismatch {
                predictions: predictions.len(),
                ground_truth: truth.len(),
            });
        }

        let total = predictions.len().min(truth.len());
        if total == 0 {
            return Err(DataFormatError::Empty);
        }

        let agreeing = predictions
            .cells()
            .iter()
            .zip(truth.cells())
            .filter(|(predicted, expected)| predicted.agrees_with(expected))
            .count();

        Ok((Accuracy::from_counts(agreeing, total), total))
    }

    /// Parse CSV bytes and score them in one step.
    pub fn score_csv(
        &self,
        data: &[u8],
        ground_truth: &GroundTruth,
    ) -> DataFormatResult<(Accuracy, usize)> {
        let predictions = MatchColumn::from_csv_bytes(data)?;
        self.score_with_rows(&predictions, ground_truth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn truth(values: &[&str]) -> GroundTruth {
        GroundTruth::new(MatchColumn::from_cells(values))
    }

    #[test]
    fn test_identical_columns_score_one() {
        let scorer = Scorer::default();
        let accuracy = scorer
            .score(&MatchColumn::from_cells(["1", "0", "1"]), &truth(&["1", "0", "1"]))
            .unwrap();
        assert_eq!(accuracy.value(), 1.0);
    }

    #[test]
    fn test_disjoint_columns_score_zero() {
        let scorer = Scorer::default();
        let accuracy = scorer
            .score(&MatchColumn::from_cells(["0", "1"]), &truth(&["1", "0"]))
            .unwrap();
        assert_eq!(accuracy.value(), 0.0);
    }

    #[test]
    fn test_partial_agreement() {
        let scorer = Scorer::default();
        let accuracy = scorer
            .score(
                &MatchColumn::from_cells(["1", "0", "0", "1"]),
                &truth(&["1", "0", "1", "1"]),
            )
            .unwrap();
        assert_eq!(accuracy.value(), 0.75);
    }

    #[test]
    fn test_strict_policy_rejects_length_mismatch() {
        let scorer = Scorer::new(LengthPolicy::Strict);
        let err = scorer
            .score(&MatchColumn::from_cells(["1"]), &truth(&["1", "0"]))
            .unwrap_err();
        assert_eq!(
            err,
            DataFormatError::RowCountMismatch {
                predictions: 1,
                ground_truth: 2
            }
        );
    }

    #[test]
    fn test_truncate_policy_scores_common_prefix() {
        let scorer = Scorer::new(LengthPolicy::Truncate);
        let (accuracy, rows) = scorer
            .score_with_rows(
                &MatchColumn::from_cells(["1", "1", "1", "1", "1"]),
                &truth(&["1", "0"]),
            )
            .unwrap();
        assert_eq!(rows, 2);
        assert_eq!(accuracy.value(), 0.5);
    }

    #[test]
    fn test_empty_predictions_are_an_error() {
        let scorer = Scorer::new(LengthPolicy::Truncate);
        let err = scorer
            .score(&MatchColumn::default(), &truth(&["1"]))
            .unwrap_err();
        assert_eq!(err, DataFormatError::Empty);
    }

    #[test]
    fn test_score_csv_missing_column() {
        let scorer = Scorer::default();
        let err = scorer.score_csv(b"id\n1\n", &truth(&["1"])).unwrap_err();
        assert!(matches!(err, DataFormatError::MissingColumn { .. }));
    }

    #[test]
    fn test_length_policy_parsing() {
        assert_eq!("strict".parse::<LengthPolicy>().unwrap(), LengthPolicy::Strict);
        assert_eq!("TRUNCATE".parse::<LengthPolicy>().unwrap(), LengthPolicy::Truncate);
        assert!("lenient".parse::<LengthPolicy>().is_err());
    }

    #[test]
    fn test_accuracy_display() {
        let accuracy = Accuracy::from_counts(3, 4);
        assert_eq!(accuracy.to_string(), "0.7500");
    }
}
