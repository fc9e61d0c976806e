//! Fixtures for ground truth and submission tables.
//!
//! The `example_*` fixtures reproduce the reference scenario: ground truth
//! `[1,0,1,1]`, group A and group B both at 0.75, group C without a
//! `match` column.

use crate::builders::CsvBuilder;
use leaderboard_domain::{GroundTruth, MatchColumn, SubmissionName};

/// Ground-truth values of the reference scenario
pub const EXAMPLE_TRUTH: [&str; 4] = ["1", "0", "1", "1"];

/// Create a ground truth from `match` values
pub fn create_ground_truth(values: &[&str]) -> GroundTruth {
    GroundTruth::new(MatchColumn::from_cells(values))
}

/// Ground truth of the reference scenario
pub fn example_ground_truth() -> GroundTruth {
    create_ground_truth(&EXAMPLE_TRUTH)
}

/// Ground-truth CSV of the reference scenario, with an id column
pub fn example_ground_truth_csv() -> Vec<u8> {
    prediction_csv(&EXAMPLE_TRUTH)
}

/// A submission CSV with an `id` column and the given `match` values
pub fn prediction_csv(values: &[&str]) -> Vec<u8> {
    let ids: Vec<String> = (1..=values.len()).map(|i| i.to_string()).collect();
    let ids: Vec<&str> = ids.iter().map(String::as_str).collect();
    CsvBuilder::new()
        .with_column("id", &ids)
        .with_match(values)
        .build()
}

/// Group A: three of four rows right
pub fn example_group_a_csv() -> Vec<u8> {
    prediction_csv(&["1", "0", "0", "1"])
}

/// Group B: also three of four rows right
pub fn example_group_b_csv() -> Vec<u8> {
    prediction_csv(&["1", "1", "1", "1"])
}

/// Group C: well-formed CSV without a `match` column
pub fn example_group_c_csv() -> Vec<u8> {
    CsvBuilder::new()
        .with_column("id", &["1", "2", "3", "4"])
        .with_column("prediction", &["1", "0", "1", "1"])
        .build()
}

/// Bytes that are not a usable CSV table
pub fn malformed_csv() -> Vec<u8> {
    b"id,match\n1,1\n2,0,unexpected\n".to_vec()
}

/// Parse a submission name, panicking on invalid input
pub fn submission_name(name: &str) -> SubmissionName {
    SubmissionName::parse(name).expect("valid submission name")
}
