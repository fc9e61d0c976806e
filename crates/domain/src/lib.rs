//! Prediction Leaderboard Domain Types
//!
//! This crate provides the core domain model for the prediction leaderboard:
//! submission naming rules, parsing of the `match` column out of CSV tables,
//! accuracy scoring against the ground truth, and ranking of scored
//! submissions.
//!
//! ## Architecture
//!
//! - **submission**: Validated submission names and per-file scoring reports
//! - **table**: CSV parsing of the `match` column and cell comparison rules
//! - **scoring**: The scorer and its row-count policy
//! - **leaderboard**: Ranking, rank labels and leaderboard entries
//! - **errors**: Error types with error codes and HTTP status codes
//!
//! ## Usage
//!
//! ```rust
//! use leaderboard_domain::{
//!     leaderboard::Leaderboard,
//!     scoring::{LengthPolicy, Scorer},
//!     submission::SubmissionName,
//!     table::{GroundTruth, MatchColumn},
//! };
//!
//! let truth = GroundTruth::new(MatchColumn::from_csv_bytes(b"id,match\n1,1\n2,0\n").unwrap());
//! let predictions = MatchColumn::from_csv_bytes(b"id,match\n1,1\n2,1\n").unwrap();
//!
//! let scorer = Scorer::new(LengthPolicy::Strict);
//! let accuracy = scorer.score(&predictions, &truth).unwrap();
//! assert_eq!(accuracy.value(), 0.5);
//!
//! let name = SubmissionName::parse("predict_groupA.csv").unwrap();
//! let board = Leaderboard::rank(vec![(name, accuracy)]);
//! assert_eq!(board.entries()[0].label.to_string(), "🥇 1");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod leaderboard;
pub mod scoring;
pub mod submission;
pub mod table;

// Re-export commonly used types
pub use errors::{DataFormatError, StoreError, ValidationError};
pub use leaderboard::{Leaderboard, LeaderboardEntry, RankLabel};
pub use scoring::{Accuracy, LengthPolicy, Scorer};
pub use submission::{SubmissionName, SubmissionReport, SubmissionStatus};
pub use table::{Cell, MatchColumn, GroundTruth, MATCH_COLUMN};
