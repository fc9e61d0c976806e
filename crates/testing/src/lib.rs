//! Testing utilities for the prediction leaderboard
//!
//! This crate provides:
//! - Fixtures for ground truth and prediction tables
//! - A builder for CSV tables with arbitrary columns
//! - A mock submission repository with fault injection
//!
//! # Examples
//!
//! ```
//! use leaderboard_testing::{builders::*, fixtures::*};
//!
//! let truth = create_ground_truth(&["1", "0", "1", "1"]);
//! assert_eq!(truth.len(), 4);
//!
//! let csv = CsvBuilder::new()
//!     .with_column("id", &["a", "b"])
//!     .with_match(&["1", "0"])
//!     .build();
//! assert!(csv.starts_with(b"id,match"));
//! ```

pub mod builders;
pub mod fixtures;
pub mod mocks;

// Re-export commonly used types
pub use builders::*;
pub use fixtures::*;
pub use mocks::*;

// Re-export testing dependencies for convenience
pub use proptest;
pub use tempfile;
