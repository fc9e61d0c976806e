//! Prediction leaderboard CLI library
//!
//! Scores, lists and manages submissions in a local upload directory using
//! the same service as the server, plus the output formatting for the
//! `leaderboard` binary.

pub mod commands;
pub mod config;
pub mod output;

pub use config::{Config, Overrides};
pub use output::{Formattable, JsonFormatter, OutputFormat, PlainFormatter, TableFormatter};

/// Re-export common types
pub use anyhow::{Context, Result};
