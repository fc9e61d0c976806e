//! Common utilities shared by the prediction leaderboard binaries.
//!
//! This crate provides:
//! - Layered configuration loading and validation
//! - Tracing subscriber setup

pub mod config;
pub mod telemetry;

// Re-export commonly used types
pub use config::{AppConfig, ScoringConfig, ServerConfig, StorageConfig, TelemetryConfig};
pub use telemetry::{init_from_config, init_tracing};

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
