//! CLI configuration
//!
//! Starts from the shared layered configuration (`config/` files and `APP_*`
//! environment variables) and applies command-line overrides on top.

use crate::output::OutputFormat;
use anyhow::{Context, Result};
use leaderboard_common::AppConfig;
use leaderboard_domain::LengthPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Resolved settings for one CLI invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding uploaded submissions
    pub upload_dir: PathBuf,

    /// Ground-truth CSV
    pub ground_truth_path: PathBuf,

    /// Row-count mismatch handling
    pub length_policy: LengthPolicy,

    /// Output format
    #[serde(default)]
    pub output_format: OutputFormat,
}

/// Values given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// `--upload-dir`
    pub upload_dir: Option<PathBuf>,
    /// `--ground-truth`
    pub ground_truth_path: Option<PathBuf>,
    /// `--length-policy`
    pub length_policy: Option<LengthPolicy>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_app_config(&AppConfig::default())
    }
}

impl Config {
    /// Take the storage and scoring settings from the shared configuration
    pub fn from_app_config(app: &AppConfig) -> Self {
        Self {
            upload_dir: app.storage.upload_dir.clone(),
            ground_truth_path: app.storage.ground_truth_path.clone(),
            length_policy: app.scoring.length_policy,
            output_format: OutputFormat::default(),
        }
    }

    /// Load the shared configuration and apply overrides
    pub fn load(overrides: Overrides) -> Result<Self> {
        let app = AppConfig::load().context("Failed to load configuration")?;
        Ok(Self::from_app_config(&app).with_overrides(overrides))
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(dir) = overrides.upload_dir {
            self.upload_dir = dir;
        }
        if let Some(path) = overrides.ground_truth_path {
            self.ground_truth_path = path;
        }
        if let Some(policy) = overrides.length_policy {
            self.length_policy = policy;
        }
        self
    }
}
