//! CLI commands

pub mod leaderboard;
pub mod score;
pub mod submissions;

use crate::config::Config;
use crate::output::{Formattable, OutputFormat};
use anyhow::{Context, Result};
use leaderboard_application::LeaderboardService;
use leaderboard_domain::Scorer;
use leaderboard_infrastructure::{ground_truth::load_ground_truth, FsSubmissionRepository};
use std::sync::Arc;

/// Context passed to all commands
pub struct CommandContext {
    /// Resolved settings
    pub config: Config,
    /// Leaderboard service over the upload directory
    pub service: LeaderboardService<FsSubmissionRepository>,
}

impl CommandContext {
    /// Load the ground truth and open the upload directory
    pub async fn new(config: Config) -> Result<Self> {
        let ground_truth = load_ground_truth(&config.ground_truth_path)
            .await
            .with_context(|| {
                format!(
                    "Failed to load ground truth from {}",
                    config.ground_truth_path.display()
                )
            })?;
        let repository = FsSubmissionRepository::new(&config.upload_dir);
        let service = LeaderboardService::new(
            Arc::new(repository),
            Arc::new(ground_truth),
            Scorer::new(config.length_policy),
        );

        Ok(Self { config, service })
    }

    /// Output format for this invocation
    pub fn format(&self) -> OutputFormat {
        self.config.output_format
    }

    /// Print a value in the configured output format
    pub fn print<T: Formattable>(&self, value: &T) -> Result<()> {
        println!("{}", value.format(self.format())?);
        Ok(())
    }

    /// Whether human-oriented status lines should be printed
    pub fn is_interactive(&self) -> bool {
        self.format() == OutputFormat::Table
    }
}
