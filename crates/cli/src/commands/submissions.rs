//! Adding and removing stored submissions

use anyhow::{Context, Result};
use leaderboard_domain::SubmissionStatus;
use std::path::Path;

use crate::commands::{score::name_for, CommandContext};
use crate::output::colors;

/// Copy a local file into the upload directory and score it
pub async fn add(ctx: &CommandContext, path: &Path, name: Option<String>) -> Result<()> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let name = name_for(path, name)?;

    let report = ctx.service.upload(name.as_str(), &data).await?;

    if ctx.is_interactive() {
        let line = match &report.status {
            SubmissionStatus::Scored { accuracy, .. } => {
                colors::success(&format!("✓ Added {} (accuracy {})", report.filename, accuracy))
            }
            SubmissionStatus::Failed { reason } => colors::warning(&format!(
                "! Added {}, but it could not be scored: {}",
                report.filename, reason
            )),
        };
        println!("{}", line);
        Ok(())
    } else {
        ctx.print(&report)
    }
}

/// Remove a stored submission and show the rebuilt leaderboard
pub async fn remove(ctx: &CommandContext, name: &str) -> Result<()> {
    let board = ctx.service.delete(name).await?;

    if ctx.is_interactive() {
        println!("{}", colors::success(&format!("✓ Removed {}", name)));
        println!();
    }
    ctx.print(&board)
}
