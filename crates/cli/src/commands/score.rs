//! Offline scoring of a local file

use anyhow::{bail, Context, Result};
use leaderboard_domain::{SubmissionName, SubmissionReport};
use std::path::Path;

use crate::commands::CommandContext;

/// Name a local file is scored under: its final path component
pub(crate) fn name_for(path: &Path, name: Option<String>) -> Result<SubmissionName> {
    let raw = match name {
        Some(name) => name,
        None => path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_owned)
            .with_context(|| format!("{} has no usable file name", path.display()))?,
    };
    Ok(SubmissionName::parse(raw)?)
}

/// Score a file against the ground truth without storing it
pub async fn score_file(ctx: &CommandContext, path: &Path) -> Result<SubmissionReport> {
    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let name = name_for(path, None)?;
    Ok(ctx.service.score_bytes(name, &data))
}

/// Score a file and print the result; fails when the file cannot be scored
pub async fn score(ctx: &CommandContext, path: &Path) -> Result<()> {
    let report = score_file(ctx, path).await?;
    ctx.print(&report)?;

    if report.status.is_failed() {
        bail!("{} could not be scored", report.filename);
    }
    Ok(())
}
