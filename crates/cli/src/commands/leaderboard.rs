//! Leaderboard and history commands

use anyhow::Result;

use crate::commands::CommandContext;
use crate::output::colors;

/// Show the current leaderboard
pub async fn show(ctx: &CommandContext) -> Result<()> {
    let board = ctx.service.leaderboard().await?;

    if ctx.is_interactive() {
        println!("{}", colors::bold("🏆 Leaderboard"));
        println!();
    }
    ctx.print(&board)
}

/// Show every stored submission with its accuracy or failure
pub async fn history(ctx: &CommandContext) -> Result<()> {
    let reports = ctx.service.history().await?;

    if ctx.is_interactive() {
        println!("{}", colors::bold("Submissions"));
        println!();
    }
    ctx.print(&reports)?;

    if ctx.is_interactive() {
        let failed = reports.iter().filter(|r| r.status.is_failed()).count();
        if failed > 0 {
            println!();
            println!(
                "{}",
                colors::warning(&format!(
                    "{} submission(s) could not be scored and are left off the leaderboard.",
                    failed
                ))
            );
        }
    }
    Ok(())
}
