//! Prediction leaderboard CLI
//!
//! Command-line interface for scoring and managing leaderboard submissions.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use leaderboard_cli::commands::{leaderboard, score, submissions, CommandContext};
use leaderboard_cli::config::{Config, Overrides};
use leaderboard_cli::output::{Formattable, OutputFormat};
use leaderboard_domain::LengthPolicy;

/// Output format for CLI commands
#[derive(Copy, Clone, Debug, Default, ValueEnum)]
pub enum CliOutputFormat {
    /// JSON output
    Json,
    /// Table output (default)
    #[default]
    Table,
    /// Plain text output
    Plain,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Table => OutputFormat::Table,
            CliOutputFormat::Plain => OutputFormat::Plain,
        }
    }
}

/// Row-count mismatch handling
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CliLengthPolicy {
    /// Reject submissions whose row count differs from the ground truth
    Strict,
    /// Compare only the common prefix
    Truncate,
}

impl From<CliLengthPolicy> for LengthPolicy {
    fn from(p: CliLengthPolicy) -> Self {
        match p {
            CliLengthPolicy::Strict => LengthPolicy::Strict,
            CliLengthPolicy::Truncate => LengthPolicy::Truncate,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "leaderboard")]
#[command(author, version, about = "Prediction leaderboard CLI")]
#[command(long_about = "Command-line interface for the prediction leaderboard.\n\n\
    Score CSV predictions against the ground truth, manage the upload directory \
    and show the ranking.")]
#[command(propagate_version = true)]
struct Cli {
    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value = "table")]
    format: CliOutputFormat,

    /// Upload directory (overrides config)
    #[arg(long, global = true, env = "LEADERBOARD_UPLOAD_DIR")]
    upload_dir: Option<PathBuf>,

    /// Ground-truth CSV (overrides config)
    #[arg(long, global = true, env = "LEADERBOARD_GROUND_TRUTH")]
    ground_truth: Option<PathBuf>,

    /// Row-count mismatch handling (overrides config)
    #[arg(long, global = true, value_enum, env = "LEADERBOARD_LENGTH_POLICY")]
    length_policy: Option<CliLengthPolicy>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a CSV file against the ground truth without storing it
    Score {
        /// Predictions file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Show the leaderboard
    #[command(alias = "lb")]
    Show,

    /// List stored submissions with their accuracy or failure
    #[command(alias = "ls")]
    History,

    /// Add a CSV file to the upload directory
    Add {
        /// Predictions file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Store under this name instead of the file's own name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Remove a stored submission
    #[command(alias = "rm")]
    Remove {
        /// Submission filename
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Show the resolved configuration
    Config,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "leaderboard", &mut std::io::stdout());
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Handle completions command early (doesn't need config)
    if let Commands::Completions { shell } = cli.command {
        generate_completions(shell);
        return Ok(());
    }

    let overrides = Overrides {
        upload_dir: cli.upload_dir,
        ground_truth_path: cli.ground_truth,
        length_policy: cli.length_policy.map(Into::into),
    };
    let mut config = Config::load(overrides)?;
    config.output_format = cli.format.into();

    if let Commands::Config = cli.command {
        println!("{}", config.format(config.output_format)?);
        return Ok(());
    }

    let ctx = CommandContext::new(config).await?;

    match cli.command {
        Commands::Score { file } => score::score(&ctx, &file).await,
        Commands::Show => leaderboard::show(&ctx).await,
        Commands::History => leaderboard::history(&ctx).await,
        Commands::Add { file, name } => submissions::add(&ctx, &file, name).await,
        Commands::Remove { name } => submissions::remove(&ctx, &name).await,
        // Already handled above
        Commands::Config | Commands::Completions { .. } => Ok(()),
    }
}
