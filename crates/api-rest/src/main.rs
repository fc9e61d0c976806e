//! Prediction leaderboard server
//!
//! Loads configuration and the ground truth, then serves the leaderboard
//! page and JSON API until interrupted.

use anyhow::{Context, Result};
use leaderboard_api_rest::{create_app, ApiConfig, AppState};
use leaderboard_application::LeaderboardService;
use leaderboard_common::{init_from_config, AppConfig};
use leaderboard_domain::Scorer;
use leaderboard_infrastructure::{ground_truth::load_ground_truth, FsSubmissionRepository};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    init_from_config(&config.telemetry)?;

    info!(
        service = %config.telemetry.service_name,
        version = env!("CARGO_PKG_VERSION"),
        "Starting prediction leaderboard server"
    );

    let ground_truth = match load_ground_truth(&config.storage.ground_truth_path).await {
        Ok(truth) => truth,
        Err(e) => {
            error!(error = %e, "Cannot start without ground truth");
            return Err(e.into());
        }
    };

    let repository = FsSubmissionRepository::open(&config.storage.upload_dir)
        .await
        .context("Failed to prepare upload directory")?;

    let scorer = Scorer::new(config.scoring.length_policy);
    info!(
        ground_truth_rows = ground_truth.len(),
        upload_dir = %config.storage.upload_dir.display(),
        length_policy = %scorer.policy(),
        "Leaderboard configured"
    );

    let service = LeaderboardService::new(Arc::new(repository), Arc::new(ground_truth), scorer);
    let api_config = ApiConfig::from_app_config(&config);
    let address = api_config.server_address();
    let app = create_app(AppState::new(api_config, service));

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!(address = %address, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal");
}
