//! Application state and dependency injection.
//!
//! This module defines the shared application state that is passed
//! to all route handlers via Axum's state extraction.

use crate::config::ApiConfig;
use async_trait::async_trait;
use leaderboard_application::{
    ApplicationError, LeaderboardService, LeaderboardSnapshot, SubmissionRepository,
};
use leaderboard_domain::{GroundTruth, Leaderboard, Scorer, SubmissionReport};
use leaderboard_infrastructure::InMemorySubmissionRepository;
use std::sync::Arc;
use std::time::Instant;

/// Application state shared across all requests
#[derive(Clone)]
pub struct AppState {
    /// API configuration
    pub config: Arc<ApiConfig>,

    /// Leaderboard service (type-erased)
    pub leaderboard: Arc<dyn LeaderboardServiceTrait>,

    /// Process start, for uptime reporting
    pub started_at: Instant,
}

impl AppState {
    /// Create application state around a leaderboard service
    pub fn new<S>(config: ApiConfig, leaderboard: S) -> Self
    where
        S: LeaderboardServiceTrait + 'static,
    {
        Self {
            config: Arc::new(config),
            leaderboard: Arc::new(leaderboard),
            started_at: Instant::now(),
        }
    }

    /// State backed by an in-memory store, for development and tests
    pub fn in_memory(config: ApiConfig, ground_truth: GroundTruth, scorer: Scorer) -> Self {
        let service = LeaderboardService::new(
            Arc::new(InMemorySubmissionRepository::new()),
            Arc::new(ground_truth),
            scorer,
        );
        Self::new(config, service)
    }

    /// Seconds since the state was created
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

// ============================================================================
// SERVICE TRAITS (Type-erased interfaces for route handlers)
// ============================================================================

/// Type-erased leaderboard service trait
#[async_trait]
pub trait LeaderboardServiceTrait: Send + Sync {
    /// Store and score an uploaded file
    async fn upload(
        &self,
        filename: &str,
        data: &[u8],
    ) -> Result<SubmissionReport, ApplicationError>;

    /// Every stored submission with its outcome
    async fn history(&self) -> Result<Vec<SubmissionReport>, ApplicationError>;

    /// Current ranking
    async fn leaderboard(&self) -> Result<Leaderboard, ApplicationError>;

    /// History and ranking from one listing
    async fn snapshot(&self) -> Result<LeaderboardSnapshot, ApplicationError>;

    /// Remove a submission and rebuild the ranking
    async fn delete(&self, filename: &str) -> Result<Leaderboard, ApplicationError>;

    /// Whether the submission store can be reached
    async fn ready(&self) -> Result<(), ApplicationError>;

    /// Number of ground-truth rows
    fn ground_truth_rows(&self) -> usize;
}

#[async_trait]
impl<R> LeaderboardServiceTrait for LeaderboardService<R>
where
    R: SubmissionRepository + 'static,
{
    async fn upload(
        &self,
        filename: &str,
        data: &[u8],
    ) -> Result<SubmissionReport, ApplicationError> {
        LeaderboardService::upload(self, filename, data).await
    }

    async fn history(&self) -> Result<Vec<SubmissionReport>, ApplicationError> {
        LeaderboardService::history(self).await
    }

    async fn leaderboard(&self) -> Result<Leaderboard, ApplicationError> {
        LeaderboardService::leaderboard(self).await
    }

    async fn snapshot(&self) -> Result<LeaderboardSnapshot, ApplicationError> {
        LeaderboardService::snapshot(self).await
    }

    async fn delete(&self, filename: &str) -> Result<Leaderboard, ApplicationError> {
        LeaderboardService::delete(self, filename).await
    }

    async fn ready(&self) -> Result<(), ApplicationError> {
        self.repository().health_check().await.map_err(Into::into)
    }

    fn ground_truth_rows(&self) -> usize {
        self.ground_truth().len()
    }
}
