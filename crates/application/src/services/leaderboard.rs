//! Leaderboard Service
//!
//! Uploading, scoring, ranking and deleting submissions. Every read rescores
//! the store from scratch; nothing derived is cached between calls.

use super::SubmissionRepository;
use crate::ApplicationResult;
use leaderboard_domain::{
    GroundTruth, Leaderboard, Scorer, SubmissionName, SubmissionReport, ValidationError,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Submission history and the leaderboard derived from it in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardSnapshot {
    /// Every stored submission in filename order, failures included
    pub submissions: Vec<SubmissionReport>,
    /// Scored submissions ranked by accuracy
    pub leaderboard: Leaderboard,
}

/// Scores stored submissions against the ground truth and ranks them.
pub struct LeaderboardService<R>
where
    R: SubmissionRepository,
{
    repository: Arc<R>,
    ground_truth: Arc<GroundTruth>,
    scorer: Scorer,
}

impl<R> Clone for LeaderboardService<R>
where
    R: SubmissionRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            ground_truth: Arc::clone(&self.ground_truth),
            scorer: self.scorer,
        }
    }
}

impl<R> LeaderboardService<R>
where
    R: SubmissionRepository,
{
    pub fn new(repository: Arc<R>, ground_truth: Arc<GroundTruth>, scorer: Scorer) -> Self {
        Self {
            repository,
            ground_truth,
            scorer,
        }
    }

    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    pub fn ground_truth(&self) -> &GroundTruth {
        &self.ground_truth
    }

    pub fn scorer(&self) -> Scorer {
        self.scorer
    }

    /// Store an uploaded file and report how it scores.
    ///
    /// The file is kept even when it cannot be scored; the failure shows up
    /// in the returned report and in the history.
    #[instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn upload(&self, filename: &str, data: &[u8]) -> ApplicationResult<SubmissionReport> {
        let name = SubmissionName::parse(filename)?;
        if !name.is_csv() {
            return Err(ValidationError::UnsupportedFileType(name.to_string()).into());
        }

        self.repository.add(&name, data).await?;
        let report = self.score_bytes(name, data);

        match report.status.accuracy() {
            Some(accuracy) => {
                info!(filename = %report.filename, accuracy = accuracy.value(), "Submission uploaded")
            }
            None => warn!(filename = %report.filename, "Submission uploaded but could not be scored"),
        }

        Ok(report)
    }

    /// Read and score one stored submission.
    ///
    /// Read failures, including the file vanishing after it was listed, are
    /// reported as a failed submission rather than an error.
    #[instrument(skip(self, name), fields(filename = %name))]
    pub async fn score_submission(&self, name: &SubmissionName) -> SubmissionReport {
        match self.repository.read(name).await {
            Ok(data) => self.score_bytes(name.clone(), &data),
            Err(e) => {
                warn!(error = %e, "Failed to read submission");
                SubmissionReport::failed(name.clone(), e.to_string())
            }
        }
    }

    /// Score raw CSV bytes without touching the store.
    pub fn score_bytes(&self, name: SubmissionName, data: &[u8]) -> SubmissionReport {
        match self.scorer.score_csv(data, &self.ground_truth) {
            Ok((accuracy, rows)) => SubmissionReport::scored(name, accuracy, rows),
            Err(e) => {
                debug!(filename = %name, error = %e, "Submission failed to score");
                SubmissionReport::failed(name, e.to_string())
            }
        }
    }

    /// Every stored submission with its accuracy or failure, in filename order.
    #[instrument(skip(self))]
    pub async fn history(&self) -> ApplicationResult<Vec<SubmissionReport>> {
        let names = self.repository.list().await?;
        let mut reports = Vec::with_capacity(names.len());
        for name in &names {
            reports.push(self.score_submission(name).await);
        }
        debug!(count = reports.len(), "Scored submission history");
        Ok(reports)
    }

    /// Ranked leaderboard of every submission that scored.
    #[instrument(skip(self))]
    pub async fn leaderboard(&self) -> ApplicationResult<Leaderboard> {
        let history = self.history().await?;
        Ok(Leaderboard::from_reports(&history))
    }

    /// History and leaderboard computed from a single listing of the store.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> ApplicationResult<LeaderboardSnapshot> {
        let submissions = self.history().await?;
        let leaderboard = Leaderboard::from_reports(&submissions);
        Ok(LeaderboardSnapshot {
            submissions,
            leaderboard,
        })
    }

    /// Delete a submission and return the rebuilt leaderboard.
    #[instrument(skip(self))]
    pub async fn delete(&self, filename: &str) -> ApplicationResult<Leaderboard> {
        let name = SubmissionName::parse(filename)?;
        self.repository.remove(&name).await?;
        info!(filename = %name, "Submission deleted");
        self.rebuild().await
    }

    /// Recompute the leaderboard after a mutation of the store.
    pub async fn rebuild(&self) -> ApplicationResult<Leaderboard> {
        let leaderboard = self.leaderboard().await?;
        debug!(entries = leaderboard.len(), "Leaderboard rebuilt");
        Ok(leaderboard)
    }
}
