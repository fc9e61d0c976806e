//! Application Services
//!
//! Scoring and ranking orchestration over an injected submission store.

mod leaderboard;

pub use leaderboard::*;

use async_trait::async_trait;
use leaderboard_domain::{errors::StoreResult, SubmissionName};

/// Storage port for submitted prediction files.
///
/// Files are addressed by name and written whole. Adding an existing name
/// replaces its content.
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Store `data` under `name`, replacing any previous content.
    async fn add(&self, name: &SubmissionName, data: &[u8]) -> StoreResult<()>;

    /// Current submission names in lexicographic order.
    async fn list(&self) -> StoreResult<Vec<SubmissionName>>;

    /// Raw content of a stored submission.
    async fn read(&self, name: &SubmissionName) -> StoreResult<Vec<u8>>;

    /// Delete a submission; `StoreError::NotFound` if it is absent.
    async fn remove(&self, name: &SubmissionName) -> StoreResult<()>;

    /// Whether the store is reachable.
    async fn health_check(&self) -> StoreResult<()> {
        self.list().await.map(|_| ())
    }
}
