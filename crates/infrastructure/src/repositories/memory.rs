//! In-memory submission repository.

use async_trait::async_trait;
use leaderboard_application::SubmissionRepository;
use leaderboard_domain::{errors::StoreResult, StoreError, SubmissionName};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::debug;

/// Submission repository that keeps everything in process memory.
///
/// Contents are lost on drop. Names iterate in sorted order, matching the
/// filesystem repository.
#[derive(Debug, Default)]
pub struct InMemorySubmissionRepository {
    files: RwLock<BTreeMap<SubmissionName, Vec<u8>>>,
}

impl InMemorySubmissionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.files.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.read().is_empty()
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn add(&self, name: &SubmissionName, data: &[u8]) -> StoreResult<()> {
        let replaced = self
            .files
            .write()
            .insert(name.clone(), data.to_vec())
            .is_some();
        debug!(filename = %name, replaced, "Submission stored in memory");
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<SubmissionName>> {
        Ok(self.files.read().keys().cloned().collect())
    }

    async fn read(&self, name: &SubmissionName) -> StoreResult<Vec<u8>> {
        self.files
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.clone()))
    }

    async fn remove(&self, name: &SubmissionName) -> StoreResult<()> {
        match self.files.write().remove(name) {
            Some(_) => Ok(()),
            None => Err(StoreError::NotFound(name.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> SubmissionName {
        SubmissionName::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_list_is_sorted() {
        let repo = InMemorySubmissionRepository::new();
        repo.add(&name("b.csv"), b"").await.unwrap();
        repo.add(&name("a.csv"), b"").await.unwrap();

        assert_eq!(repo.list().await.unwrap(), vec![name("a.csv"), name("b.csv")]);
    }

    #[tokio::test]
    async fn test_remove_twice_is_not_found() {
        let repo = InMemorySubmissionRepository::new();
        repo.add(&name("a.csv"), b"match\n1\n").await.unwrap();

        repo.remove(&name("a.csv")).await.unwrap();
        let err = repo.remove(&name("a.csv")).await.unwrap_err();

        assert_eq!(err, StoreError::NotFound(name("a.csv")));
        assert!(repo.is_empty());
    }
}
