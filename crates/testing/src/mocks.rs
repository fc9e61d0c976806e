//! Mock implementations of the submission store.
//!
//! In-memory and instrumented: every call is counted, and failures can be
//! injected to exercise error paths without touching the filesystem.

use async_trait::async_trait;
use leaderboard_application::SubmissionRepository;
use leaderboard_domain::{errors::StoreResult, StoreError, SubmissionName};
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock submission repository for testing
#[derive(Default)]
pub struct MockSubmissionRepository {
    files: Arc<RwLock<BTreeMap<SubmissionName, Vec<u8>>>>,
    vanished: Arc<RwLock<HashSet<SubmissionName>>>,
    list_error: Arc<RwLock<Option<String>>>,
    list_calls: AtomicUsize,
    read_calls: AtomicUsize,
}

impl MockSubmissionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with the given files
    pub fn with_files<'a>(files: impl IntoIterator<Item = (&'a str, Vec<u8>)>) -> Self {
        let repo = Self::new();
        for (name, data) in files {
            repo.insert(name, data);
        }
        repo
    }

    /// Insert a file directly, bypassing the trait
    pub fn insert(&self, name: &str, data: Vec<u8>) {
        let name = SubmissionName::parse(name).expect("valid submission name");
        self.files.write().insert(name, data);
    }

    /// Keep listing `name` but fail reads, as if it was deleted after the listing
    pub fn vanish_on_read(&self, name: &str) {
        let name = SubmissionName::parse(name).expect("valid submission name");
        self.vanished.write().insert(name);
    }

    /// Make every `list` call fail with an I/O error
    pub fn fail_list(&self, message: impl Into<String>) {
        *self.list_error.write() = Some(message.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.read().keys().any(|n| n.as_str() == name)
    }

    pub fn count(&self) -> usize {
        self.files.read().len()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn read_calls(&self) -> usize {
        self.read_calls.load(Ordering::SeqCst)
    }

    pub fn clear(&self) {
        self.files.write().clear();
        self.vanished.write().clear();
    }
}

#[async_trait]
impl SubmissionRepository for MockSubmissionRepository {
    async fn add(&self, name: &SubmissionName, data: &[u8]) -> StoreResult<()> {
        self.vanished.write().remove(name);
        self.files.write().insert(name.clone(), data.to_vec());
        Ok(())
    }

    async fn list(&self) -> StoreResult<Vec<SubmissionName>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.list_error.read().clone() {
            return Err(StoreError::Io(message));
        }
        Ok(self.files.read().keys().cloned().collect())
    }

    async fn read(&self, name: &SubmissionName) -> StoreResult<Vec<u8>> {
        self.read_calls.fetch_add(1, Ordering::SeqCst);
        if self.vanished.read().contains(name) {
            return Err(StoreError::NotFound(name.clone()));
        }
        self.files
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.clone()))
    }

    async fn remove(&self, name: &SubmissionName) -> StoreResult<()> {
        self.vanished.write().remove(name);
        self.files
            .write()
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(name.clone()))
    }
}
