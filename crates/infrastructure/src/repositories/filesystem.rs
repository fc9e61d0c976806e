//! Filesystem-backed submission repository.
//!
//! One file per submission, named by the submission name, directly inside
//! the upload directory. Writes go to a hidden temporary file first and are
//! renamed into place, so a concurrent reader never sees a partial upload.

use crate::{Error, Result};
use async_trait::async_trait;
use leaderboard_application::SubmissionRepository;
use leaderboard_domain::{errors::StoreResult, StoreError, SubmissionName};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Submission repository over a local upload directory
#[derive(Debug, Clone)]
pub struct FsSubmissionRepository {
    root: PathBuf,
}

impl FsSubmissionRepository {
    /// Repository rooted at `root`; the directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Repository rooted at `root`, creating the directory if absent.
    #[instrument(skip_all, fields(root = %root.as_ref().display()))]
    pub async fn open(root: impl AsRef<Path>) -> Result<Self> {
        let repo = Self::new(root.as_ref());
        tokio::fs::create_dir_all(&repo.root)
            .await
            .map_err(|e| Error::io(&repo.root, e))?;
        debug!("Upload directory ready");
        Ok(repo)
    }

    /// The upload directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, name: &SubmissionName) -> PathBuf {
        self.root.join(name.as_str())
    }

    /// Hidden temp file; independent of the submission name so a name at
    /// the length limit still fits.
    fn temp_path(&self) -> PathBuf {
        self.root
            .join(format!(".upload-{}.tmp", uuid::Uuid::new_v4()))
    }
}

fn store_io(context: &str, path: &Path, err: std::io::Error) -> StoreError {
    StoreError::Io(format!("{} {}: {}", context, path.display(), err))
}

#[async_trait]
impl SubmissionRepository for FsSubmissionRepository {
    #[instrument(skip(self, name, data), fields(filename = %name, bytes = data.len()))]
    async fn add(&self, name: &SubmissionName, data: &[u8]) -> StoreResult<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| store_io("failed to create", &self.root, e))?;

        let temp = self.temp_path();
        let target = self.path_for(name);

        if let Err(e) = tokio::fs::write(&temp, data).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(store_io("failed to write", &temp, e));
        }
        if let Err(e) = tokio::fs::rename(&temp, &target).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(store_io("failed to move into place", &target, e));
        }

        debug!("Submission stored");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self) -> StoreResult<Vec<SubmissionName>> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(store_io("failed to list", &self.root, e)),
        };

        let mut names = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| store_io("failed to list", &self.root, e))?
        {
            let is_file = match entry.file_type().await {
                Ok(file_type) => file_type.is_file(),
                // Removed between read_dir and stat.
                Err(_) => false,
            };
            if !is_file {
                continue;
            }

            let Some(raw) = entry.file_name().to_str().map(str::to_owned) else {
                warn!(path = %entry.path().display(), "Skipping non UTF-8 filename");
                continue;
            };
            if raw.starts_with('.') {
                continue;
            }
            match SubmissionName::parse(raw) {
                Ok(name) => names.push(name),
                Err(e) => warn!(error = %e, "Skipping unaddressable file"),
            }
        }

        names.sort();
        debug!(count = names.len(), "Listed submissions");
        Ok(names)
    }

    #[instrument(skip(self, name), fields(filename = %name))]
    async fn read(&self, name: &SubmissionName) -> StoreResult<Vec<u8>> {
        let path = self.path_for(name);
        tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound(name.clone()),
            _ => store_io("failed to read", &path, e),
        })
    }

    #[instrument(skip(self, name), fields(filename = %name))]
    async fn remove(&self, name: &SubmissionName) -> StoreResult<()> {
        let path = self.path_for(name);
        tokio::fs::remove_file(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::NotFound(name.clone()),
            _ => store_io("failed to remove", &path, e),
        })?;
        debug!("Submission removed");
        Ok(())
    }

    async fn health_check(&self) -> StoreResult<()> {
        match tokio::fs::metadata(&self.root).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(StoreError::Io(format!(
                "{} is not a directory",
                self.root.display()
            ))),
            Err(e) => Err(store_io("cannot access", &self.root, e)),
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
    async fn test_open_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("uploads");

        let repo = FsSubmissionRepository::open(&root).await.unwrap();

        assert!(root.is_dir());
        assert!(repo.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_list_missing_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let repo = FsSubmissionRepository::new(dir.path().join("absent"));

        assert!(repo.list().await.unwrap().is_empty());
        assert!(repo.health_check().await.is_err());
    }

    #[tokio::test]
    async fn test_add_creates_directory_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("uploads");
        let repo = FsSubmissionRepository::new(&root);

        repo.add(&name("a.csv"), b"match\n1\n").await.unwrap();

        let files: Vec<_> = std::fs::read_dir(&root)
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(files, vec!["a.csv".to_string()]);
    }

    #[tokio::test]
    async fn test_hidden_and_directory_entries_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".a.csv.tmp"), b"partial").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("b.csv"), b"match\n1\n").unwrap();

        let repo = FsSubmissionRepository::new(dir.path());
        let names = repo.list().await.unwrap();

        assert_eq!(names, vec![name("b.csv")]);
    }
}
