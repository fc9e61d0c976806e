//! Ground-truth loading.

use crate::{Error, Result};
use leaderboard_domain::GroundTruth;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, instrument};

/// Read and parse the ground-truth CSV at `path`.
///
/// A missing file, an unreadable file, a table without a `match` column and
/// a table without rows are all errors; the caller is expected to treat them
/// as fatal.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub async fn load_ground_truth(path: impl AsRef<Path>) -> Result<GroundTruth> {
    let path = path.as_ref();

    let data = tokio::fs::read(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::GroundTruthMissing(path.to_path_buf()),
        _ => Error::io(path, e),
    })?;

    let truth = GroundTruth::from_csv_bytes(&data, path).map_err(|source| {
        Error::GroundTruthFormat {
            path: path.to_path_buf(),
            source,
        }
    })?;

    info!(rows = truth.len(), "Ground truth loaded");
    Ok(truth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaderboard_domain::DataFormatError;

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_ground_truth(dir.path().join("test_data.csv"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::GroundTruthMissing(_)));
    }

    #[tokio::test]
    async fn test_loads_match_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_data.csv");
        tokio::fs::write(&path, b"id,match\n1,1\n2,0\n").await.unwrap();

        let truth = load_ground_truth(&path).await.unwrap();
        assert_eq!(truth.len(), 2);
        assert_eq!(truth.source(), Some(path.as_path()));
    }

    #[tokio::test]
    async fn test_rejects_table_without_match_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_data.csv");
        tokio::fs::write(&path, b"id,label\n1,1\n").await.unwrap();

        match load_ground_truth(&path).await.unwrap_err() {
            Error::GroundTruthFormat { source, .. } => {
                assert!(matches!(source, DataFormatError::MissingColumn { .. }))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
