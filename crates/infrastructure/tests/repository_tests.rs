//! Integration tests for repository implementations
//!
//! The filesystem repository runs against a temporary upload directory.

use leaderboard_application::{LeaderboardService, SubmissionRepository};
use leaderboard_domain::{Scorer, StoreError};
use leaderboard_infrastructure::{
    ground_truth::load_ground_truth, FsSubmissionRepository, InMemorySubmissionRepository,
};
use leaderboard_testing::fixtures::*;
use std::sync::Arc;

#[tokio::test]
async fn test_fs_add_list_remove_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FsSubmissionRepository::open(dir.path().join("uploads"))
        .await
        .unwrap();

    repo.add(&submission_name("predict_groupB.csv"), &example_group_b_csv())
        .await
        .unwrap();
    repo.add(&submission_name("predict_groupA.csv"), &example_group_a_csv())
        .await
        .unwrap();

    let names = repo.list().await.unwrap();
    assert_eq!(
        names,
        vec![
            submission_name("predict_groupA.csv"),
            submission_name("predict_groupB.csv")
        ]
    );

    repo.remove(&submission_name("predict_groupA.csv"))
        .await
        .unwrap();
    let names = repo.list().await.unwrap();
    assert_eq!(names, vec![submission_name("predict_groupB.csv")]);
}

#[tokio::test]
async fn test_fs_add_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FsSubmissionRepository::new(dir.path());
    let name = submission_name("predict_groupA.csv");

    repo.add(&name, b"first").await.unwrap();
    repo.add(&name, b"second").await.unwrap();

    assert_eq!(repo.read(&name).await.unwrap(), b"second".to_vec());
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_fs_remove_absent_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FsSubmissionRepository::new(dir.path());
    let name = submission_name("predict_groupZ.csv");

    let err = repo.remove(&name).await.unwrap_err();
    assert_eq!(err, StoreError::NotFound(name.clone()));

    let err = repo.read(&name).await.unwrap_err();
    assert_eq!(err, StoreError::NotFound(name));
}

#[tokio::test]
async fn test_fs_stores_name_near_length_limit() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FsSubmissionRepository::new(dir.path());
    let service = LeaderboardService::new(
        Arc::new(repo),
        Arc::new(example_ground_truth()),
        Scorer::default(),
    );
    let long_name = format!("{}.csv", "a".repeat(236));
    assert_eq!(long_name.len(), 240);

    let report = service
        .upload(&long_name, &example_group_a_csv())
        .await
        .unwrap();

    assert_eq!(report.filename.as_str(), long_name);
    assert!(dir.path().join(&long_name).is_file());
    let leftovers: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .filter(|n| n.to_string_lossy().starts_with('.'))
        .collect();
    assert!(leftovers.is_empty());
}

#[tokio::test]
async fn test_service_over_filesystem_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let truth_path = dir.path().join("test_data.csv");
    tokio::fs::write(&truth_path, example_ground_truth_csv())
        .await
        .unwrap();

    let truth = load_ground_truth(&truth_path).await.unwrap();
    let repo = FsSubmissionRepository::open(dir.path().join("uploads"))
        .await
        .unwrap();
    let service = LeaderboardService::new(Arc::new(repo), Arc::new(truth), Scorer::default());

    service
        .upload("predict_groupB.csv", &example_group_b_csv())
        .await
        .unwrap();
    service
        .upload("predict_groupA.csv", &example_group_a_csv())
        .await
        .unwrap();
    service
        .upload("predict_groupC.csv", &example_group_c_csv())
        .await
        .unwrap();

    let snapshot = service.snapshot().await.unwrap();
    assert_eq!(snapshot.submissions.len(), 3);
    assert!(snapshot.submissions[2].status.is_failed());

    let labels: Vec<_> = snapshot
        .leaderboard
        .entries()
        .iter()
        .map(|e| (e.label.to_string(), e.filename.to_string()))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("🥇 1".to_string(), "predict_groupA.csv".to_string()),
            ("🥈 2".to_string(), "predict_groupB.csv".to_string()),
        ]
    );

    let board = service.delete("predict_groupA.csv").await.unwrap();
    assert_eq!(board.len(), 1);
    assert_eq!(board.entries()[0].filename.as_str(), "predict_groupB.csv");
}

#[tokio::test]
async fn test_in_memory_matches_filesystem_semantics() {
    let repo = InMemorySubmissionRepository::new();
    let name = submission_name("predict_groupA.csv");

    repo.add(&name, &example_group_a_csv()).await.unwrap();
    assert_eq!(repo.list().await.unwrap(), vec![name.clone()]);

    repo.remove(&name).await.unwrap();
    assert!(repo.list().await.unwrap().is_empty());
    assert!(matches!(
        repo.remove(&name).await,
        Err(StoreError::NotFound(_))
    ));
}
