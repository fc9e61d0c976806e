//! CLI command tests against a temporary upload directory

use leaderboard_application::SubmissionRepository;
use leaderboard_cli::commands::{leaderboard, score, submissions, CommandContext};
use leaderboard_cli::{Config, OutputFormat};
use leaderboard_domain::LengthPolicy;
use leaderboard_testing::fixtures::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("test_data.csv"), example_ground_truth_csv()).unwrap();
        Self { dir }
    }

    fn file(&self, name: &str, data: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, data).unwrap();
        path
    }

    fn config(&self) -> Config {
        Config {
            upload_dir: self.dir.path().join("uploads"),
            ground_truth_path: self.dir.path().join("test_data.csv"),
            length_policy: LengthPolicy::Strict,
            output_format: OutputFormat::Plain,
        }
    }

    async fn context(&self) -> CommandContext {
        CommandContext::new(self.config()).await.unwrap()
    }
}

#[tokio::test]
async fn test_missing_ground_truth_fails_context() {
    let ws = Workspace::new();
    let mut config = ws.config();
    config.ground_truth_path = ws.dir.path().join("absent.csv");

    let err = CommandContext::new(config).await.err().unwrap();
    assert!(err.to_string().contains("Failed to load ground truth"));
}

#[tokio::test]
async fn test_score_does_not_store() {
    let ws = Workspace::new();
    let ctx = ws.context().await;
    let path = ws.file("predict_groupA.csv", &example_group_a_csv());

    let report = score::score_file(&ctx, &path).await.unwrap();

    assert_eq!(report.status.accuracy().unwrap().value(), 0.75);
    assert!(ctx.service.repository().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_score_fails_for_unscorable_file() {
    let ws = Workspace::new();
    let ctx = ws.context().await;
    let path = ws.file("predict_groupC.csv", &example_group_c_csv());

    assert!(score::score(&ctx, &path).await.is_err());
}

#[tokio::test]
async fn test_add_show_remove_cycle() {
    let ws = Workspace::new();
    let ctx = ws.context().await;
    let a = ws.file("predict_groupA.csv", &example_group_a_csv());
    let b = ws.file("local_b.csv", &example_group_b_csv());

    submissions::add(&ctx, &a, None).await.unwrap();
    submissions::add(&ctx, &b, Some("predict_groupB.csv".to_string()))
        .await
        .unwrap();
    leaderboard::show(&ctx).await.unwrap();
    leaderboard::history(&ctx).await.unwrap();

    let board = ctx.service.leaderboard().await.unwrap();
    let names: Vec<_> = board.entries().iter().map(|e| e.filename.to_string()).collect();
    assert_eq!(names, vec!["predict_groupA.csv", "predict_groupB.csv"]);

    submissions::remove(&ctx, "predict_groupA.csv").await.unwrap();
    assert!(ws.dir.path().join("uploads/predict_groupB.csv").exists());
    assert!(!ws.dir.path().join("uploads/predict_groupA.csv").exists());
}

#[tokio::test]
async fn test_remove_absent_submission_errors() {
    let ws = Workspace::new();
    let ctx = ws.context().await;

    let err = submissions::remove(&ctx, "predict_groupZ.csv").await.unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn test_add_rejects_non_csv_name() {
    let ws = Workspace::new();
    let ctx = ws.context().await;
    let path = ws.file("notes.txt", b"match\n1\n");

    assert!(submissions::add(&ctx, &path, None).await.is_err());
    assert!(!Path::new(&ws.dir.path().join("uploads/notes.txt")).exists());
}
