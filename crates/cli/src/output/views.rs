//! Formatting of leaderboard and submission data

use super::{Formattable, PlainFormatter, TableFormatter};
use crate::config::Config;
use anyhow::Result;
use leaderboard_domain::{Leaderboard, SubmissionReport, SubmissionStatus};

fn outcome(status: &SubmissionStatus) -> String {
    match status {
        SubmissionStatus::Scored { accuracy, .. } => accuracy.to_string(),
        SubmissionStatus::Failed { reason } => format!("❌ failed to read: {}", reason),
    }
}

fn leaderboard_rows(board: &Leaderboard) -> Vec<Vec<String>> {
    board
        .entries()
        .iter()
        .map(|e| {
            vec![
                e.label.to_string(),
                e.filename.to_string(),
                e.accuracy.to_string(),
            ]
        })
        .collect()
}

fn history_rows(reports: &[SubmissionReport]) -> Vec<Vec<String>> {
    reports
        .iter()
        .map(|r| vec![r.filename.to_string(), outcome(&r.status)])
        .collect()
}

impl Formattable for Leaderboard {
    fn format_table(&self) -> Result<String> {
        if self.is_empty() {
            return Ok("No scored submissions yet.".to_string());
        }
        Ok(TableFormatter::simple(
            vec!["Rank", "File", "Accuracy"],
            leaderboard_rows(self),
        ))
    }

    fn format_plain(&self) -> Result<String> {
        Ok(PlainFormatter::rows(&leaderboard_rows(self)))
    }
}

impl Formattable for Vec<SubmissionReport> {
    fn format_table(&self) -> Result<String> {
        if self.is_empty() {
            return Ok("No submissions yet.".to_string());
        }
        Ok(TableFormatter::simple(
            vec!["File", "Accuracy"],
            history_rows(self),
        ))
    }

    fn format_plain(&self) -> Result<String> {
        Ok(PlainFormatter::rows(&history_rows(self)))
    }
}

impl Formattable for SubmissionReport {
    fn format_table(&self) -> Result<String> {
        let mut items = vec![("File", self.filename.to_string())];
        match &self.status {
            SubmissionStatus::Scored { accuracy, rows } => {
                items.push(("Accuracy", accuracy.to_string()));
                items.push(("Rows", rows.to_string()));
            }
            SubmissionStatus::Failed { reason } => {
                items.push(("Status", "failed".to_string()));
                items.push(("Reason", reason.clone()));
            }
        }
        Ok(TableFormatter::key_value(items))
    }

    fn format_plain(&self) -> Result<String> {
        Ok(PlainFormatter::rows(&history_rows(std::slice::from_ref(self))))
    }
}

impl Formattable for Config {
    fn format_table(&self) -> Result<String> {
        Ok(TableFormatter::key_value(vec![
            ("Upload directory", self.upload_dir.display().to_string()),
            ("Ground truth", self.ground_truth_path.display().to_string()),
            ("Length policy", self.length_policy.to_string()),
            ("Output format", self.output_format.to_string()),
        ]))
    }
}
