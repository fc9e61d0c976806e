//! Leaderboard ranking.
//!
//! Scored submissions are ordered by accuracy, highest first. The sort is
//! stable, so equal accuracies keep the order they were supplied in, which
//! for a store listing is filename order.

use crate::scoring::Accuracy;
use crate::submission::{SubmissionName, SubmissionReport};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Display label for a 1-based rank; the podium gets a medal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RankLabel(u32);

impl RankLabel {
    /// Label for `rank`.
    pub fn new(rank: u32) -> Self {
        Self(rank)
    }

    /// The underlying rank.
    pub fn rank(&self) -> u32 {
        self.0
    }

    /// Medal for ranks 1 to 3.
    pub fn medal(&self) -> Option<&'static str> {
        match self.0 {
            1 => Some("🥇"),
            2 => Some("🥈"),
            3 => Some("🥉"),
            _ => None,
        }
    }
}

impl fmt::Display for RankLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.medal() {
            Some(medal) => write!(f, "{} {}", medal, self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

impl Serialize for RankLabel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RankLabel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let digits = raw.rsplit(' ').next().unwrap_or_default();
        digits
            .parse::<u32>()
            .map(Self)
            .map_err(|_| serde::de::Error::custom(format!("invalid rank label '{}'", raw)))
    }
}

/// One ranked row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: u32,
    /// Rank with medal for the podium
    pub label: RankLabel,
    /// Submission filename
    pub filename: SubmissionName,
    /// Accuracy against the ground truth
    pub accuracy: Accuracy,
}

/// Ranked submissions, rank 1 first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
    generated_at: DateTime<Utc>,
}

impl Leaderboard {
    /// Rank scored submissions by descending accuracy.
    ///
    /// Input order is the tie-break.
    pub fn rank<I>(scored: I) -> Self
    where
        I: IntoIterator<Item = (SubmissionName, Accuracy)>,
    {
        let mut scored: Vec<_> = scored.into_iter().collect();
        scored.sort_by(|(_, a), (_, b)| a.cmp_desc(b));

        let entries = scored
            .into_iter()
            .zip(1u32..)
            .map(|((filename, accuracy), rank)| LeaderboardEntry {
                rank,
                label: RankLabel::new(rank),
                filename,
                accuracy,
            })
            .collect();

        Self {
            entries,
            generated_at: Utc::now(),
        }
    }

    /// Rank the scored reports; failed reports are left out.
    pub fn from_reports<'a, I>(reports: I) -> Self
    where
        I: IntoIterator<Item = &'a SubmissionReport>,
    {
        Self::rank(reports.into_iter().filter_map(|report| {
            report
                .status
                .accuracy()
                .map(|accuracy| (report.filename.clone(), accuracy))
        }))
    }

    /// Entries in rank order.
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Number of ranked submissions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was ranked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// When this leaderboard was computed.
    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Entry for a given filename, if it was ranked.
    pub fn find(&self, filename: &SubmissionName) -> Option<&LeaderboardEntry> {
        self.entries.iter().find(|e| &e.filename == filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Scorer;
    use crate::table::{GroundTruth, MatchColumn};

    fn name(s: &str) -> SubmissionName {
        SubmissionName::parse(s).unwrap()
    }

    fn accuracy(predictions: &[&str], truth: &[&str]) -> Accuracy {
        Scorer::default()
            .score(
                &MatchColumn::from_cells(predictions),
                &GroundTruth::new(MatchColumn::from_cells(truth)),
            )
            .unwrap()
    }

    #[test]
    fn test_rank_labels() {
        assert_eq!(RankLabel::new(1).to_string(), "🥇 1");
        assert_eq!(RankLabel::new(2).to_string(), "🥈 2");
        assert_eq!(RankLabel::new(3).to_string(), "🥉 3");
        assert_eq!(RankLabel::new(4).to_string(), "4");
        assert_eq!(RankLabel::new(12).to_string(), "12");
    }

    #[test]
    fn test_rank_label_serde() {
        let json = serde_json::to_string(&RankLabel::new(2)).unwrap();
        assert_eq!(json, "\"🥈 2\"");
        let back: RankLabel = serde_json::from_str(&json).unwrap();
        assert_eq!(back.rank(), 2);
    }

    #[test]
    fn test_ranks_descending() {
        let truth = ["1", "0", "1", "1"];
        let board = Leaderboard::rank(vec![
            (name("a.csv"), accuracy(&["0", "1", "0", "0"], &truth)),
            (name("b.csv"), accuracy(&["1", "0", "1", "1"], &truth)),
            (name("c.csv"), accuracy(&["1", "0", "0", "0"], &truth)),
        ]);

        let order: Vec<_> = board.entries().iter().map(|e| e.filename.as_str()).collect();
        assert_eq!(order, vec!["b.csv", "c.csv", "a.csv"]);
        assert_eq!(
            board.entries().iter().map(|e| e.rank).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_ties_keep_input_order() {
        let truth = ["1", "0", "1", "1"];
        let board = Leaderboard::rank(vec![
            (name("predict_groupA.csv"), accuracy(&["1", "0", "0", "1"], &truth)),
            (name("predict_groupB.csv"), accuracy(&["1", "1", "1", "1"], &truth)),
        ]);

        assert_eq!(board.entries()[0].filename.as_str(), "predict_groupA.csv");
        assert_eq!(board.entries()[1].filename.as_str(), "predict_groupB.csv");
        assert_eq!(board.entries()[0].accuracy.value(), 0.75);
        assert_eq!(board.entries()[1].accuracy.value(), 0.75);
        assert_eq!(board.entries()[1].label.to_string(), "🥈 2");
    }

    #[test]
    fn test_failed_reports_are_excluded() {
        let truth = ["1", "0"];
        let reports = vec![
            SubmissionReport::scored(name("a.csv"), accuracy(&["1", "0"], &truth), 2),
            SubmissionReport::failed(name("b.csv"), "missing required column 'match'"),
        ];

        let board = Leaderboard::from_reports(&reports);
        assert_eq!(board.len(), 1);
        assert!(board.find(&name("b.csv")).is_none());
        assert_eq!(board.find(&name("a.csv")).unwrap().rank, 1);
    }

    #[test]
    fn test_empty_leaderboard() {
        let board = Leaderboard::rank(Vec::<(SubmissionName, Accuracy)>::new());
        assert!(board.is_empty());
    }
}
