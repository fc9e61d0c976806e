//! Property tests for scoring and ranking.

use leaderboard_domain::{
    GroundTruth, Leaderboard, LengthPolicy, MatchColumn, RankLabel, Scorer, SubmissionName,
};
use proptest::prelude::*;

fn labels() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..3, 1..64)
}

fn column(values: &[u8]) -> MatchColumn {
    MatchColumn::from_cells(values.iter().map(|v| v.to_string()))
}

proptest! {
    #[test]
    fn accuracy_is_fraction_of_equal_positions(
        pairs in prop::collection::vec((0u8..3, 0u8..3), 1..64)
    ) {
        let (predicted, expected): (Vec<u8>, Vec<u8>) = pairs.iter().copied().unzip();
        let agreeing = pairs.iter().filter(|(p, e)| p == e).count();

        let accuracy = Scorer::new(LengthPolicy::Strict)
            .score(&column(&predicted), &GroundTruth::new(column(&expected)))
            .unwrap();

        prop_assert!((0.0..=1.0).contains(&accuracy.value()));
        prop_assert!((accuracy.value() - agreeing as f64 / pairs.len() as f64).abs() < 1e-12);
    }

    #[test]
    fn identical_columns_score_one(values in labels()) {
        let accuracy = Scorer::default()
            .score(&column(&values), &GroundTruth::new(column(&values)))
            .unwrap();
        prop_assert_eq!(accuracy.value(), 1.0);
    }

    #[test]
    fn never_agreeing_columns_score_zero(values in labels()) {
        let shifted: Vec<u8> = values.iter().map(|v| v + 10).collect();
        let accuracy = Scorer::default()
            .score(&column(&shifted), &GroundTruth::new(column(&values)))
            .unwrap();
        prop_assert_eq!(accuracy.value(), 0.0);
    }

    #[test]
    fn truncate_scores_common_prefix(values in labels(), extra in labels()) {
        let mut longer = values.clone();
        longer.extend(extra);

        let scorer = Scorer::new(LengthPolicy::Truncate);
        let (accuracy, rows) = scorer
            .score_with_rows(&column(&longer), &GroundTruth::new(column(&values)))
            .unwrap();
        prop_assert_eq!(rows, values.len());
        prop_assert_eq!(accuracy.value(), 1.0);

        prop_assert!(Scorer::new(LengthPolicy::Strict)
            .score(&column(&longer), &GroundTruth::new(column(&values)))
            .is_err());
    }

    #[test]
    fn ranking_is_stable_and_descending(
        submissions in prop::collection::vec(prop::collection::vec(0u8..2, 4), 0..20)
    ) {
        let truth = GroundTruth::new(column(&[1, 0, 1, 1]));
        let scorer = Scorer::default();
        let scored: Vec<_> = submissions
            .iter()
            .enumerate()
            .map(|(i, values)| {
                let name = SubmissionName::parse(format!("predict_group{:02}.csv", i)).unwrap();
                (name, scorer.score(&column(values), &truth).unwrap())
            })
            .collect();

        let board = Leaderboard::rank(scored.clone());
        prop_assert_eq!(board.len(), scored.len());

        for (position, pair) in board.entries().windows(2).enumerate() {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.accuracy.value() >= b.accuracy.value());
            if a.accuracy.value() == b.accuracy.value() {
                prop_assert!(a.filename < b.filename, "tie at {} broke input order", position);
            }
        }

        for (index, entry) in board.entries().iter().enumerate() {
            prop_assert_eq!(entry.rank as usize, index + 1);
            prop_assert_eq!(entry.label, RankLabel::new(entry.rank));
        }
    }

    #[test]
    fn labels_below_podium_are_plain_numbers(rank in 4u32..10_000) {
        prop_assert_eq!(RankLabel::new(rank).to_string(), rank.to_string());
    }
}

#[test]
fn submission_without_match_column_is_left_out() {
    use leaderboard_domain::SubmissionReport;

    let truth = GroundTruth::from_csv_bytes(b"id,match\n1,1\n2,0\n3,1\n4,1\n", "test_data.csv")
        .unwrap();
    let scorer = Scorer::default();
    let files: [(&str, &[u8]); 3] = [
        ("predict_groupA.csv", b"id,match\n1,1\n2,0\n3,0\n4,1\n"),
        ("predict_groupB.csv", b"id,match\n1,1\n2,1\n3,1\n4,1\n"),
        ("predict_groupC.csv", b"id,prediction\n1,1\n2,0\n3,1\n4,1\n"),
    ];

    let reports: Vec<_> = files
        .iter()
        .map(|(name, data)| {
            let name = SubmissionName::parse(*name).unwrap();
            match scorer.score_csv(data, &truth) {
                Ok((accuracy, rows)) => SubmissionReport::scored(name, accuracy, rows),
                Err(e) => SubmissionReport::failed(name, e.to_string()),
            }
        })
        .collect();

    assert!(reports[2].status.is_failed());

    let board = Leaderboard::from_reports(&reports);
    let names: Vec<_> = board.entries().iter().map(|e| e.filename.as_str()).collect();
    assert_eq!(names, vec!["predict_groupA.csv", "predict_groupB.csv"]);
    assert_eq!(board.entries()[0].label.to_string(), "🥇 1");
    assert_eq!(board.entries()[1].label.to_string(), "🥈 2");
    assert_eq!(board.entries()[0].accuracy.to_string(), "0.7500");
}
