//! Server-rendered HTML for the leaderboard page.

use leaderboard_application::LeaderboardSnapshot;
use leaderboard_domain::{SubmissionReport, SubmissionStatus, MATCH_COLUMN};

/// Severity of a notice shown above the upload form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// The action succeeded
    Success,
    /// The action succeeded with a caveat, or had nothing to do
    Warning,
    /// The action was rejected
    Error,
}

impl NoticeLevel {
    fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "notice success",
            Self::Warning => "notice warning",
            Self::Error => "notice error",
        }
    }
}

/// One-off message shown after an upload or delete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity
    pub level: NoticeLevel,
    /// Plain-text message; escaped when rendered
    pub message: String,
}

impl Notice {
    /// Success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Warning notice
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    /// Error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Notice describing a freshly uploaded submission
    pub fn for_upload(report: &SubmissionReport) -> Self {
        match &report.status {
            SubmissionStatus::Scored { accuracy, .. } => Self::success(format!(
                "Uploaded {}: accuracy {}",
                report.filename, accuracy
            )),
            SubmissionStatus::Failed { reason } => Self::warning(format!(
                "Uploaded {}, but it could not be scored: {}",
                report.filename, reason
            )),
        }
    }
}

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:2rem auto;max-width:56rem;padding:0 1rem;color:#222}\
table{border-collapse:collapse;width:100%}th,td{border-bottom:1px solid #ddd;padding:.4rem .6rem;text-align:left}\
td.num{text-align:right;font-variant-numeric:tabular-nums}.notice{padding:.6rem 1rem;border-radius:4px;margin:1rem 0}\
.success{background:#e6f4ea}.warning{background:#fef7e0}.error{background:#fce8e6}.failed{color:#b3261e}\
form.inline{display:inline;margin:0}.instructions{background:#f5f5f5;padding:.5rem 1rem;border-radius:4px}";

/// Render the full page: instructions, upload form, history and leaderboard.
pub fn render_page(
    snapshot: &LeaderboardSnapshot,
    ground_truth_rows: usize,
    notice: Option<&Notice>,
) -> String {
    let mut page = String::with_capacity(4096);

    page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    page.push_str("<title>Prediction Leaderboard</title>\n");
    page.push_str(&format!("<style>{}</style>\n</head>\n<body>\n", STYLE));
    page.push_str("<h1>🏆 Prediction Leaderboard</h1>\n");

    page.push_str(&format!(
        "<section class=\"instructions\">\n<h2>How to submit</h2>\n<ul>\n\
         <li>Name your file <code>predict_group&lt;X&gt;.csv</code>, for example <code>predict_groupA.csv</code>.</li>\n\
         <li>Put your predictions in a column named <code>{column}</code>, one row per test row, \
         in the same order as the test data ({rows} rows).</li>\n\
         <li>Uploading a file with an existing name replaces it.</li>\n</ul>\n</section>\n",
        column = MATCH_COLUMN,
        rows = ground_truth_rows,
    ));

    if let Some(notice) = notice {
        page.push_str(&format!(
            "<div class=\"{}\" role=\"status\">{}</div>\n",
            notice.level.css_class(),
            escape(&notice.message)
        ));
    }

    page.push_str(
        "<section>\n<h2>Upload</h2>\n\
         <form action=\"/upload\" method=\"post\" enctype=\"multipart/form-data\">\n\
         <input type=\"file\" name=\"file\" accept=\".csv\" required>\n\
         <button type=\"submit\">Upload</button>\n</form>\n</section>\n",
    );

    page.push_str("<section>\n<h2>Submissions</h2>\n");
    render_history(&mut page, &snapshot.submissions);
    page.push_str("</section>\n");

    page.push_str("<section>\n<h2>Leaderboard</h2>\n");
    render_leaderboard(&mut page, snapshot);
    page.push_str("</section>\n</body>\n</html>\n");

    page
}

fn render_history(page: &mut String, submissions: &[SubmissionReport]) {
    if submissions.is_empty() {
        page.push_str("<p>No submissions yet.</p>\n");
        return;
    }

    page.push_str("<table>\n<thead><tr><th>File</th><th>Accuracy</th><th></th></tr></thead>\n<tbody>\n");
    for report in submissions {
        let filename = escape(report.filename.as_str());
        let outcome = match &report.status {
            SubmissionStatus::Scored { accuracy, .. } => {
                format!("<td class=\"num\">{}</td>", accuracy)
            }
            SubmissionStatus::Failed { reason } => format!(
                "<td class=\"failed\">❌ failed to read: {}</td>",
                escape(reason)
            ),
        };
        page.push_str(&format!(
            "<tr><td>{filename}</td>{outcome}<td>\
             <form class=\"inline\" action=\"/delete\" method=\"post\">\
             <input type=\"hidden\" name=\"filename\" value=\"{filename}\">\
             <button type=\"submit\">🗑 Delete</button></form></td></tr>\n",
        ));
    }
    page.push_str("</tbody>\n</table>\n");
}

fn render_leaderboard(page: &mut String, snapshot: &LeaderboardSnapshot) {
    if snapshot.leaderboard.is_empty() {
        page.push_str("<p>No scored submissions yet.</p>\n");
        return;
    }

    page.push_str("<table>\n<thead><tr><th>Rank</th><th>File</th><th>Accuracy</th></tr></thead>\n<tbody>\n");
    for entry in snapshot.leaderboard.entries() {
        page.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td class=\"num\">{}</td></tr>\n",
            entry.label,
            escape(entry.filename.as_str()),
            entry.accuracy
        ));
    }
    page.push_str("</tbody>\n</table>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use leaderboard_domain::{
        GroundTruth, Leaderboard, MatchColumn, Scorer, SubmissionName,
    };

    fn snapshot() -> LeaderboardSnapshot {
        let truth = GroundTruth::new(MatchColumn::from_cells(["1", "0"]));
        let accuracy = Scorer::default()
            .score(&MatchColumn::from_cells(["1", "1"]), &truth)
            .unwrap();
        let submissions = vec![
            SubmissionReport::scored(SubmissionName::parse("a<b>.csv").unwrap(), accuracy, 2),
            SubmissionReport::failed(
                SubmissionName::parse("c.csv").unwrap(),
                "missing required column 'match'",
            ),
        ];
        let leaderboard = Leaderboard::from_reports(&submissions);
        LeaderboardSnapshot {
            submissions,
            leaderboard,
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("<a href=\"x\">&'"), "&lt;a href=&quot;x&quot;&gt;&amp;&#39;");
    }

    #[test]
    fn test_page_contains_sections() {
        let html = render_page(&snapshot(), 2, Some(&Notice::success("Uploaded a.csv")));

        assert!(html.contains("<h1>🏆 Prediction Leaderboard</h1>"));
        assert!(html.contains("predict_group&lt;X&gt;.csv"));
        assert!(html.contains("accept=\".csv\""));
        assert!(html.contains("class=\"notice success\""));
        assert!(html.contains("🥇 1"));
        assert!(html.contains("0.5000"));
        assert!(html.contains("❌ failed to read: missing required column &#39;match&#39;"));
    }

    #[test]
    fn test_filenames_are_escaped() {
        let html = render_page(&snapshot(), 2, None);
        assert!(html.contains("a&lt;b&gt;.csv"));
        assert!(!html.contains("a<b>.csv"));
    }

    #[test]
    fn test_upload_notice() {
        let report = SubmissionReport::failed(SubmissionName::parse("x.csv").unwrap(), "bad");
        let notice = Notice::for_upload(&report);
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.message.contains("could not be scored: bad"));
    }
}
