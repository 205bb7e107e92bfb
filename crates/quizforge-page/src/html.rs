//! HTML quiz page generator.
//!
//! Produces a self-contained HTML file with the question data, CSS, and the
//! quiz runtime all inlined. The page needs no server once written.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use quizforge_core::model::{QuestionRecord, QuizMetadata};
use quizforge_core::session::{Performance, SUBMIT_THRESHOLD};

use crate::assets::{CSS, JS};

const DATA_OPEN: &str = "<script type=\"application/json\" id=\"quiz-data\">";
const CONFIG_OPEN: &str = "<script type=\"application/json\" id=\"quiz-config\">";
const SCRIPT_CLOSE: &str = "</script>";

/// Shown by the page before a manual submit.
const CONFIRM_MESSAGE: &str = "क्या आप वाकई टेस्ट submit करना चाहते हैं?";

/// Runtime parameters handed to the page script.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageConfig {
    duration_seconds: u64,
    submit_threshold: usize,
    confirm_message: &'static str,
    tiers: Vec<PageTier>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageTier {
    min_percent: f64,
    message: &'static str,
}

impl PageConfig {
    fn new(meta: &QuizMetadata) -> Self {
        Self {
            duration_seconds: meta.duration_seconds(),
            submit_threshold: SUBMIT_THRESHOLD,
            confirm_message: CONFIRM_MESSAGE,
            tiers: Performance::ALL
                .into_iter()
                .map(|tier| PageTier {
                    min_percent: tier.min_percent(),
                    message: tier.message(),
                })
                .collect(),
        }
    }
}

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Serialize `value` as compact JSON that can sit inside a `<script>` element.
///
/// Markup-significant characters only occur inside JSON strings, where the
/// `\uXXXX` form decodes to the same text.
fn script_json<T: Serialize>(value: &T) -> String {
    // Only plain structs with string and number fields reach here.
    let json = serde_json::to_string(value).expect("page data serializes to JSON");
    let mut out = String::with_capacity(json.len());
    for ch in json.chars() {
        match ch {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out
}

/// Render a complete quiz page.
///
/// The output depends only on the arguments, so rendering the same input
/// twice yields identical bytes. An empty `records` slice still renders.
pub fn render(records: &[QuestionRecord], meta: &QuizMetadata) -> String {
    let total_questions = records.len();
    let total_marks = total_questions;
    let test_name = html_escape(&meta.test_name);
    let category = html_escape(&meta.category);

    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"hi\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no\">\n");
    html.push_str(&format!("<title>{test_name}</title>\n"));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n<div class=\"container\">\n");

    // Welcome panel
    html.push_str("<section class=\"welcome-screen\" id=\"welcome-screen\">\n");
    html.push_str("<h1 class=\"welcome-title\">Welcome to Quiz</h1>\n");
    html.push_str(&format!(
        "<h2 class=\"test-name-display\">{test_name}</h2>\n"
    ));
    html.push_str(&format!("<p class=\"category-display\">{category}</p>\n"));
    html.push_str("<div class=\"quiz-stats\">\n");
    html.push_str(&stat_card(total_questions, "Total Questions"));
    html.push_str(&stat_card(total_marks, "Total Marks"));
    html.push_str(&stat_card(meta.duration_minutes, "Minutes"));
    html.push_str("</div>\n");
    html.push_str("<button type=\"button\" class=\"start-btn\" data-action=\"start\">Start Quiz</button>\n");
    html.push_str("</section>\n");

    // Quiz panel
    html.push_str("<section class=\"quiz-interface\" id=\"quiz-interface\" hidden>\n");
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{test_name}</h1>\n"));
    html.push_str(&format!("<p class=\"header-category\">{category}</p>\n"));
    html.push_str("<div class=\"header-chips\">\n");
    html.push_str(&format!(
        "<span class=\"chip\">Questions: {total_questions}</span>\n"
    ));
    html.push_str(&format!("<span class=\"chip\">Marks: {total_marks}</span>\n"));
    html.push_str(&format!(
        "<span class=\"chip\">Time: {} Min</span>\n",
        meta.duration_minutes
    ));
    html.push_str("</div>\n</header>\n");
    html.push_str("<div class=\"centered\"><div class=\"timer\" id=\"timer\"><span id=\"time-display\">--:--:--</span></div></div>\n");
    html.push_str("<div class=\"centered\"><button type=\"button\" class=\"submit-btn\" data-action=\"submit\">Submit Quiz</button></div>\n");
    html.push_str("<div class=\"progress-container\"><div class=\"progress-bar\" id=\"progress-bar\"></div></div>\n");
    html.push_str(&format!(
        "<div class=\"question-count\" id=\"question-count\">Question 1/{total_questions}</div>\n"
    ));
    html.push_str("<div class=\"question\">\n");
    html.push_str("<div class=\"question-text\" id=\"question-text\"></div>\n");
    html.push_str("<ul class=\"options\" id=\"options\"></ul>\n");
    html.push_str("</div>\n");
    html.push_str("<div class=\"navigation\">\n");
    html.push_str("<button type=\"button\" id=\"prev-btn\" data-action=\"prev\" disabled>Previous</button>\n");
    html.push_str("<button type=\"button\" id=\"next-btn\" data-action=\"next\">Next</button>\n");
    html.push_str("</div>\n");
    html.push_str("<div class=\"centered\"><button type=\"button\" class=\"submit-btn\" data-action=\"submit\">Submit Quiz</button></div>\n");
    html.push_str("</section>\n");

    // Results panel
    html.push_str("<section class=\"result-container\" id=\"result-container\" hidden>\n");
    html.push_str("<h2>Your Results</h2>\n");
    html.push_str(&format!(
        "<div class=\"score\" id=\"score\">0/{total_marks}</div>\n"
    ));
    html.push_str("<p class=\"performance-message\" id=\"result-message\"></p>\n");
    html.push_str("<div class=\"score-breakdown\">\n");
    html.push_str(&breakdown_item("correct", "Correct"));
    html.push_str(&breakdown_item("incorrect", "Incorrect"));
    html.push_str(&breakdown_item("skipped", "Skipped"));
    html.push_str("</div>\n");
    html.push_str("<details class=\"review\">\n<summary>Review Answers</summary>\n");
    html.push_str("<ol class=\"review-list\" id=\"review-list\"></ol>\n");
    html.push_str("</details>\n");
    html.push_str("<button type=\"button\" class=\"restart-btn\" data-action=\"restart\">Take Quiz Again</button>\n");
    html.push_str("</section>\n");

    html.push_str("</div>\n");

    // Embedded data
    html.push_str(DATA_OPEN);
    html.push_str(&script_json(&records));
    html.push_str(SCRIPT_CLOSE);
    html.push('\n');
    html.push_str(CONFIG_OPEN);
    html.push_str(&script_json(&PageConfig::new(meta)));
    html.push_str(SCRIPT_CLOSE);
    html.push('\n');

    // Quiz runtime
    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");

    tracing::info!(
        questions = total_questions,
        bytes = html.len(),
        "rendered quiz page"
    );

    html
}

fn stat_card(value: impl std::fmt::Display, label: &str) -> String {
    format!(
        "<div class=\"stat-card\"><div class=\"stat-value\">{value}</div><div class=\"stat-label\">{label}</div></div>\n"
    )
}

fn breakdown_item(kind: &str, label: &str) -> String {
    format!(
        "<div class=\"breakdown-item {kind}\"><div class=\"breakdown-number\" id=\"{kind}-count\">0</div><div class=\"breakdown-label\">{label}</div></div>\n"
    )
}

/// Render a quiz page and write it to a file.
pub fn write_quiz_page(records: &[QuestionRecord], meta: &QuizMetadata, path: &Path) -> Result<()> {
    let html = render(records, meta);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write quiz page to {}", path.display()))?;
    Ok(())
}

/// Decode the question records embedded in a page produced by [`render`].
pub fn embedded_records(html: &str) -> Result<Vec<QuestionRecord>> {
    let start = html
        .find(DATA_OPEN)
        .map(|i| i + DATA_OPEN.len())
        .context("page has no embedded quiz data")?;
    let len = html[start..]
        .find(SCRIPT_CLOSE)
        .context("embedded quiz data is not terminated")?;

    serde_json::from_str(&html[start..start + len]).context("failed to decode embedded quiz data")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quizforge_core::model::PLACEHOLDER_SOLUTION;

    fn record(id: i64, text: &str) -> QuestionRecord {
        QuestionRecord {
            id,
            text: text.into(),
            options: ["A".into(), "B".into(), "C".into(), "D".into()],
            correct_option: "1".into(),
            solution: PLACEHOLDER_SOLUTION.into(),
        }
    }

    fn meta() -> QuizMetadata {
        QuizMetadata {
            test_name: "Sample".into(),
            duration_minutes: 10,
            category: "Math".into(),
        }
    }

    #[test]
    fn page_contains_panels_and_metadata() {
        let html = render(&[record(1, "Q1"), record(2, "Q2")], &meta());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>"));
        assert!(html.contains("id=\"welcome-screen\""));
        assert!(html.contains("id=\"quiz-interface\" hidden"));
        assert!(html.contains("id=\"result-container\" hidden"));
        assert!(html.contains("<title>Sample</title>"));
        assert!(html.contains("<p class=\"category-display\">Math</p>"));
        assert!(html.contains("<div class=\"stat-value\">2</div><div class=\"stat-label\">Total Marks</div>"));
        assert!(html.contains("<div class=\"stat-value\">10</div><div class=\"stat-label\">Minutes</div>"));
        assert!(html.contains("Question 1/2"));
    }

    #[test]
    fn config_block_carries_runtime_parameters() {
        let html = render(&[record(1, "Q1")], &meta());
        let start = html.find(CONFIG_OPEN).unwrap() + CONFIG_OPEN.len();
        let len = html[start..].find(SCRIPT_CLOSE).unwrap();
        let config: serde_json::Value = serde_json::from_str(&html[start..start + len]).unwrap();

        assert_eq!(config["durationSeconds"], 600);
        assert_eq!(config["submitThreshold"], 5);
        let tiers = config["tiers"].as_array().unwrap();
        assert_eq!(tiers.len(), 4);
        assert_eq!(tiers[0]["minPercent"], 80.0);
        assert_eq!(tiers[3]["minPercent"], 0.0);
    }

    #[test]
    fn embedded_data_round_trips() {
        let mut tricky = record(3, "Is </script><b>bold</b> & 'quoted' \"text\"?");
        tricky.options[2] = "भारत \u{2028} line".into();
        tricky.solution = "व्याख्या: <i>x</i> > y".into();
        let records = vec![record(1, "सरल प्रश्न"), tricky];

        let html = render(&records, &meta());
        assert_eq!(embedded_records(&html).unwrap(), records);
    }

    #[test]
    fn embedded_data_cannot_close_script() {
        let html = render(&[record(1, "</script><script>alert(1)</script>")], &meta());
        assert!(!html.contains("</script><script>alert"));
        assert_eq!(html.matches(SCRIPT_CLOSE).count(), 3);
    }

    #[test]
    fn non_ascii_is_not_escaped() {
        let html = render(&[record(1, "राजधानी")], &meta());
        assert!(html.contains("\"text\":\"राजधानी\""));
    }

    #[test]
    fn metadata_is_escaped() {
        let meta = QuizMetadata {
            test_name: "<img src=x>".into(),
            duration_minutes: 5,
            category: "A & B".into(),
        };
        let html = render(&[record(1, "Q")], &meta);
        assert!(!html.contains("<img src=x>"));
        assert!(html.contains("&lt;img src=x&gt;"));
        assert!(html.contains("A &amp; B"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let records = vec![record(1, "Q1"), record(2, "Q2")];
        assert_eq!(render(&records, &meta()), render(&records, &meta()));
    }

    #[test]
    fn empty_records_still_render() {
        let html = render(&[], &meta());
        assert!(html.contains("Question 1/0"));
        assert!(embedded_records(&html).unwrap().is_empty());
    }

    #[test]
    fn embedded_records_rejects_foreign_page() {
        assert!(embedded_records("<html><body>hi</body></html>").is_err());
    }

    #[test]
    fn write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/quiz.html");

        write_quiz_page(&[record(1, "Q1")], &meta(), &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(embedded_records(&content).unwrap().len(), 1);
    }

    #[test]
    fn write_reports_blocked_directory() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("taken");
        std::fs::write(&blocker, "not a directory").unwrap();
        let path = blocker.join("nested/quiz.html");

        let err = write_quiz_page(&[record(1, "Q1")], &meta(), &path).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("failed to create directory"), "{msg}");
        assert!(msg.contains("taken"), "{msg}");
    }
}
