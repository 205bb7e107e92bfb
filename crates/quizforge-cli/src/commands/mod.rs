pub mod convert;
pub mod init;
pub mod inspect;
pub mod payload;
pub mod validate;

use comfy_table::{Cell, Table};

use quizforge_core::model::QuestionRecord;

/// Longest prompt shown in a summary table cell.
const PREVIEW_CHARS: usize = 48;

fn preview(text: &str) -> String {
    if text.chars().count() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let head: String = text.chars().take(PREVIEW_CHARS - 3).collect();
    format!("{head}...")
}

/// Summary table of records, one row per question.
pub(crate) fn records_table(records: &[QuestionRecord]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "ID", "Question", "Correct", "Solution"]);

    for (i, r) in records.iter().enumerate() {
        let correct = r
            .correct_option
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| r.options.get(idx))
            .map(|opt| format!("{}. {}", r.correct_option, preview(opt)))
            .unwrap_or_else(|| r.correct_option.clone());

        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(r.id),
            Cell::new(preview(&r.text)),
            Cell::new(correct),
            Cell::new(if r.has_placeholder_solution() {
                "-"
            } else {
                "yes"
            }),
        ]);
    }

    table
}
