//! The `quizforge validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizforge_core::error::QuizError;
use quizforge_core::parser;

use super::records_table;

pub fn execute(input: PathBuf) -> Result<()> {
    let report = parser::parse_file(&input)?;

    println!(
        "Question bank: {} ({} questions)",
        input.display(),
        report.records.len()
    );

    if !report.records.is_empty() {
        println!("{}", records_table(&report.records));
    }

    for skipped in &report.skipped {
        println!(
            "  [block {}] SKIPPED: {} non-blank line(s), need at least {}",
            skipped.index,
            skipped.line_count,
            parser::MIN_BLOCK_LINES
        );
    }

    if report.records.is_empty() {
        return Err(QuizError::NoQuestions.into());
    }

    if report.skipped.is_empty() {
        println!("All blocks valid.");
    } else {
        println!("\n{} block(s) skipped.", report.skipped.len());
    }

    Ok(())
}
