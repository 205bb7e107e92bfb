//! The `quizforge convert` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use quizforge_core::config::load_config_from;
use quizforge_core::error::QuizError;
use quizforge_core::parser;
use quizforge_page::write_quiz_page;

pub fn execute(
    input: PathBuf,
    test_name: Option<String>,
    duration: Option<u32>,
    category: Option<String>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let report = parser::parse_file(&input)?;
    if !report.skipped.is_empty() {
        tracing::warn!(
            "{} block(s) skipped for having fewer than {} non-blank lines",
            report.skipped.len(),
            parser::MIN_BLOCK_LINES
        );
    }
    if report.records.is_empty() {
        return Err(QuizError::NoQuestions.into());
    }

    let meta = config
        .defaults
        .resolve(test_name.as_deref(), duration, category.as_deref());

    let output = output.unwrap_or_else(|| default_output(&config.output_dir, &input));
    write_quiz_page(&report.records, &meta, &output)?;

    println!(
        "Generated \"{}\" with {} question(s): {}",
        meta.test_name,
        report.records.len(),
        output.display()
    );

    Ok(())
}

fn default_output(dir: &Path, input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "quiz".to_string());
    dir.join(format!("{stem}.html"))
}
