//! The `quizforge inspect` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use quizforge_page::embedded_records;

use super::records_table;

pub fn execute(page: PathBuf) -> Result<()> {
    let html = std::fs::read_to_string(&page)
        .with_context(|| format!("failed to read page: {}", page.display()))?;
    let records = embedded_records(&html)
        .with_context(|| format!("not a quizforge page: {}", page.display()))?;

    println!("{}", records_table(&records));
    println!("{} embedded question(s)", records.len());

    Ok(())
}
