//! Question bank parser.
//!
//! A bank is plain text split into blocks by `---`. The first seven
//! non-blank lines of a block are, in order: id, question, four options,
//! and the correct option token. An optional eighth line is the solution.
//! Blocks with fewer than seven non-blank lines are dropped, not rejected.

use std::path::Path;

use anyhow::{Context, Result};

use crate::error::QuizError;
use crate::model::{QuestionRecord, OPTION_COUNT, PLACEHOLDER_SOLUTION};

/// Separator between question blocks. Matched as a plain substring, so
/// question text containing it will split the block.
pub const BLOCK_DELIMITER: &str = "---";

/// Minimum number of non-blank lines a block needs to become a record.
pub const MIN_BLOCK_LINES: usize = 7;

/// A non-empty block that was dropped for being too short.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBlock {
    /// 1-based position of the block among all delimiter-separated segments.
    pub index: usize,
    /// How many non-blank lines it had.
    pub line_count: usize,
}

/// Records plus the blocks that did not make it.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub records: Vec<QuestionRecord>,
    pub skipped: Vec<SkippedBlock>,
}

/// Parse a question bank into records, preserving block order.
///
/// Zero records is a valid outcome; callers decide whether that is an error.
pub fn parse(raw: &str) -> Result<Vec<QuestionRecord>, QuizError> {
    parse_with_report(raw).map(|report| report.records)
}

/// Parse a question bank, also reporting which blocks were skipped.
pub fn parse_with_report(raw: &str) -> Result<ParseReport, QuizError> {
    let mut report = ParseReport::default();

    for (i, block) in raw.split(BLOCK_DELIMITER).enumerate() {
        let index = i + 1;
        let block = block.trim();
        if block.is_empty() {
            continue;
        }

        let lines: Vec<&str> = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        if lines.len() < MIN_BLOCK_LINES {
            tracing::debug!(
                block = index,
                lines = lines.len(),
                "skipping block with too few lines"
            );
            report.skipped.push(SkippedBlock {
                index,
                line_count: lines.len(),
            });
            continue;
        }

        report.records.push(build_record(index, &lines)?);
    }

    tracing::info!(
        records = report.records.len(),
        skipped = report.skipped.len(),
        "parsed question bank"
    );

    Ok(report)
}

/// Read a UTF-8 question bank from disk and parse it.
pub fn parse_file(path: &Path) -> Result<ParseReport> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read question bank: {}", path.display()))?;

    parse_with_report(&content)
        .with_context(|| format!("failed to parse question bank: {}", path.display()))
}

/// Zero code points of the Unicode decimal digit runs that ids may be
/// written in (ASCII, Arabic-Indic, Devanagari, Bengali, Tamil, Thai,
/// fullwidth, and so on). Each run covers ten consecutive code points.
const DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10,
];

/// Rewrite decimal digits from any supported script as ASCII digits.
/// Other characters pass through untouched.
fn ascii_digits(s: &str) -> String {
    s.chars()
        .map(|c| {
            let cp = c as u32;
            DIGIT_ZEROS
                .iter()
                .find(|&&zero| (zero..zero + 10).contains(&cp))
                .and_then(|&zero| char::from_digit(cp - zero, 10))
                .unwrap_or(c)
        })
        .collect()
}

fn build_record(index: usize, lines: &[&str]) -> Result<QuestionRecord, QuizError> {
    let id = ascii_digits(lines[0])
        .parse::<i64>()
        .map_err(|source| QuizError::InvalidId {
            block: index,
            value: lines[0].to_string(),
            source,
        })?;

    let options: [String; OPTION_COUNT] = std::array::from_fn(|i| lines[2 + i].to_string());

    Ok(QuestionRecord {
        id,
        text: lines[1].to_string(),
        options,
        correct_option: lines[6].to_string(),
        solution: lines
            .get(7)
            .map(|s| s.to_string())
            .unwrap_or_else(|| PLACEHOLDER_SOLUTION.to_string()),
    })
}
