//! Core data model types for quizforge.
//!
//! A question bank parses into [`QuestionRecord`]s; the caller pairs them
//! with [`QuizMetadata`] to render a quiz page.

use serde::{Deserialize, Serialize};

/// Number of answer choices every question carries.
pub const OPTION_COUNT: usize = 4;

/// Solution text used when a block has no eighth line.
pub const PLACEHOLDER_SOLUTION: &str = "कोई समाधान उपलब्ध नहीं";

/// One accepted question from the bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    /// Identifier copied verbatim from the source; not checked for uniqueness.
    pub id: i64,
    /// The question prompt.
    pub text: String,
    /// Answer choices; position `i` is displayed as option `i + 1`.
    pub options: [String; OPTION_COUNT],
    /// Token naming the correct choice, normally "1" through "4".
    pub correct_option: String,
    /// Explanation shown after submission.
    pub solution: String,
}

impl QuestionRecord {
    /// Whether `selected` (an option token such as "2") is the right answer.
    pub fn is_correct(&self, selected: &str) -> bool {
        self.correct_option == selected
    }

    /// Whether the solution is the built-in placeholder.
    pub fn has_placeholder_solution(&self) -> bool {
        self.solution == PLACEHOLDER_SOLUTION
    }
}

/// Caller-supplied quiz metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizMetadata {
    pub test_name: String,
    pub duration_minutes: u32,
    pub category: String,
}

impl QuizMetadata {
    /// Countdown length in seconds.
    pub fn duration_seconds(&self) -> u64 {
        u64::from(self.duration_minutes) * 60
    }
}

/// Defaults applied when metadata fields are missing or blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataDefaults {
    #[serde(default = "default_test_name")]
    pub test_name: String,
    #[serde(default = "default_duration")]
    pub duration_minutes: u32,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_test_name() -> String {
    "My Quiz Test".to_string()
}

fn default_duration() -> u32 {
    60
}

fn default_category() -> String {
    "General Knowledge".to_string()
}

impl Default for MetadataDefaults {
    fn default() -> Self {
        Self {
            test_name: default_test_name(),
            duration_minutes: default_duration(),
            category: default_category(),
        }
    }
}

impl MetadataDefaults {
    /// Build metadata, falling back to these defaults for absent or blank values.
    pub fn resolve(
        &self,
        test_name: Option<&str>,
        duration_minutes: Option<u32>,
        category: Option<&str>,
    ) -> QuizMetadata {
        let pick = |value: Option<&str>, fallback: &str| -> String {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(fallback)
                .to_string()
        };

        QuizMetadata {
            test_name: pick(test_name, &self.test_name),
            duration_minutes: duration_minutes.unwrap_or(self.duration_minutes),
            category: pick(category, &self.category),
        }
    }
}
