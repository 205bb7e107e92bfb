//! Quiz attempt state machine and scoring.
//!
//! This is the same model the generated page runs in the browser:
//! `NotStarted -> InProgress -> Submitted`, a one-second countdown, and a
//! three-way classification of every question on submit. The page reads its
//! thresholds and tier messages from here, so both sides agree.

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::model::{QuestionRecord, OPTION_COUNT};

/// Answers needed before submit is offered (capped at the question count).
pub const SUBMIT_THRESHOLD: usize = 5;

/// Where an attempt is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizState {
    NotStarted,
    InProgress,
    Submitted,
}

/// Qualitative result bucket, chosen from the correct percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Performance {
    Excellent,
    Good,
    Average,
    NeedsPractice,
}

impl Performance {
    /// All tiers, highest threshold first.
    pub const ALL: [Performance; 4] = [
        Performance::Excellent,
        Performance::Good,
        Performance::Average,
        Performance::NeedsPractice,
    ];

    /// Lowest percentage that still lands in this tier.
    pub fn min_percent(self) -> f64 {
        match self {
            Performance::Excellent => 80.0,
            Performance::Good => 60.0,
            Performance::Average => 40.0,
            Performance::NeedsPractice => 0.0,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Performance::Excellent => "Excellent performance! 🎉",
            Performance::Good => "Good job! 👍",
            Performance::Average => "Average performance. Keep practicing! 💪",
            Performance::NeedsPractice => "Need more practice. Don't give up! 📚",
        }
    }

    pub fn from_percentage(percent: f64) -> Self {
        Self::ALL
            .into_iter()
            .find(|tier| percent >= tier.min_percent())
            .unwrap_or(Performance::NeedsPractice)
    }
}

/// Outcome of a submitted attempt. The three counts always sum to `total`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub correct: usize,
    pub incorrect: usize,
    pub skipped: usize,
    pub total: usize,
}

impl ScoreSummary {
    /// Classify each answer against its question exactly once.
    pub fn compute(records: &[QuestionRecord], answers: &[Option<String>]) -> Self {
        let mut summary = ScoreSummary {
            correct: 0,
            incorrect: 0,
            skipped: 0,
            total: records.len(),
        };

        for (i, record) in records.iter().enumerate() {
            match answers.get(i).and_then(|a| a.as_deref()) {
                None => summary.skipped += 1,
                Some(selected) if record.is_correct(selected) => summary.correct += 1,
                Some(_) => summary.incorrect += 1,
            }
        }

        summary
    }

    /// Percentage of questions answered correctly; 0 for an empty quiz.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct as f64 / self.total as f64 * 100.0
    }

    pub fn performance(&self) -> Performance {
        Performance::from_percentage(self.percentage())
    }
}

/// One attempt at a quiz.
#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    records: &'a [QuestionRecord],
    state: QuizState,
    current: usize,
    answers: Vec<Option<String>>,
    duration_secs: u64,
    remaining_secs: u64,
    summary: Option<ScoreSummary>,
}

impl<'a> QuizSession<'a> {
    pub fn new(records: &'a [QuestionRecord], duration_minutes: u32) -> Self {
        let duration_secs = u64::from(duration_minutes) * 60;
        Self {
            records,
            state: QuizState::NotStarted,
            current: 0,
            answers: vec![None; records.len()],
            duration_secs,
            remaining_secs: duration_secs,
            summary: None,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// Zero-based position of the question on screen.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn answers(&self) -> &[Option<String>] {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    /// Result of the last submission, if the attempt is over.
    pub fn summary(&self) -> Option<ScoreSummary> {
        self.summary
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.records.len()
    }

    pub fn start(&mut self) -> Result<(), SessionError> {
        match self.state {
            QuizState::NotStarted => {
                self.state = QuizState::InProgress;
                Ok(())
            }
            QuizState::InProgress => Err(SessionError::AlreadyStarted),
            QuizState::Submitted => Err(SessionError::AlreadySubmitted),
        }
    }

    /// Record `option` (1-based) for the current question, replacing any
    /// earlier choice.
    pub fn select(&mut self, option: u8) -> Result<(), SessionError> {
        self.require_in_progress()?;
        if option == 0 || usize::from(option) > OPTION_COUNT {
            return Err(SessionError::OptionOutOfRange(option));
        }
        if let Some(slot) = self.answers.get_mut(self.current) {
            *slot = Some(option.to_string());
        }
        Ok(())
    }

    /// Move forward one question. Returns `false` at the last question.
    pub fn next(&mut self) -> Result<bool, SessionError> {
        self.require_in_progress()?;
        if self.is_last() {
            return Ok(false);
        }
        self.current += 1;
        Ok(true)
    }

    /// Move back one question. Returns `false` at the first question.
    pub fn prev(&mut self) -> Result<bool, SessionError> {
        self.require_in_progress()?;
        if self.is_first() {
            return Ok(false);
        }
        self.current -= 1;
        Ok(true)
    }

    /// Submit is offered after `min(5, total)` answers or on the last question.
    pub fn can_submit(&self) -> bool {
        self.state == QuizState::InProgress
            && (self.answered_count() >= SUBMIT_THRESHOLD.min(self.records.len())
                || self.is_last())
    }

    pub fn submit(&mut self) -> Result<ScoreSummary, SessionError> {
        self.require_in_progress()?;
        let summary = ScoreSummary::compute(self.records, &self.answers);
        self.state = QuizState::Submitted;
        self.summary = Some(summary);
        Ok(summary)
    }

    /// Advance the countdown one second; submits automatically at zero.
    pub fn tick(&mut self) -> Result<Option<ScoreSummary>, SessionError> {
        self.require_in_progress()?;
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs == 0 {
            return self.submit().map(Some);
        }
        Ok(None)
    }

    /// Clear answers, timer, and position for another attempt.
    pub fn restart(&mut self) -> Result<(), SessionError> {
        if self.state != QuizState::Submitted {
            return Err(SessionError::NotSubmitted);
        }
        self.state = QuizState::NotStarted;
        self.current = 0;
        self.answers = vec![None; self.records.len()];
        self.remaining_secs = self.duration_secs;
        self.summary = None;
        Ok(())
    }

    fn require_in_progress(&self) -> Result<(), SessionError> {
        match self.state {
            QuizState::InProgress => Ok(()),
            QuizState::NotStarted => Err(SessionError::NotStarted),
            QuizState::Submitted => Err(SessionError::AlreadySubmitted),
        }
    }
}
