//! Quiz conversion error types.
//!
//! Malformed blocks are never errors: the parser drops them. These variants
//! cover the few conditions a caller has to surface to the user.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur while turning a question bank into a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// A block's first line is not an integer question id.
    #[error("block {block}: invalid question id {value:?}: {source}")]
    InvalidId {
        block: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// The submitted text was blank.
    #[error("no question text supplied")]
    EmptyInput,

    /// Parsing succeeded but produced zero records.
    #[error("no valid questions found")]
    NoQuestions,

    /// The duration was not a whole number of minutes.
    #[error("invalid duration: {0:?}")]
    InvalidDuration(String),

    /// The request payload could not be decoded.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

impl QuizError {
    /// The fixed-locale message shown to quiz authors.
    pub fn user_message(&self) -> String {
        match self {
            QuizError::EmptyInput => "कृपया प्रश्न डालें!".to_string(),
            QuizError::NoQuestions => {
                "कोई वैध प्रश्न नहीं मिले! कृपया फॉर्मेट चेक करें।".to_string()
            }
            QuizError::InvalidId { .. } => format!("TXT पार्स करने में त्रुटि: {self}"),
            QuizError::InvalidDuration(_) => format!("अमान्य समय अवधि: {self}"),
            QuizError::InvalidRequest(_) => format!("अमान्य अनुरोध: {self}"),
        }
    }
}

/// Guard violations raised by [`crate::session::QuizSession`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("quiz has not been started")]
    NotStarted,

    #[error("quiz is already in progress")]
    AlreadyStarted,

    #[error("quiz has already been submitted")]
    AlreadySubmitted,

    #[error("quiz has not been submitted yet")]
    NotSubmitted,

    #[error("option {0} is out of range (expected 1-4)")]
    OptionOutOfRange(u8),
}
