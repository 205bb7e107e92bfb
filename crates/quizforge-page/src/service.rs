//! Request/response conversion for web-layer callers.
//!
//! A caller hands over the raw form payload and gets back a JSON-ready
//! result; failures carry the localized message meant for the author.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use quizforge_core::error::QuizError;
use quizforge_core::model::{MetadataDefaults, QuestionRecord, QuizMetadata};
use quizforge_core::parser;

use crate::html::render;

/// Payload accepted from the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    #[serde(default)]
    pub txt_content: String,
    #[serde(default, deserialize_with = "text_or_number")]
    pub test_name: Option<String>,
    #[serde(default)]
    pub duration: Option<DurationInput>,
    #[serde(default, deserialize_with = "text_or_number")]
    pub category: Option<String>,
}

/// Accept a JSON string or number for a free-form text field.
fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}

/// Forms send the duration as a string; API clients may send a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationInput {
    Number(f64),
    Text(String),
}

impl DurationInput {
    /// Whole minutes, or `None` when the field is blank. Fractional numbers
    /// are truncated; negative or oversized ones are rejected.
    fn minutes(&self) -> Result<Option<u32>, QuizError> {
        match self {
            DurationInput::Number(n) if n.is_finite() && *n >= 0.0 && *n < 4_294_967_296.0 => {
                Ok(Some(n.trunc() as u32))
            }
            DurationInput::Number(n) => Err(QuizError::InvalidDuration(n.to_string())),
            DurationInput::Text(s) if s.trim().is_empty() => Ok(None),
            DurationInput::Text(s) => s
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| QuizError::InvalidDuration(s.clone())),
        }
    }
}

/// Result payload returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ConvertResponse {
    pub fn ok(html: String, questions_count: usize) -> Self {
        Self {
            success: true,
            html: Some(html),
            questions_count: Some(questions_count),
            error: None,
        }
    }

    pub fn failed(error: &QuizError) -> Self {
        Self {
            success: false,
            html: None,
            questions_count: None,
            error: Some(error.user_message()),
        }
    }
}

/// A successful conversion before it is wrapped for the wire.
#[derive(Debug, Clone)]
pub struct Conversion {
    pub records: Vec<QuestionRecord>,
    pub metadata: QuizMetadata,
    pub html: String,
}

/// Parse, apply metadata defaults, and render.
///
/// Blank text, a bad id, a bad duration, and an empty result are errors.
pub fn try_convert(
    request: &ConvertRequest,
    defaults: &MetadataDefaults,
) -> Result<Conversion, QuizError> {
    if request.txt_content.trim().is_empty() {
        return Err(QuizError::EmptyInput);
    }

    let records = parser::parse(&request.txt_content)?;
    if records.is_empty() {
        return Err(QuizError::NoQuestions);
    }

    let duration = match &request.duration {
        Some(d) => d.minutes()?,
        None => None,
    };

    let metadata = defaults.resolve(
        request.test_name.as_deref(),
        duration,
        request.category.as_deref(),
    );
    let html = render(&records, &metadata);

    Ok(Conversion {
        records,
        metadata,
        html,
    })
}

/// Convert a request into the response payload; never fails.
pub fn convert(request: &ConvertRequest, defaults: &MetadataDefaults) -> ConvertResponse {
    match try_convert(request, defaults) {
        Ok(conversion) => {
            let count = conversion.records.len();
            ConvertResponse::ok(conversion.html, count)
        }
        Err(e) => {
            tracing::warn!("conversion failed: {e}");
            ConvertResponse::failed(&e)
        }
    }
}

/// Decode a raw JSON request and convert it. Undecodable requests become a
/// failed response rather than an error.
pub fn convert_json(raw: &str, defaults: &MetadataDefaults) -> ConvertResponse {
    match serde_json::from_str::<ConvertRequest>(raw) {
        Ok(request) => convert(&request, defaults),
        Err(e) => {
            let err = QuizError::InvalidRequest(e.to_string());
            tracing::warn!("{err}");
            ConvertResponse::failed(&err)
        }
    }
}
