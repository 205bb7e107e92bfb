//! quizforge-page — Self-contained HTML quiz page generation.
//!
//! Renders parsed question records into a single static page that runs the
//! quiz in the browser, and wraps parse + render for request/response callers.

mod assets;
pub mod html;
pub mod service;

pub use html::{embedded_records, render, write_quiz_page};
pub use service::{convert, convert_json, try_convert, ConvertRequest, ConvertResponse};
