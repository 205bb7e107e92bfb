//! quizforge-core — Question bank parsing, data model, and quiz scoring.
//!
//! This crate turns delimiter-separated question text into records and
//! models the quiz attempt that the generated page runs.

pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod session;
