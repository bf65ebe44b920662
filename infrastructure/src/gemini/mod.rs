//! Gemini adapter
//!
//! Implements [`QuestionGenerator`](milhao_application::QuestionGenerator)
//! with Google's Generative Language REST API.

pub mod error;
pub mod generator;

pub use error::GeminiError;
pub use generator::GeminiQuestionGenerator;
