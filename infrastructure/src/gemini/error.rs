//! Error types for the Gemini adapter

use milhao_application::GeneratorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response has no text candidate")]
    EmptyResponse,

    #[error("Generated text is not a question array: {0}")]
    InvalidJson(String),
}

impl From<GeminiError> for GeneratorError {
    fn from(e: GeminiError) -> Self {
        match e {
            GeminiError::Http(err) => GeneratorError::RequestFailed(err.to_string()),
            GeminiError::Status { status, body } => GeneratorError::Upstream { status, body },
            other => GeneratorError::Parse(other.to_string()),
        }
    }
}
