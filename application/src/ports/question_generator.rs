//! Question generator port
//!
//! An AI service that writes new questions on a topic. Replies come back as
//! [`QuestionRecord`]s and are validated by the use case.

use crate::ports::question_source::QuestionRecord;
use async_trait::async_trait;
use milhao_domain::GenerationRequest;
use thiserror::Error;

/// Errors that can occur during generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Generator not configured: {0}")]
    NotConfigured(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Upstream returned status {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Could not parse generated questions: {0}")]
    Parse(String),
}

#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<QuestionRecord>, GeneratorError>;
}

/// Placeholder used when no generator credentials are configured.
pub struct NoQuestionGenerator;

#[async_trait]
impl QuestionGenerator for NoQuestionGenerator {
    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<Vec<QuestionRecord>, GeneratorError> {
        Err(GeneratorError::NotConfigured(
            "no generator API key".to_string(),
        ))
    }
}
