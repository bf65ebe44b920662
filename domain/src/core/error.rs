//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Gameplay transitions never return these; they are raised while building
/// domain values from untrusted input (question records, CLI arguments,
/// generation requests).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid difficulty: {0}")]
    InvalidDifficulty(String),

    #[error("Invalid generation request: {0}")]
    InvalidGenerationRequest(String),
}
