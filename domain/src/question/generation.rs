//! AI question generation value objects

use super::difficulty::Difficulty;
use super::entities::QuestionDraft;
use crate::core::error::DomainError;
use serde::Serialize;

/// Default number of questions requested per generation
pub const DEFAULT_GENERATION_AMOUNT: u8 = 5;

/// Upper bound for a single generation request
pub const MAX_GENERATION_AMOUNT: u8 = 20;

/// Difficulty wanted from the generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DifficultyPreference {
    /// Let the generator spread questions across bands
    #[default]
    Mix,
    Only(Difficulty),
}

impl DifficultyPreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyPreference::Mix => "mix",
            DifficultyPreference::Only(d) => d.as_str(),
        }
    }
}

impl std::fmt::Display for DifficultyPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request to generate questions about a topic (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    topic: String,
    amount: u8,
    difficulty: DifficultyPreference,
}

impl GenerationRequest {
    /// Validate a request. The topic must not be blank; `amount` is clamped
    /// to `1..=MAX_GENERATION_AMOUNT`.
    pub fn try_new(
        topic: impl Into<String>,
        amount: u8,
        difficulty: DifficultyPreference,
    ) -> Result<Self, DomainError> {
        let topic = topic.into().trim().to_string();
        if topic.is_empty() {
            return Err(DomainError::InvalidGenerationRequest(
                "topic cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            topic,
            amount: amount.clamp(1, MAX_GENERATION_AMOUNT),
            difficulty,
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn amount(&self) -> u8 {
        self.amount
    }

    pub fn difficulty(&self) -> DifficultyPreference {
        self.difficulty
    }
}

/// Questions returned by a generation run
///
/// `is_mock` marks placeholder content produced because the upstream
/// generator failed; `error_reason` carries that failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedBatch {
    pub questions: Vec<QuestionDraft>,
    pub is_mock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_reason: Option<String>,
}

impl GeneratedBatch {
    pub fn generated(questions: Vec<QuestionDraft>) -> Self {
        Self {
            questions,
            is_mock: false,
            error_reason: None,
        }
    }

    pub fn mock(questions: Vec<QuestionDraft>, reason: impl Into<String>) -> Self {
        Self {
            questions,
            is_mock: true,
            error_reason: Some(reason.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_trims_topic() {
        let req =
            GenerationRequest::try_new("  Livro de Daniel ", 5, DifficultyPreference::Mix).unwrap();
        assert_eq!(req.topic(), "Livro de Daniel");
    }

    #[test]
    fn test_request_rejects_blank_topic() {
        assert!(GenerationRequest::try_new("   ", 5, DifficultyPreference::Mix).is_err());
    }

    #[test]
    fn test_request_clamps_amount() {
        let low = GenerationRequest::try_new("Êxodo", 0, DifficultyPreference::Mix).unwrap();
        assert_eq!(low.amount(), 1);
        let high = GenerationRequest::try_new("Êxodo", 200, DifficultyPreference::Mix).unwrap();
        assert_eq!(high.amount(), MAX_GENERATION_AMOUNT);
    }

    #[test]
    fn test_mock_batch_is_flagged() {
        let batch = GeneratedBatch::mock(vec![], "quota exceeded");
        assert!(batch.is_mock);
        assert_eq!(batch.error_reason.as_deref(), Some("quota exceeded"));
        assert!(!GeneratedBatch::generated(vec![]).is_mock);
    }
}
