//! Question source port
//!
//! Defines the read-only interface to wherever questions live (a JSON file,
//! a PostgREST table, ...). Sources hand back raw [`QuestionRecord`]s;
//! validation happens in [`LoadQuestionsUseCase`](crate::use_cases::load_questions::LoadQuestionsUseCase).

use async_trait::async_trait;
use milhao_domain::{DomainError, Question, QuestionDraft, QuestionId, builtin_questions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while fetching questions
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Source unavailable: {0}")]
    Unavailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Timed out after {0}s")]
    Timeout(u64),
}

/// A question as stored externally, not yet validated
///
/// This is also the shape the question generator is asked to produce and
/// the shape written back by the question store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QuestionId>,
    pub text: String,
    pub options: Vec<String>,
    pub correct_option: i64,
    pub difficulty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_details: Option<String>,
}

impl QuestionRecord {
    /// Validate into a draft (difficulty, text, option count, answer index)
    pub fn to_draft(&self) -> Result<QuestionDraft, DomainError> {
        let difficulty = self.difficulty.parse()?;
        QuestionDraft::try_new(
            self.text.clone(),
            self.options.clone(),
            self.correct_option,
            difficulty,
            self.correct_details.clone(),
        )
    }
}

impl From<&QuestionDraft> for QuestionRecord {
    fn from(draft: &QuestionDraft) -> Self {
        Self {
            id: None,
            text: draft.text.clone(),
            options: draft.options.to_vec(),
            correct_option: draft.correct_option as i64,
            difficulty: draft.difficulty.as_str().to_string(),
            correct_details: draft.correct_details.clone(),
        }
    }
}

impl From<&Question> for QuestionRecord {
    fn from(question: &Question) -> Self {
        Self {
            id: Some(question.id().clone()),
            ..Self::from(question.draft())
        }
    }
}

/// Read-only question repository
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Short name for diagnostics (e.g. `"file"`, `"supabase"`)
    fn name(&self) -> &str;

    /// Fetch every available question record
    async fn fetch(&self) -> Result<Vec<QuestionRecord>, SourceError>;
}

/// Source serving the built-in question set.
pub struct BuiltinQuestionSource;

#[async_trait]
impl QuestionSource for BuiltinQuestionSource {
    fn name(&self) -> &str {
        "builtin"
    }

    async fn fetch(&self) -> Result<Vec<QuestionRecord>, SourceError> {
        Ok(builtin_questions().iter().map(QuestionRecord::from).collect())
    }
}
