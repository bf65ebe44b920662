//! Question store port
//!
//! Write access to the question table, used by generation (`--save`) and
//! by the built-in set migration.

use async_trait::async_trait;
use milhao_domain::QuestionDraft;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store not configured: {0}")]
    NotConfigured(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Insert one question; the store assigns its id
    async fn insert(&self, question: &QuestionDraft) -> Result<(), StoreError>;
}

/// Placeholder used when no store is configured.
pub struct NoQuestionStore;

#[async_trait]
impl QuestionStore for NoQuestionStore {
    async fn insert(&self, _question: &QuestionDraft) -> Result<(), StoreError> {
        Err(StoreError::NotConfigured(
            "supabase url/key missing".to_string(),
        ))
    }
}
