//! Port implementations backed by [`SupabaseClient`]

use super::client::SupabaseClient;
use async_trait::async_trait;
use milhao_application::{
    MatchResultSink, QuestionRecord, QuestionSource, QuestionStore, SinkError, SourceError,
    StoreError,
};
use milhao_domain::{MatchResult, QuestionDraft};

/// Reads the `questions` table
pub struct SupabaseQuestionSource {
    client: SupabaseClient,
}

impl SupabaseQuestionSource {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QuestionSource for SupabaseQuestionSource {
    fn name(&self) -> &str {
        "supabase"
    }

    async fn fetch(&self) -> Result<Vec<QuestionRecord>, SourceError> {
        Ok(self.client.fetch_questions().await?)
    }
}

/// Appends rows to `game_matches`
pub struct SupabaseMatchSink {
    client: SupabaseClient,
}

impl SupabaseMatchSink {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MatchResultSink for SupabaseMatchSink {
    fn name(&self) -> &str {
        "supabase"
    }

    async fn record(&self, result: &MatchResult) -> Result<(), SinkError> {
        Ok(self.client.insert_match(result).await?)
    }
}

/// Inserts rows into `questions`
pub struct SupabaseQuestionStore {
    client: SupabaseClient,
}

impl SupabaseQuestionStore {
    pub fn new(client: SupabaseClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl QuestionStore for SupabaseQuestionStore {
    async fn insert(&self, question: &QuestionDraft) -> Result<(), StoreError> {
        Ok(self.client.insert_question(question).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_client() -> SupabaseClient {
        SupabaseClient::new("http://127.0.0.1:1", "anon").unwrap()
    }

    #[tokio::test]
    async fn test_source_reports_request_failure() {
        let source = SupabaseQuestionSource::new(offline_client());
        assert_eq!(source.name(), "supabase");
        assert!(matches!(
            source.fetch().await,
            Err(SourceError::RequestFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_store_reports_request_failure() {
        let store = SupabaseQuestionStore::new(offline_client());
        let question = milhao_domain::builtin_questions().remove(0);
        assert!(matches!(
            store.insert(question.draft()).await,
            Err(StoreError::RequestFailed(_))
        ));
    }
}
