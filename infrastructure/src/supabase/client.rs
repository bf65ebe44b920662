//! Minimal PostgREST client for the Supabase tables the game uses
//!
//! - `GET  /rest/v1/questions?select=*`
//! - `POST /rest/v1/questions`
//! - `POST /rest/v1/game_matches`

use super::error::{Result, SupabaseError};
use milhao_application::QuestionRecord;
use milhao_domain::{MatchResult, QuestionDraft};
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

const QUESTIONS_TABLE: &str = "questions";
const MATCHES_TABLE: &str = "game_matches";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Row written to `game_matches`
#[derive(Debug, Serialize)]
struct MatchRow<'a> {
    user_id: &'a str,
    game_id: &'a str,
    score: u64,
    metadata: &'a milhao_domain::MatchMetadata,
}

impl<'a> From<&'a MatchResult> for MatchRow<'a> {
    fn from(result: &'a MatchResult) -> Self {
        Self {
            user_id: &result.user_id,
            game_id: &result.game_id,
            score: result.score,
            metadata: &result.metadata,
        }
    }
}

/// Shared HTTP client bound to one Supabase project
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    base_url: String,
    key: String,
}

impl SupabaseClient {
    pub fn new(url: &str, key: &str) -> Result<Self> {
        let base_url = url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(SupabaseError::InvalidUrl(url.to_string()));
        }
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url,
            key: key.to_string(),
        })
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }

    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.http
            .post(url)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
            .header("Prefer", "return=minimal")
    }

    /// Every row of the questions table
    pub async fn fetch_questions(&self) -> Result<Vec<QuestionRecord>> {
        let url = self.table_url(QUESTIONS_TABLE);
        debug!(url = %url, "Fetching questions");

        let response = self.get(&url).query(&[("select", "*")]).send().await?;
        let body = Self::check(response).await?;
        parse_question_rows(&body)
    }

    pub async fn insert_question(&self, question: &QuestionDraft) -> Result<()> {
        let url = self.table_url(QUESTIONS_TABLE);
        let row = QuestionRecord::from(question);
        let response = self.post(&url).json(&row).send().await?;
        Self::check(response).await.map(|_| ())
    }

    pub async fn insert_match(&self, result: &MatchResult) -> Result<()> {
        let url = self.table_url(MATCHES_TABLE);
        let response = self.post(&url).json(&MatchRow::from(result)).send().await?;
        Self::check(response).await.map(|_| ())
    }

    async fn check(response: reqwest::Response) -> Result<String> {
        let status = response.status();
        let body = response.text().await?;
        if status.is_success() {
            Ok(body)
        } else {
            Err(SupabaseError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Decode a PostgREST row array. Extra columns are ignored.
pub fn parse_question_rows(body: &str) -> Result<Vec<QuestionRecord>> {
    serde_json::from_str(body).map_err(|e| SupabaseError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use milhao_domain::{GameStatus, MatchMetadata};

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let client = SupabaseClient::new("https://proj.supabase.co/", "k").unwrap();
        assert_eq!(
            client.table_url("questions"),
            "https://proj.supabase.co/rest/v1/questions"
        );
    }

    #[test]
    fn test_rejects_url_without_scheme() {
        assert!(matches!(
            SupabaseClient::new("proj.supabase.co", "k"),
            Err(SupabaseError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_parse_question_rows() {
        let body = r#"[
            {"id": 1, "text": "Quem?", "options": ["A","B","C","D"], "correct_option": 2,
             "difficulty": "easy", "correct_details": "Detalhe", "created_at": "2024-05-01"},
            {"id": "uuid-2", "text": "Onde?", "options": ["A","B","C","D"], "correct_option": 0,
             "difficulty": "million"}
        ]"#;
        let rows = parse_question_rows(body).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].correct_details.as_deref(), Some("Detalhe"));
        assert_eq!(rows[1].id.as_ref().unwrap().as_str(), "uuid-2");
    }

    #[test]
    fn test_parse_question_rows_rejects_object() {
        let err = parse_question_rows(r#"{"message": "permission denied"}"#).unwrap_err();
        assert!(matches!(err, SupabaseError::Decode(_)));
    }

    #[test]
    fn test_match_row_shape() {
        let result = MatchResult {
            user_id: "u1".to_string(),
            game_id: "show-do-milhao".to_string(),
            score: 5_000,
            metadata: MatchMetadata { level: 6 },
            status: GameStatus::Stopped,
            finished_at: Utc::now(),
        };
        let json = serde_json::to_value(MatchRow::from(&result)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "user_id": "u1",
                "game_id": "show-do-milhao",
                "score": 5000,
                "metadata": {"level": 6}
            })
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let client = SupabaseClient::new("http://127.0.0.1:1", "k").unwrap();
        let err = client.fetch_questions().await.unwrap_err();
        assert!(matches!(err, SupabaseError::Http(_)));
    }
}
