//! Gemini `generateContent` question generator

use super::error::GeminiError;
use async_trait::async_trait;
use milhao_application::{GeneratorError, QuestionGenerator, QuestionRecord};
use milhao_domain::{DifficultyPreference, GenerationRequest};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

// ==================== Wire types ====================

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

/// Question generator backed by the Gemini REST API
pub struct GeminiQuestionGenerator {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl GeminiQuestionGenerator {
    pub fn new(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
    ) -> Result<Self, GeminiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            model: model.into(),
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint, self.model)
    }

    async fn call(&self, prompt: &str) -> Result<String, GeminiError> {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };
        debug!(model = %self.model, "Calling Gemini");

        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(GeminiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }
        extract_text(&text)
    }
}

#[async_trait]
impl QuestionGenerator for GeminiQuestionGenerator {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Vec<QuestionRecord>, GeneratorError> {
        let prompt = build_prompt(request);
        let reply = self.call(&prompt).await?;
        Ok(parse_questions(&reply)?)
    }
}

/// Prompt asking for a bare JSON array in the question record format
pub fn build_prompt(request: &GenerationRequest) -> String {
    let difficulty = match request.difficulty() {
        DifficultyPreference::Mix => {
            "uma mistura de dificuldades (easy, medium, hard)".to_string()
        }
        DifficultyPreference::Only(d) => format!("dificuldade \"{}\"", d),
    };

    format!(
        "Gere {amount} perguntas de múltipla escolha sobre \"{topic}\" para um jogo \
         no estilo Show do Milhão, com {difficulty}.\n\
         Responda APENAS com um array JSON, sem texto extra, onde cada item tem:\n\
         - \"text\": a pergunta\n\
         - \"options\": exatamente 4 alternativas\n\
         - \"correct_option\": índice (0 a 3) da alternativa correta\n\
         - \"difficulty\": \"easy\", \"medium\", \"hard\" ou \"million\"\n\
         - \"correct_details\": breve explicação da resposta",
        amount = request.amount(),
        topic = request.topic(),
    )
}

fn extract_text(body: &str) -> Result<String, GeminiError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| GeminiError::InvalidJson(e.to_string()))?;
    response
        .candidates
        .into_iter()
        .filter_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.text)
        .ok_or(GeminiError::EmptyResponse)
}

/// Remove a surrounding markdown code fence (```json ... ```), if any
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening line.
    let rest = match rest.split_once('\n') {
        Some((_, body)) => body,
        None => rest.strip_prefix("json").unwrap_or(rest),
    };
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

pub fn parse_questions(reply: &str) -> Result<Vec<QuestionRecord>, GeminiError> {
    serde_json::from_str(strip_code_fences(reply))
        .map_err(|e| GeminiError::InvalidJson(e.to_string()))
}
