//! Load questions use case
//!
//! Builds the [`QuestionPool`] for a process run. The configured source is
//! tried first; whenever it cannot deliver at least one valid question (it
//! errors, times out, returns nothing, or returns only malformed records)
//! the built-in set is used instead, so the game always stays playable.

use crate::ports::question_source::{QuestionRecord, QuestionSource, SourceError};
use milhao_domain::{Question, QuestionId, QuestionPool, builtin_questions};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Why the built-in set was used instead of the configured source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    SourceFailed(String),
    Empty,
    AllInvalid { dropped: usize },
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackReason::SourceFailed(e) => write!(f, "source failed: {}", e),
            FallbackReason::Empty => write!(f, "source returned no questions"),
            FallbackReason::AllInvalid { dropped } => {
                write!(f, "all {} records were invalid", dropped)
            }
        }
    }
}

/// Where the loaded pool came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionOrigin {
    Source { name: String },
    Builtin { reason: FallbackReason },
}

/// Result of loading
#[derive(Debug, Clone)]
pub struct LoadedQuestions {
    pub pool: Arc<QuestionPool>,
    pub origin: QuestionOrigin,
    /// Records rejected by validation
    pub dropped: usize,
}

pub struct LoadQuestionsUseCase<S: QuestionSource + ?Sized> {
    source: Arc<S>,
    timeout: Option<Duration>,
}

impl<S: QuestionSource + ?Sized> LoadQuestionsUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            timeout: None,
        }
    }

    /// Bound the fetch; an elapsed timeout counts as a source failure.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub async fn execute(&self) -> LoadedQuestions {
        let name = self.source.name().to_string();
        debug!(source = %name, "Fetching questions");

        let records = match self.fetch().await {
            Ok(records) => records,
            Err(e) => {
                warn!(source = %name, "Question source failed, using built-in set: {}", e);
                return Self::fallback(FallbackReason::SourceFailed(e.to_string()), 0);
            }
        };

        if records.is_empty() {
            warn!(source = %name, "Question source is empty, using built-in set");
            return Self::fallback(FallbackReason::Empty, 0);
        }

        let (questions, dropped) = validate_records(records);
        if questions.is_empty() {
            warn!(
                source = %name,
                dropped, "No valid questions in source, using built-in set"
            );
            return Self::fallback(FallbackReason::AllInvalid { dropped }, dropped);
        }

        let pool = QuestionPool::from_questions(questions);
        info!(source = %name, questions = pool.len(), dropped, "Questions loaded");

        LoadedQuestions {
            pool: Arc::new(pool),
            origin: QuestionOrigin::Source { name },
            dropped,
        }
    }

    async fn fetch(&self) -> Result<Vec<QuestionRecord>, SourceError> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.source.fetch())
                .await
                .map_err(|_| SourceError::Timeout(limit.as_secs()))?,
            None => self.source.fetch().await,
        }
    }

    fn fallback(reason: FallbackReason, dropped: usize) -> LoadedQuestions {
        LoadedQuestions {
            pool: Arc::new(QuestionPool::from_questions(builtin_questions())),
            origin: QuestionOrigin::Builtin { reason },
            dropped,
        }
    }
}

/// Keep the records that form valid questions; returns them with the number
/// of dropped records. Records without an id get one from their position.
pub fn validate_records(records: Vec<QuestionRecord>) -> (Vec<Question>, usize) {
    let mut questions = Vec::with_capacity(records.len());
    let mut dropped = 0;

    for (index, record) in records.into_iter().enumerate() {
        let id = record
            .id
            .clone()
            .unwrap_or_else(|| QuestionId::new(format!("record-{}", index)));
        match record.to_draft() {
            Ok(draft) => questions.push(draft.with_id(id)),
            Err(e) => {
                warn!(id = %id, "Dropping invalid question: {}", e);
                dropped += 1;
            }
        }
    }

    (questions, dropped)
}
