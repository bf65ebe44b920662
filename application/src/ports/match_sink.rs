//! Match result sink port
//!
//! Write-only destination for finished matches. Recording is best-effort:
//! the game controller logs failures and never shows them to the player.

use async_trait::async_trait;
use milhao_domain::MatchResult;
use thiserror::Error;

/// Errors that can occur while recording a match
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Destination for finished match results
#[async_trait]
pub trait MatchResultSink: Send + Sync {
    /// Short name for diagnostics
    fn name(&self) -> &str;

    /// Append one finished match
    async fn record(&self, result: &MatchResult) -> Result<(), SinkError>;
}

/// No-op implementation for anonymous play and tests.
pub struct NoMatchSink;

#[async_trait]
impl MatchResultSink for NoMatchSink {
    fn name(&self) -> &str {
        "none"
    }

    async fn record(&self, _result: &MatchResult) -> Result<(), SinkError> {
        Ok(())
    }
}
