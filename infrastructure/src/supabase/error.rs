//! Error types for the Supabase adapter

use milhao_application::{SinkError, SourceError, StoreError};
use thiserror::Error;

/// Result type alias for Supabase operations
pub type Result<T> = std::result::Result<T, SupabaseError>;

/// Errors that can occur when talking to the PostgREST API
#[derive(Error, Debug)]
pub enum SupabaseError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl From<SupabaseError> for SourceError {
    fn from(e: SupabaseError) -> Self {
        match e {
            SupabaseError::Decode(msg) => SourceError::Malformed(msg),
            SupabaseError::InvalidUrl(msg) => SourceError::Unavailable(msg),
            other => SourceError::RequestFailed(other.to_string()),
        }
    }
}

impl From<SupabaseError> for SinkError {
    fn from(e: SupabaseError) -> Self {
        match e {
            SupabaseError::Status { status, body } => SinkError::Rejected { status, body },
            other => SinkError::RequestFailed(other.to_string()),
        }
    }
}

impl From<SupabaseError> for StoreError {
    fn from(e: SupabaseError) -> Self {
        match e {
            SupabaseError::Status { status, body } => StoreError::Rejected { status, body },
            other => StoreError::RequestFailed(other.to_string()),
        }
    }
}
