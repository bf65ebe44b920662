//! Infrastructure layer for show-do-milhao
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod questions;
pub mod results;
pub mod supabase;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileOutputConfig, MatchSinkKind,
    QuestionSourceKind,
};
pub use gemini::{GeminiError, GeminiQuestionGenerator};
pub use questions::JsonFileQuestionSource;
pub use results::JsonlMatchSink;
pub use supabase::{
    SupabaseClient, SupabaseError, SupabaseMatchSink, SupabaseQuestionSource,
    SupabaseQuestionStore,
};
