//! Supabase adapter
//!
//! Implements the question source, match sink and question store ports
//! over Supabase's PostgREST API.

pub mod adapters;
pub mod client;
pub mod error;

pub use adapters::{SupabaseMatchSink, SupabaseQuestionSource, SupabaseQuestionStore};
pub use client::SupabaseClient;
pub use error::SupabaseError;
