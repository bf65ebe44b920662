//! Questions and the pool they are drawn from.
//!
//! - [`entities::Question`] / [`entities::QuestionDraft`]: validated questions
//! - [`difficulty::Difficulty`]: difficulty bands and per-band lifeline tuning
//! - [`pool::QuestionPool`]: level-based random selection
//! - [`builtin::builtin_questions`]: the static fallback set
//! - [`generation`]: requests and batches for AI question generation

pub mod builtin;
pub mod difficulty;
pub mod entities;
pub mod generation;
pub mod pool;
