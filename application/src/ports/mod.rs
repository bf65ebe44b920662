//! Port definitions (interfaces for adapters)
//!
//! Ports define the boundaries between the application layer and the
//! infrastructure layer. Adapters in the infrastructure layer implement them.

pub mod match_sink;
pub mod question_generator;
pub mod question_source;
pub mod question_store;
