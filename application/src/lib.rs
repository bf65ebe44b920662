//! Application layer for show-do-milhao
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GameParams;
pub use ports::{
    match_sink::{MatchResultSink, NoMatchSink, SinkError},
    question_generator::{GeneratorError, NoQuestionGenerator, QuestionGenerator},
    question_source::{BuiltinQuestionSource, QuestionRecord, QuestionSource, SourceError},
    question_store::{NoQuestionStore, QuestionStore, StoreError},
};
pub use use_cases::game_controller::{GameController, GameHandle, GameIntent};
pub use use_cases::generate_questions::{
    GenerateQuestionsInput, GenerateQuestionsOutput, GenerateQuestionsUseCase, SaveReport,
    build_request,
};
pub use use_cases::load_questions::{
    FallbackReason, LoadQuestionsUseCase, LoadedQuestions, QuestionOrigin,
};
pub use use_cases::migrate_questions::{MigrateQuestionsUseCase, MigrationReport};
