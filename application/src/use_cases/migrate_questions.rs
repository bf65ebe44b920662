//! Migrate questions use case
//!
//! Copies the built-in question set into the [`QuestionStore`], one insert
//! per question. Individual failures are reported and skipped.

use crate::ports::question_store::QuestionStore;
use milhao_domain::util::truncate_chars;
use milhao_domain::{Question, builtin_questions};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub migrated: usize,
    pub failed: usize,
    /// One line per failed question
    pub errors: Vec<String>,
}

pub struct MigrateQuestionsUseCase<S: QuestionStore + ?Sized> {
    store: Arc<S>,
    questions: Vec<Question>,
}

impl<S: QuestionStore + ?Sized> MigrateQuestionsUseCase<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            questions: builtin_questions(),
        }
    }

    pub async fn execute(&self) -> MigrationReport {
        let mut report = MigrationReport::default();

        for question in &self.questions {
            let label = truncate_chars(question.text(), 40);
            match self.store.insert(question.draft()).await {
                Ok(()) => {
                    info!(id = %question.id(), "Migrated: {}", label);
                    report.migrated += 1;
                }
                Err(e) => {
                    warn!(id = %question.id(), "Failed to migrate {}: {}", label, e);
                    report.failed += 1;
                    report.errors.push(format!("{}: {}", label, e));
                }
            }
        }

        info!(
            migrated = report.migrated,
            failed = report.failed,
            "Migration finished"
        );
        report
    }
}
