//! Generate questions use case
//!
//! Asks the [`QuestionGenerator`] for new questions on a topic and optionally
//! saves them through the [`QuestionStore`]. When the generator fails or
//! returns nothing usable, a clearly flagged mock batch is returned instead,
//! so the caller always has something to show.

use crate::ports::question_generator::QuestionGenerator;
use crate::ports::question_source::QuestionRecord;
use crate::ports::question_store::QuestionStore;
use milhao_domain::util::truncate_chars;
use milhao_domain::{
    Difficulty, DifficultyPreference, GeneratedBatch, GenerationRequest, QuestionDraft,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Number of questions in the fallback batch
const MOCK_BATCH_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct GenerateQuestionsInput {
    pub request: GenerationRequest,
    /// Persist accepted questions through the store
    pub save: bool,
}

impl GenerateQuestionsInput {
    pub fn new(request: GenerationRequest) -> Self {
        Self {
            request,
            save: false,
        }
    }

    pub fn with_save(mut self, save: bool) -> Self {
        self.save = save;
        self
    }
}

/// Outcome of saving a batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveReport {
    pub saved: usize,
    pub errors: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct GenerateQuestionsOutput {
    pub batch: GeneratedBatch,
    /// Generated records that failed validation, with the reason
    pub rejected: Vec<String>,
    /// Present when saving was requested
    pub save_report: Option<SaveReport>,
}

pub struct GenerateQuestionsUseCase<G, S>
where
    G: QuestionGenerator + ?Sized,
    S: QuestionStore + ?Sized,
{
    generator: Arc<G>,
    store: Arc<S>,
}

impl<G, S> GenerateQuestionsUseCase<G, S>
where
    G: QuestionGenerator + ?Sized,
    S: QuestionStore + ?Sized,
{
    pub fn new(generator: Arc<G>, store: Arc<S>) -> Self {
        Self { generator, store }
    }

    pub async fn execute(&self, input: GenerateQuestionsInput) -> GenerateQuestionsOutput {
        let request = &input.request;
        info!(
            topic = request.topic(),
            amount = request.amount(),
            difficulty = %request.difficulty(),
            "Generating questions"
        );

        let (batch, rejected) = match self.generator.generate(request).await {
            Ok(records) => {
                let (mut drafts, rejected) = validate_generated(records);
                drafts.truncate(usize::from(request.amount()));
                if drafts.is_empty() {
                    warn!("Generator returned no valid questions, using mock batch");
                    (
                        mock_batch(request.topic(), "generator returned no valid questions"),
                        rejected,
                    )
                } else {
                    (GeneratedBatch::generated(drafts), rejected)
                }
            }
            Err(e) => {
                warn!("Question generation failed, using mock batch: {}", e);
                (mock_batch(request.topic(), e.to_string()), Vec::new())
            }
        };

        let save_report = if input.save {
            Some(self.save(&batch).await)
        } else {
            None
        };

        GenerateQuestionsOutput {
            batch,
            rejected,
            save_report,
        }
    }

    async fn save(&self, batch: &GeneratedBatch) -> SaveReport {
        let mut report = SaveReport::default();
        if batch.is_mock {
            report
                .errors
                .push("mock questions are never saved".to_string());
            return report;
        }

        for draft in &batch.questions {
            match self.store.insert(draft).await {
                Ok(()) => report.saved += 1,
                Err(e) => {
                    warn!("Failed to save question: {}", e);
                    report
                        .errors
                        .push(format!("{}: {}", truncate_chars(&draft.text, 40), e));
                }
            }
        }
        info!(
            saved = report.saved,
            failed = report.errors.len(),
            "Generated questions saved"
        );
        report
    }
}

fn validate_generated(records: Vec<QuestionRecord>) -> (Vec<QuestionDraft>, Vec<String>) {
    let mut drafts = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();
    for record in records {
        match record.to_draft() {
            Ok(draft) => drafts.push(draft),
            Err(e) => rejected.push(format!("{}: {}", truncate_chars(&record.text, 40), e)),
        }
    }
    (drafts, rejected)
}

/// Sample questions mentioning the topic, flagged as mock
fn mock_batch(topic: &str, reason: impl Into<String>) -> GeneratedBatch {
    let questions = (1..=MOCK_BATCH_SIZE)
        .map(|n| QuestionDraft {
            text: format!("(MOCK) Pergunta {} sobre {}?", n, topic),
            options: [
                "Opção A".to_string(),
                "Opção B".to_string(),
                "Opção C".to_string(),
                "Opção D".to_string(),
            ],
            correct_option: (n - 1) % 4,
            difficulty: Difficulty::ALL[(n - 1) % 3],
            correct_details: Some(format!(
                "Pergunta de exemplo gerada sem IA sobre {}.",
                topic
            )),
        })
        .collect();
    GeneratedBatch::mock(questions, reason)
}

impl std::fmt::Display for GenerateQuestionsOutput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.batch.is_mock { "mock" } else { "generated" };
        write!(f, "{} {} questions", self.batch.questions.len(), kind)?;
        if let Some(report) = &self.save_report {
            write!(f, ", {} saved", report.saved)?;
        }
        Ok(())
    }
}

/// Build a request from loose CLI values; no difficulty means a mix.
pub fn build_request(
    topic: &str,
    amount: u8,
    difficulty: Option<Difficulty>,
) -> Result<GenerationRequest, milhao_domain::DomainError> {
    let preference = difficulty.map_or(DifficultyPreference::Mix, DifficultyPreference::Only);
    GenerationRequest::try_new(topic, amount, preference)
}
