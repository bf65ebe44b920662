//! Question pool and per-level selection

use super::difficulty::Difficulty;
use super::entities::{Question, QuestionId};
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;

/// The loaded question collection for one process run
///
/// Selection never mutates the pool; the session tracks which ids it has
/// already drawn and passes them in.
#[derive(Debug, Clone, Default)]
pub struct QuestionPool {
    questions: Vec<Question>,
}

impl QuestionPool {
    /// Build a pool, keeping only the first question for any repeated id
    pub fn from_questions(questions: Vec<Question>) -> Self {
        let mut seen = HashSet::new();
        let questions = questions
            .into_iter()
            .filter(|q| seen.insert(q.id().clone()))
            .collect();
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn count_by_difficulty(&self, difficulty: Difficulty) -> usize {
        self.questions
            .iter()
            .filter(|q| q.difficulty() == difficulty)
            .count()
    }

    /// Pick a question for `level` that is not in `used`.
    ///
    /// Draws uniformly among unused questions of the level's band. When the
    /// band is exhausted, falls back to any unused question regardless of
    /// difficulty. Returns `None` only when every question has been used
    /// (or the level is outside the ladder).
    pub fn select_for_level<R: Rng + ?Sized>(
        &self,
        level: u8,
        used: &HashSet<QuestionId>,
        rng: &mut R,
    ) -> Option<&Question> {
        let band = Difficulty::for_level(level)?;

        let candidates: Vec<&Question> = self
            .questions
            .iter()
            .filter(|q| q.difficulty() == band && !used.contains(q.id()))
            .collect();

        if let Some(question) = candidates.choose(rng) {
            return Some(*question);
        }

        let relaxed: Vec<&Question> = self
            .questions
            .iter()
            .filter(|q| !used.contains(q.id()))
            .collect();

        relaxed.choose(rng).copied()
    }
}
