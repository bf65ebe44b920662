//! Game session aggregate
//!
//! [`GameSession`] is the single authoritative state of a playthrough. Every
//! mutating operation checks `status == Playing` first, so once a session is
//! terminal, late intents and late timer ticks are ignored until restart.

use super::entities::{GameRules, GameStatus, LossReason, Transition};
use super::match_result::{MatchMetadata, MatchResult};
use super::snapshot::{AnswerReveal, LifelineView, QuestionView, SessionSnapshot};
use crate::lifeline::effects::{self, LifelineResult};
use crate::lifeline::entities::{LifelineKind, Lifelines};
use crate::prize::ladder::{PrizeLadder, WIN_AMOUNT};
use crate::question::entities::{OPTION_COUNT, Question, QuestionId};
use crate::question::pool::QuestionPool;
use chrono::Utc;
use rand::rngs::StdRng;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

/// One playthrough of the ladder (Aggregate Root)
#[derive(Debug)]
pub struct GameSession {
    pool: Arc<QuestionPool>,
    ladder: PrizeLadder,
    rules: GameRules,
    rng: StdRng,

    current_level: u8,
    accumulated_money: u64,
    current_prize: u64,
    stop_prize: u64,
    wrong_prize: u64,
    status: GameStatus,
    loss_reason: Option<LossReason>,
    lifelines: Lifelines,
    eliminated_options: BTreeSet<usize>,
    lifeline_result: Option<LifelineResult>,
    time_left: u32,
    current_question: Option<Question>,
    used_question_ids: HashSet<QuestionId>,
    revision: u64,
}

impl GameSession {
    /// Start a new playthrough.
    ///
    /// Returns `None` when the pool cannot supply a level-1 question; the
    /// caller stays in its loading state.
    pub fn start(pool: Arc<QuestionPool>, rules: GameRules, rng: StdRng) -> Option<Self> {
        let mut session = Self {
            pool,
            ladder: PrizeLadder::standard(),
            rules,
            rng,
            current_level: 1,
            accumulated_money: 0,
            current_prize: 0,
            stop_prize: 0,
            wrong_prize: 0,
            status: GameStatus::Playing,
            loss_reason: None,
            lifelines: Lifelines::new(rules.reroll_uses),
            eliminated_options: BTreeSet::new(),
            lifeline_result: None,
            time_left: rules.time_limit_secs,
            current_question: None,
            used_question_ids: HashSet::new(),
            revision: 0,
        };
        session.reset().then_some(session)
    }

    /// Throw away the current run and begin a fresh one.
    ///
    /// Ignored (the old state is kept) when no level-1 question is available.
    pub fn restart(&mut self) -> Transition {
        if self.reset() {
            Transition::Updated {
                question_changed: true,
            }
        } else {
            Transition::Ignored
        }
    }

    fn reset(&mut self) -> bool {
        let Some(first_entry) = self.ladder.lookup(1) else {
            return false;
        };
        let Some(first) = self
            .pool
            .select_for_level(1, &HashSet::new(), &mut self.rng)
            .cloned()
        else {
            return false;
        };

        self.current_level = 1;
        self.accumulated_money = 0;
        self.current_prize = first_entry.prize;
        self.stop_prize = first_entry.stop;
        self.wrong_prize = first_entry.wrong;
        self.status = GameStatus::Playing;
        self.loss_reason = None;
        self.lifelines = Lifelines::new(self.rules.reroll_uses);
        self.eliminated_options.clear();
        self.lifeline_result = None;
        self.time_left = self.rules.time_limit_secs;
        self.used_question_ids = HashSet::from([first.id().clone()]);
        self.current_question = Some(first);
        self.revision += 1;
        true
    }

    /// Answer the current question with option `index` (0-based).
    pub fn answer(&mut self, index: usize) -> Transition {
        if self.status != GameStatus::Playing || index >= OPTION_COUNT {
            return Transition::Ignored;
        }
        let Some(question) = &self.current_question else {
            return Transition::Ignored;
        };

        if index != question.correct_option() {
            return self.lose(LossReason::WrongAnswer);
        }

        if self.current_level >= self.ladder.max_level() {
            self.status = GameStatus::Won;
            self.accumulated_money = WIN_AMOUNT;
            self.revision += 1;
            return Transition::Finished(GameStatus::Won);
        }

        self.advance()
    }

    fn advance(&mut self) -> Transition {
        let cleared = self.current_level;
        let next = cleared + 1;
        let (Some(cleared_entry), Some(next_entry)) =
            (self.ladder.lookup(cleared), self.ladder.lookup(next))
        else {
            return Transition::Ignored;
        };

        self.accumulated_money = cleared_entry.prize;
        self.current_level = next;
        self.current_prize = next_entry.prize;
        self.stop_prize = cleared_entry.stop;
        self.wrong_prize = next_entry.wrong;
        self.eliminated_options.clear();
        self.lifeline_result = None;
        self.time_left = self.rules.time_limit_secs;
        // None here leaves the session playing but stalled.
        self.current_question = self.draw(next);
        self.revision += 1;

        Transition::Updated {
            question_changed: true,
        }
    }

    /// Walk away with the stop prize.
    pub fn stop(&mut self) -> Transition {
        if self.status != GameStatus::Playing {
            return Transition::Ignored;
        }
        self.status = GameStatus::Stopped;
        self.accumulated_money = self.stop_prize;
        self.revision += 1;
        Transition::Finished(GameStatus::Stopped)
    }

    /// One second of the countdown. Expiry loses the session with the
    /// wrong-answer prize and a [`LossReason::Timeout`] marker.
    pub fn tick(&mut self) -> Transition {
        if self.status != GameStatus::Playing || self.current_question.is_none() {
            return Transition::Ignored;
        }
        if self.time_left <= 1 {
            return self.lose(LossReason::Timeout);
        }
        self.time_left -= 1;
        self.revision += 1;
        Transition::Updated {
            question_changed: false,
        }
    }

    fn lose(&mut self, reason: LossReason) -> Transition {
        self.status = GameStatus::Lost;
        self.loss_reason = Some(reason);
        self.accumulated_money = self.wrong_prize;
        if reason == LossReason::Timeout {
            self.time_left = 0;
        }
        self.revision += 1;
        Transition::Finished(GameStatus::Lost)
    }

    /// Apply a lifeline to the current question.
    ///
    /// Exhausted lifelines, a missing question and a reroll with nothing
    /// left to draw are silently ignored.
    pub fn use_lifeline(&mut self, kind: LifelineKind) -> Transition {
        if self.status != GameStatus::Playing || !self.lifelines.is_available(kind) {
            return Transition::Ignored;
        }
        let Some(question) = &self.current_question else {
            return Transition::Ignored;
        };
        let correct = question.correct_option();
        let difficulty = question.difficulty();

        match kind {
            LifelineKind::EliminateTwo => {
                let pair = effects::eliminate_two(correct, &mut self.rng);
                self.eliminated_options.extend(pair);
            }
            LifelineKind::ExpertHint => {
                let suggestion = effects::expert_hint(correct, difficulty, &mut self.rng);
                self.lifeline_result = Some(LifelineResult::ExpertHint { suggestion });
            }
            LifelineKind::CrowdVote => {
                let stats = effects::crowd_vote(correct, difficulty, &mut self.rng);
                self.lifeline_result = Some(LifelineResult::CrowdVote { stats });
            }
            LifelineKind::Reroll => return self.reroll(),
        }

        self.lifelines.get_mut(kind).consume();
        self.revision += 1;
        Transition::Updated {
            question_changed: false,
        }
    }

    fn reroll(&mut self) -> Transition {
        // The replaced question stays in the used set.
        let Some(replacement) = self.draw(self.current_level) else {
            return Transition::Ignored;
        };
        self.current_question = Some(replacement);
        self.eliminated_options.clear();
        self.lifeline_result = None;
        self.time_left = self.rules.time_limit_secs;
        self.lifelines.get_mut(LifelineKind::Reroll).consume();
        self.revision += 1;
        Transition::Updated {
            question_changed: true,
        }
    }

    /// Acknowledge the pending lifeline result.
    pub fn close_lifeline_modal(&mut self) -> Transition {
        if self.lifeline_result.take().is_none() {
            return Transition::Ignored;
        }
        self.revision += 1;
        Transition::Updated {
            question_changed: false,
        }
    }

    fn draw(&mut self, level: u8) -> Option<Question> {
        let question = self
            .pool
            .select_for_level(level, &self.used_question_ids, &mut self.rng)?
            .clone();
        self.used_question_ids.insert(question.id().clone());
        Some(question)
    }

    // ==================== Accessors ====================

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn loss_reason(&self) -> Option<LossReason> {
        self.loss_reason
    }

    pub fn current_level(&self) -> u8 {
        self.current_level
    }

    pub fn accumulated_money(&self) -> u64 {
        self.accumulated_money
    }

    pub fn current_prize(&self) -> u64 {
        self.current_prize
    }

    pub fn stop_prize(&self) -> u64 {
        self.stop_prize
    }

    pub fn wrong_prize(&self) -> u64 {
        self.wrong_prize
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn lifelines(&self) -> &Lifelines {
        &self.lifelines
    }

    pub fn eliminated_options(&self) -> &BTreeSet<usize> {
        &self.eliminated_options
    }

    pub fn lifeline_result(&self) -> Option<&LifelineResult> {
        self.lifeline_result.as_ref()
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_question.as_ref()
    }

    pub fn used_question_ids(&self) -> &HashSet<QuestionId> {
        &self.used_question_ids
    }

    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    pub fn ladder(&self) -> &PrizeLadder {
        &self.ladder
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Playing, but the pool ran dry for the current level
    pub fn is_stalled(&self) -> bool {
        self.status == GameStatus::Playing && self.current_question.is_none()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let terminal = self.status.is_terminal();
        let question = self.current_question.as_ref().map(|q| QuestionView {
            id: q.id().clone(),
            text: q.text().to_string(),
            options: q.options().clone(),
            difficulty: q.difficulty(),
            reveal: terminal.then(|| AnswerReveal {
                correct_option: q.correct_option(),
                correct_answer: q.correct_answer().to_string(),
                correct_details: q.correct_details().map(str::to_string),
            }),
        });

        SessionSnapshot {
            revision: self.revision,
            status: self.status,
            loss_reason: self.loss_reason,
            current_level: self.current_level,
            max_level: self.ladder.max_level(),
            current_prize: self.current_prize,
            stop_prize: self.stop_prize,
            wrong_prize: self.wrong_prize,
            accumulated_money: self.accumulated_money,
            time_left: self.time_left,
            time_limit: self.rules.time_limit_secs,
            lifelines: self
                .lifelines
                .iter()
                .map(|(kind, charge)| LifelineView {
                    kind,
                    available: charge.is_available(),
                    used: charge.is_used(),
                    uses_left: charge.uses_left(),
                })
                .collect(),
            eliminated_options: self.eliminated_options.iter().copied().collect(),
            lifeline_result: self.lifeline_result.clone(),
            question,
            stalled: self.is_stalled(),
        }
    }

    /// Persistable record of a finished run; `None` while still playing
    pub fn match_result(&self, user_id: &str, game_id: &str) -> Option<MatchResult> {
        if !self.status.is_terminal() {
            return None;
        }
        Some(MatchResult {
            user_id: user_id.to_string(),
            game_id: game_id.to_string(),
            score: self.accumulated_money,
            metadata: MatchMetadata {
                level: self.current_level,
            },
            status: self.status,
            finished_at: Utc::now(),
        })
    }
}
