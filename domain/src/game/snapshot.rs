//! Read-only session views for the rendering layer

use super::entities::{GameStatus, LossReason};
use crate::lifeline::effects::LifelineResult;
use crate::lifeline::entities::LifelineKind;
use crate::question::difficulty::Difficulty;
use crate::question::entities::{OPTION_COUNT, QuestionId};
use serde::Serialize;

/// One lifeline as the player sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LifelineView {
    pub kind: LifelineKind,
    pub available: bool,
    pub used: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses_left: Option<u8>,
}

/// Correct answer, revealed once the session is over
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerReveal {
    pub correct_option: usize,
    pub correct_answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_details: Option<String>,
}

/// The current question without its answer (while playing)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionView {
    pub id: QuestionId,
    pub text: String,
    pub options: [String; OPTION_COUNT],
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reveal: Option<AnswerReveal>,
}

/// Immutable snapshot of a session
///
/// `revision` grows with every applied transition; observers can use it to
/// tell fresh snapshots from repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub revision: u64,
    pub status: GameStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loss_reason: Option<LossReason>,
    pub current_level: u8,
    pub max_level: u8,
    pub current_prize: u64,
    pub stop_prize: u64,
    pub wrong_prize: u64,
    pub accumulated_money: u64,
    pub time_left: u32,
    pub time_limit: u32,
    pub lifelines: Vec<LifelineView>,
    pub eliminated_options: Vec<usize>,
    pub lifeline_result: Option<LifelineResult>,
    pub question: Option<QuestionView>,
    /// Playing, but no question could be drawn for the current level
    pub stalled: bool,
}

impl SessionSnapshot {
    pub fn is_option_eliminated(&self, index: usize) -> bool {
        self.eliminated_options.contains(&index)
    }

    pub fn lifeline(&self, kind: LifelineKind) -> Option<&LifelineView> {
        self.lifelines.iter().find(|l| l.kind == kind)
    }

    /// Only the countdown differs from `previous`
    pub fn is_tick_of(&self, previous: &SessionSnapshot) -> bool {
        self.time_left != previous.time_left
            && SessionSnapshot {
                revision: previous.revision,
                time_left: previous.time_left,
                ..self.clone()
            } == *previous
    }
}
