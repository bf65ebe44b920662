//! Lifeline entities

use serde::{Deserialize, Serialize};

/// Default number of rerolls per session run
pub const DEFAULT_REROLL_USES: u8 = 3;

/// The four lifelines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LifelineKind {
    /// Hide two wrong options
    EliminateTwo,
    /// Audience vote distribution
    CrowdVote,
    /// Single suggestion from an expert
    ExpertHint,
    /// Replace the question with another of the same level
    Reroll,
}

impl LifelineKind {
    pub const ALL: [LifelineKind; 4] = [
        LifelineKind::EliminateTwo,
        LifelineKind::CrowdVote,
        LifelineKind::ExpertHint,
        LifelineKind::Reroll,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LifelineKind::EliminateTwo => "eliminate-two",
            LifelineKind::CrowdVote => "crowd-vote",
            LifelineKind::ExpertHint => "expert-hint",
            LifelineKind::Reroll => "reroll",
        }
    }

    /// Label shown on the lifeline bar
    pub fn display_name(&self) -> &'static str {
        match self {
            LifelineKind::EliminateTwo => "Cortar Joio",
            LifelineKind::CrowdVote => "Irmãos",
            LifelineKind::ExpertHint => "Pastor",
            LifelineKind::Reroll => "Livramento",
        }
    }
}

impl std::fmt::Display for LifelineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Use budget of a lifeline
///
/// Single-use lifelines carry only a `used` flag; only a multi-use lifeline
/// has a remaining-uses counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "budget", rename_all = "snake_case")]
pub enum LifelineCharge {
    SingleUse { used: bool },
    MultiUse { uses_left: u8 },
}

impl LifelineCharge {
    pub fn single() -> Self {
        LifelineCharge::SingleUse { used: false }
    }

    pub fn multi(uses: u8) -> Self {
        LifelineCharge::MultiUse { uses_left: uses }
    }

    /// The budget is exhausted
    pub fn is_used(&self) -> bool {
        match self {
            LifelineCharge::SingleUse { used } => *used,
            LifelineCharge::MultiUse { uses_left } => *uses_left == 0,
        }
    }

    pub fn is_available(&self) -> bool {
        !self.is_used()
    }

    pub fn uses_left(&self) -> Option<u8> {
        match self {
            LifelineCharge::SingleUse { .. } => None,
            LifelineCharge::MultiUse { uses_left } => Some(*uses_left),
        }
    }

    /// Spend one use. Returns `false` (and changes nothing) when exhausted.
    pub fn consume(&mut self) -> bool {
        match self {
            LifelineCharge::SingleUse { used } if !*used => {
                *used = true;
                true
            }
            LifelineCharge::MultiUse { uses_left } if *uses_left > 0 => {
                *uses_left -= 1;
                true
            }
            _ => false,
        }
    }
}

/// Lifeline budgets for one session run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lifelines {
    eliminate_two: LifelineCharge,
    crowd_vote: LifelineCharge,
    expert_hint: LifelineCharge,
    reroll: LifelineCharge,
}

impl Default for Lifelines {
    fn default() -> Self {
        Self::new(DEFAULT_REROLL_USES)
    }
}

impl Lifelines {
    pub fn new(reroll_uses: u8) -> Self {
        Self {
            eliminate_two: LifelineCharge::single(),
            crowd_vote: LifelineCharge::single(),
            expert_hint: LifelineCharge::single(),
            reroll: LifelineCharge::multi(reroll_uses),
        }
    }

    pub fn get(&self, kind: LifelineKind) -> &LifelineCharge {
        match kind {
            LifelineKind::EliminateTwo => &self.eliminate_two,
            LifelineKind::CrowdVote => &self.crowd_vote,
            LifelineKind::ExpertHint => &self.expert_hint,
            LifelineKind::Reroll => &self.reroll,
        }
    }

    pub(crate) fn get_mut(&mut self, kind: LifelineKind) -> &mut LifelineCharge {
        match kind {
            LifelineKind::EliminateTwo => &mut self.eliminate_two,
            LifelineKind::CrowdVote => &mut self.crowd_vote,
            LifelineKind::ExpertHint => &mut self.expert_hint,
            LifelineKind::Reroll => &mut self.reroll,
        }
    }

    pub fn is_available(&self, kind: LifelineKind) -> bool {
        self.get(kind).is_available()
    }

    pub fn iter(&self) -> impl Iterator<Item = (LifelineKind, LifelineCharge)> + '_ {
        LifelineKind::ALL.into_iter().map(|k| (k, *self.get(k)))
    }
}
