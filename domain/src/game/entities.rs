//! Game session value objects

use crate::lifeline::entities::DEFAULT_REROLL_USES;
use serde::{Deserialize, Serialize};

/// Seconds allowed per question
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 30;

/// Lifecycle state of a session run
///
/// `Playing` is the only non-terminal state. Leaving a terminal state
/// requires a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
    Stopped,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::Playing => "playing",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
            GameStatus::Stopped => "stopped",
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a session ended in [`GameStatus::Lost`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LossReason {
    WrongAnswer,
    Timeout,
}

/// Tunable rules of a session run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    /// Countdown length per question, in seconds
    pub time_limit_secs: u32,
    /// Reroll budget per run
    pub reroll_uses: u8,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            reroll_uses: DEFAULT_REROLL_USES,
        }
    }
}

impl GameRules {
    pub fn with_time_limit(mut self, secs: u32) -> Self {
        self.time_limit_secs = secs;
        self
    }

    pub fn with_reroll_uses(mut self, uses: u8) -> Self {
        self.reroll_uses = uses;
        self
    }
}

/// What a session operation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Guard failed; nothing changed
    Ignored,
    /// State changed and the session is still playing
    Updated {
        /// A different question is now current (the countdown restarted)
        question_changed: bool,
    },
    /// The session just entered a terminal state
    Finished(GameStatus),
}

impl Transition {
    pub fn is_ignored(&self) -> bool {
        matches!(self, Transition::Ignored)
    }

    pub fn question_changed(&self) -> bool {
        matches!(
            self,
            Transition::Updated {
                question_changed: true
            }
        )
    }

    pub fn finished(&self) -> Option<GameStatus> {
        match self {
            Transition::Finished(status) => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!GameStatus::Playing.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
        assert!(GameStatus::Stopped.is_terminal());
    }

    #[test]
    fn test_default_rules() {
        let rules = GameRules::default();
        assert_eq!(rules.time_limit_secs, 30);
        assert_eq!(rules.reroll_uses, 3);
    }

    #[test]
    fn test_transition_helpers() {
        assert!(Transition::Ignored.is_ignored());
        assert!(
            Transition::Updated {
                question_changed: true
            }
            .question_changed()
        );
        assert!(
            !Transition::Updated {
                question_changed: false
            }
            .question_changed()
        );
        assert_eq!(
            Transition::Finished(GameStatus::Won).finished(),
            Some(GameStatus::Won)
        );
        assert_eq!(Transition::Ignored.finished(), None);
    }

    #[test]
    fn test_loss_reason_serialization() {
        assert_eq!(
            serde_json::to_string(&LossReason::Timeout).unwrap(),
            "\"timeout\""
        );
        assert_eq!(
            serde_json::to_string(&LossReason::WrongAnswer).unwrap(),
            "\"wrong-answer\""
        );
    }
}
