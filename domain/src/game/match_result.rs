//! Finished-match record

use super::entities::GameStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Game identifier used when none is configured
pub const DEFAULT_GAME_ID: &str = "show-do-milhao";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchMetadata {
    /// Level the player was facing when the session ended
    pub level: u8,
}

/// Outcome of one finished session run, as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub user_id: String,
    pub game_id: String,
    pub score: u64,
    pub metadata: MatchMetadata,
    pub status: GameStatus,
    pub finished_at: DateTime<Utc>,
}
