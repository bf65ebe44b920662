//! Game parameters: session rules plus run-level settings.
//!
//! [`GameParams`] groups what the [`GameController`](crate::use_cases::game_controller::GameController)
//! needs beyond the session itself: who is playing, which game id results
//! are filed under, and how randomness is seeded.

use milhao_domain::{DEFAULT_GAME_ID, GameRules};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameParams {
    /// Time limit and reroll budget
    pub rules: GameRules,
    /// Identifier results are recorded under
    pub game_id: String,
    /// Player identity; `None` means anonymous play (nothing is recorded)
    pub user_id: Option<String>,
    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            rules: GameRules::default(),
            game_id: DEFAULT_GAME_ID.to_string(),
            user_id: None,
            seed: None,
        }
    }
}

impl GameParams {
    // ==================== Builder Methods ====================

    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_game_id(mut self, game_id: impl Into<String>) -> Self {
        self.game_id = game_id.into();
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Random source for a new session: seeded when a seed is set,
    /// OS entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}
