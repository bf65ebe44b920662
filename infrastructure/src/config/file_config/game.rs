//! Game and player configuration from TOML (`[game]`, `[player]` sections)

use milhao_domain::{DEFAULT_GAME_ID, DEFAULT_REROLL_USES, DEFAULT_TIME_LIMIT_SECS, GameRules};
use serde::{Deserialize, Serialize};

/// Raw game configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGameConfig {
    /// Seconds per question
    pub time_limit_secs: u32,
    /// Reroll lifeline budget per run
    pub reroll_uses: u8,
    /// Identifier match results are recorded under
    pub game_id: String,
}

impl Default for FileGameConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            reroll_uses: DEFAULT_REROLL_USES,
            game_id: DEFAULT_GAME_ID.to_string(),
        }
    }
}

impl FileGameConfig {
    pub fn rules(&self) -> GameRules {
        GameRules::default()
            .with_time_limit(self.time_limit_secs)
            .with_reroll_uses(self.reroll_uses)
    }
}

/// Raw player configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePlayerConfig {
    /// Player identity; results are only recorded when set
    pub user_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_section_deserialize() {
        let toml_str = r#"
[game]
time_limit_secs = 45
reroll_uses = 1
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.game.time_limit_secs, 45);
        assert_eq!(config.game.reroll_uses, 1);
        assert_eq!(config.game.game_id, "show-do-milhao");

        let rules = config.game.rules();
        assert_eq!(rules.time_limit_secs, 45);
        assert_eq!(rules.reroll_uses, 1);
    }

    #[test]
    fn test_player_section_deserialize() {
        let toml_str = r#"
[player]
user_id = "8c1f"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.player.user_id.as_deref(), Some("8c1f"));
    }
}
