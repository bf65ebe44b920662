//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod game;
mod output;
mod questions;
mod results;
mod services;

pub use game::{FileGameConfig, FilePlayerConfig};
pub use output::{FileLoggingConfig, FileOutputConfig};
pub use questions::{FileQuestionsConfig, QuestionSourceKind};
pub use results::{FileResultsConfig, MatchSinkKind};
pub use services::{
    DEFAULT_GENERATOR_ENDPOINT, DEFAULT_GENERATOR_MODEL, FileGeneratorConfig, FileSupabaseConfig,
};

use milhao_application::GameParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("game.time_limit_secs cannot be 0")]
    ZeroTimeLimit,

    #[error("game.game_id cannot be empty")]
    EmptyGameId,

    #[error("questions.path is required when questions.source = \"file\"")]
    MissingQuestionsPath,

    #[error("supabase.url and supabase.key are required for {0}")]
    MissingSupabaseCredentials(&'static str),

    #[error("questions.fetch_timeout_secs cannot be 0")]
    ZeroFetchTimeout,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub game: FileGameConfig,
    pub questions: FileQuestionsConfig,
    pub results: FileResultsConfig,
    pub player: FilePlayerConfig,
    pub supabase: FileSupabaseConfig,
    pub generator: FileGeneratorConfig,
    pub output: FileOutputConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration, returning the first problem found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.game.time_limit_secs == 0 {
            return Err(ConfigValidationError::ZeroTimeLimit);
        }
        if self.game.game_id.trim().is_empty() {
            return Err(ConfigValidationError::EmptyGameId);
        }
        if self.questions.fetch_timeout_secs == 0 {
            return Err(ConfigValidationError::ZeroFetchTimeout);
        }
        if self.questions.source == QuestionSourceKind::File && self.questions.path.is_none() {
            return Err(ConfigValidationError::MissingQuestionsPath);
        }

        let has_supabase = self.supabase.credentials().is_some();
        if self.questions.source == QuestionSourceKind::Supabase && !has_supabase {
            return Err(ConfigValidationError::MissingSupabaseCredentials(
                "questions.source",
            ));
        }
        if self.results.sink == MatchSinkKind::Supabase && !has_supabase {
            return Err(ConfigValidationError::MissingSupabaseCredentials(
                "results.sink",
            ));
        }
        Ok(())
    }

    /// Application-level game parameters
    pub fn game_params(&self, seed: Option<u64>) -> GameParams {
        let mut params = GameParams::default()
            .with_rules(self.game.rules())
            .with_game_id(self.game.game_id.clone())
            .with_seed(seed);
        if let Some(user_id) = self.player.user_id.as_deref().filter(|u| !u.trim().is_empty()) {
            params = params.with_user_id(user_id);
        }
        params
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.questions.fetch_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.questions.source, QuestionSourceKind::Builtin);
        assert_eq!(config.results.sink, MatchSinkKind::None);
        assert!(config.output.color);
    }

    #[test]
    fn test_full_config_deserialize() {
        let toml_str = r#"
[game]
time_limit_secs = 20
game_id = "milhao-biblico"

[questions]
source = "supabase"
fetch_timeout_secs = 3

[results]
sink = "supabase"

[player]
user_id = "abc"

[supabase]
url = "https://proj.supabase.co"
key = "anon-key"

[generator]
api_key = "g-key"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_ok());

        let params = config.game_params(Some(7));
        assert_eq!(params.rules.time_limit_secs, 20);
        assert_eq!(params.rules.reroll_uses, 3);
        assert_eq!(params.game_id, "milhao-biblico");
        assert_eq!(params.user_id.as_deref(), Some("abc"));
        assert_eq!(params.seed, Some(7));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(3));
        assert_eq!(config.generator.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_validate_rejects_zero_time_limit() {
        let mut config = FileConfig::default();
        config.game.time_limit_secs = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::ZeroTimeLimit));
    }

    #[test]
    fn test_validate_rejects_file_source_without_path() {
        let mut config = FileConfig::default();
        config.questions.source = QuestionSourceKind::File;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::MissingQuestionsPath)
        );

        config.questions.path = Some(PathBuf::from("q.json"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_supabase_without_credentials() {
        let mut config = FileConfig::default();
        config.results.sink = MatchSinkKind::Supabase;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::MissingSupabaseCredentials(
                "results.sink"
            ))
        );
    }

    #[test]
    fn test_blank_user_id_means_anonymous() {
        let mut config = FileConfig::default();
        config.player.user_id = Some("   ".to_string());
        assert!(config.game_params(None).user_id.is_none());
    }
}
