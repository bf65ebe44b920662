//! Configuration file loading for show-do-milhao
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment variables prefixed `MILHAO_` (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./milhao.toml` or `./.milhao.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/show-do-milhao/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_GENERATOR_ENDPOINT, DEFAULT_GENERATOR_MODEL, FileConfig,
    FileGameConfig, FileGeneratorConfig, FileLoggingConfig, FileOutputConfig, FilePlayerConfig,
    FileQuestionsConfig, FileResultsConfig, FileSupabaseConfig, MatchSinkKind,
    QuestionSourceKind,
};
pub use loader::ConfigLoader;
