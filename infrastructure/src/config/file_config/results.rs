//! Match result configuration from TOML (`[results]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where finished matches are recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSinkKind {
    #[default]
    None,
    Jsonl,
    Supabase,
}

impl MatchSinkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchSinkKind::None => "none",
            MatchSinkKind::Jsonl => "jsonl",
            MatchSinkKind::Supabase => "supabase",
        }
    }
}

/// Raw results configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileResultsConfig {
    pub sink: MatchSinkKind,
    /// JSONL file for the `jsonl` sink; defaults to the data directory
    pub path: Option<PathBuf>,
}

impl FileResultsConfig {
    /// Path for the JSONL sink: the configured one, or
    /// `$XDG_DATA_HOME/show-do-milhao/matches.jsonl`.
    pub fn jsonl_path(&self) -> Option<PathBuf> {
        self.path.clone().or_else(|| {
            dirs::data_dir().map(|d| d.join("show-do-milhao").join("matches.jsonl"))
        })
    }
}
