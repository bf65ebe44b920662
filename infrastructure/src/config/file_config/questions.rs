//! Question source configuration from TOML (`[questions]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where questions are loaded from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSourceKind {
    #[default]
    Builtin,
    File,
    Supabase,
}

impl QuestionSourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionSourceKind::Builtin => "builtin",
            QuestionSourceKind::File => "file",
            QuestionSourceKind::Supabase => "supabase",
        }
    }
}

/// Raw question source configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileQuestionsConfig {
    pub source: QuestionSourceKind,
    /// JSON file, required for the `file` source
    pub path: Option<PathBuf>,
    /// Upper bound on the fetch before falling back to the built-in set
    pub fetch_timeout_secs: u64,
}

impl Default for FileQuestionsConfig {
    fn default() -> Self {
        Self {
            source: QuestionSourceKind::Builtin,
            path: None,
            fetch_timeout_secs: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_questions_section_deserialize() {
        let toml_str = r#"
[questions]
source = "file"
path = "perguntas.json"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.questions.source, QuestionSourceKind::File);
        assert_eq!(config.questions.path, Some(PathBuf::from("perguntas.json")));
        assert_eq!(config.questions.fetch_timeout_secs, 10);
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        let toml_str = r#"
[questions]
source = "mongodb"
"#;
        assert!(toml::from_str::<super::super::FileConfig>(toml_str).is_err());
    }
}
