//! JSON file question source
//!
//! Reads a JSON array of question records, the same shape the `questions`
//! table uses:
//!
//! ```json
//! [{"id": 1, "text": "...", "options": ["A","B","C","D"],
//!   "correct_option": 0, "difficulty": "easy", "correct_details": "..."}]
//! ```

use async_trait::async_trait;
use milhao_application::{QuestionRecord, QuestionSource, SourceError};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct JsonFileQuestionSource {
    path: PathBuf,
}

impl JsonFileQuestionSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionSource for JsonFileQuestionSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch(&self) -> Result<Vec<QuestionRecord>, SourceError> {
        debug!(path = %self.path.display(), "Reading question file");
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            SourceError::Unavailable(format!("{}: {}", self.path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            SourceError::Malformed(format!("{}: {}", self.path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_reads_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("perguntas.json");
        std::fs::write(
            &path,
            r#"[
                {"id": 1, "text": "Quem?", "options": ["A","B","C","D"],
                 "correct_option": 1, "difficulty": "easy"},
                {"id": "x", "text": "", "options": ["A"], "correct_option": 0,
                 "difficulty": "hard"}
            ]"#,
        )
        .unwrap();

        let records = JsonFileQuestionSource::new(&path).fetch().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].correct_option, 1);
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileQuestionSource::new(dir.path().join("nope.json"));
        assert!(matches!(
            source.fetch().await,
            Err(SourceError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            JsonFileQuestionSource::new(&path).fetch().await,
            Err(SourceError::Malformed(_))
        ));
    }
}
