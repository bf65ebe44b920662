//! Question entities

use super::difficulty::Difficulty;
use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of options every question offers
pub const OPTION_COUNT: usize = 4;

/// Identifier of a question (Value Object)
///
/// Question stores hand out either integer or text ids depending on how the
/// table was created, so both forms deserialize into the same textual id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuestionId(String);

impl QuestionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for QuestionId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for QuestionId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for QuestionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(i64),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Int(n) => Self(n.to_string()),
            RawId::Text(s) => Self(s),
        })
    }
}

/// A validated question without an identity yet
///
/// Produced by the question generator and by record parsing; becomes a
/// [`Question`] once it has an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionDraft {
    pub text: String,
    pub options: [String; OPTION_COUNT],
    pub correct_option: usize,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_details: Option<String>,
}

impl QuestionDraft {
    /// Validate raw question fields.
    ///
    /// Rejects blank text, anything other than exactly four options, and a
    /// correct index outside `0..4`.
    pub fn try_new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_option: i64,
        difficulty: Difficulty,
        correct_details: Option<String>,
    ) -> Result<Self, DomainError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(DomainError::InvalidQuestion("text is empty".to_string()));
        }

        let count = options.len();
        let options: [String; OPTION_COUNT] = options.try_into().map_err(|_| {
            DomainError::InvalidQuestion(format!(
                "expected {} options, got {}",
                OPTION_COUNT, count
            ))
        })?;

        let correct_option = usize::try_from(correct_option)
            .ok()
            .filter(|i| *i < OPTION_COUNT)
            .ok_or_else(|| {
                DomainError::InvalidQuestion(format!(
                    "correct option {} is out of range",
                    correct_option
                ))
            })?;

        let correct_details = correct_details.filter(|d| !d.trim().is_empty());

        Ok(Self {
            text,
            options,
            correct_option,
            difficulty,
            correct_details,
        })
    }

    /// Attach an identity
    pub fn with_id(self, id: impl Into<QuestionId>) -> Question {
        Question {
            id: id.into(),
            draft: self,
        }
    }
}

/// A question in the pool (Entity)
///
/// Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    draft: QuestionDraft,
}

impl Question {
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.draft.text
    }

    pub fn options(&self) -> &[String; OPTION_COUNT] {
        &self.draft.options
    }

    pub fn correct_option(&self) -> usize {
        self.draft.correct_option
    }

    pub fn difficulty(&self) -> Difficulty {
        self.draft.difficulty
    }

    pub fn correct_details(&self) -> Option<&str> {
        self.draft.correct_details.as_deref()
    }

    /// Text of the correct option
    pub fn correct_answer(&self) -> &str {
        &self.draft.options[self.draft.correct_option]
    }

    /// Indices of the three incorrect options, in order
    pub fn wrong_options(&self) -> Vec<usize> {
        (0..OPTION_COUNT)
            .filter(|i| *i != self.draft.correct_option)
            .collect()
    }

    pub fn draft(&self) -> &QuestionDraft {
        &self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["A".into(), "B".into(), "C".into(), "D".into()]
    }

    #[test]
    fn test_valid_draft() {
        let draft =
            QuestionDraft::try_new("Quem?", options(), 2, Difficulty::Easy, None).unwrap();
        assert_eq!(draft.correct_option, 2);
        assert_eq!(draft.options[3], "D");
    }

    #[test]
    fn test_rejects_blank_text() {
        let err = QuestionDraft::try_new("   ", options(), 0, Difficulty::Easy, None).unwrap_err();
        assert!(matches!(err, DomainError::InvalidQuestion(_)));
    }

    #[test]
    fn test_rejects_wrong_option_count() {
        let three = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let err = QuestionDraft::try_new("Quem?", three, 0, Difficulty::Easy, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid question: expected 4 options, got 3"
        );
    }

    #[test]
    fn test_rejects_out_of_range_correct_option() {
        assert!(QuestionDraft::try_new("Quem?", options(), 4, Difficulty::Easy, None).is_err());
        assert!(QuestionDraft::try_new("Quem?", options(), -1, Difficulty::Easy, None).is_err());
    }

    #[test]
    fn test_blank_details_dropped() {
        let draft = QuestionDraft::try_new(
            "Quem?",
            options(),
            0,
            Difficulty::Easy,
            Some("  ".to_string()),
        )
        .unwrap();
        assert!(draft.correct_details.is_none());
    }

    #[test]
    fn test_question_accessors() {
        let q = QuestionDraft::try_new(
            "Quem?",
            options(),
            1,
            Difficulty::Hard,
            Some("Porque sim".to_string()),
        )
        .unwrap()
        .with_id(7u64);

        assert_eq!(q.id().as_str(), "7");
        assert_eq!(q.correct_answer(), "B");
        assert_eq!(q.wrong_options(), vec![0, 2, 3]);
        assert_eq!(q.correct_details(), Some("Porque sim"));
        assert_eq!(q.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_question_id_accepts_int_and_text() {
        let from_int: QuestionId = serde_json::from_str("42").unwrap();
        let from_text: QuestionId = serde_json::from_str("\"42\"").unwrap();
        assert_eq!(from_int, from_text);

        let uuid: QuestionId =
            serde_json::from_str("\"0b7c3a8e-6f5d-4c1a-9e2b-1f0a9d8c7b6a\"").unwrap();
        assert_eq!(uuid.as_str(), "0b7c3a8e-6f5d-4c1a-9e2b-1f0a9d8c7b6a");
    }
}
