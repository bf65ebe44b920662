//! Difficulty band value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Difficulty band of a question
///
/// Each ladder level draws from exactly one band:
///
/// | Levels | Band |
/// |--------|------|
/// | 1-5 | `easy` |
/// | 6-10 | `medium` |
/// | 11-15 | `hard` |
/// | 16 | `million` |
///
/// The band also tunes the hint lifelines: harder questions make the expert
/// less reliable and the crowd less confident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Million,
}

impl Difficulty {
    /// All bands, easiest first
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Million,
    ];

    /// Map a ladder level to its band. Returns `None` outside 1..=16.
    pub fn for_level(level: u8) -> Option<Self> {
        match level {
            1..=5 => Some(Difficulty::Easy),
            6..=10 => Some(Difficulty::Medium),
            11..=15 => Some(Difficulty::Hard),
            16 => Some(Difficulty::Million),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Million => "million",
        }
    }

    /// Probability that the expert-hint lifeline suggests a wrong option
    pub fn expert_error_chance(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.10,
            Difficulty::Medium => 0.30,
            Difficulty::Hard => 0.60,
            Difficulty::Million => 0.80,
        }
    }

    /// Share of the crowd vote (in whole percent) that goes to the correct option
    pub fn crowd_confidence_percent(&self) -> u8 {
        match self {
            Difficulty::Easy => 70,
            Difficulty::Medium => 50,
            Difficulty::Hard | Difficulty::Million => 30,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "million" => Ok(Difficulty::Million),
            other => Err(DomainError::InvalidDifficulty(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bands() {
        for level in 1..=5 {
            assert_eq!(Difficulty::for_level(level), Some(Difficulty::Easy));
        }
        for level in 6..=10 {
            assert_eq!(Difficulty::for_level(level), Some(Difficulty::Medium));
        }
        for level in 11..=15 {
            assert_eq!(Difficulty::for_level(level), Some(Difficulty::Hard));
        }
        assert_eq!(Difficulty::for_level(16), Some(Difficulty::Million));
    }

    #[test]
    fn test_level_out_of_range() {
        assert_eq!(Difficulty::for_level(0), None);
        assert_eq!(Difficulty::for_level(17), None);
    }

    #[test]
    fn test_lifeline_tuning() {
        assert_eq!(Difficulty::Easy.expert_error_chance(), 0.10);
        assert_eq!(Difficulty::Million.expert_error_chance(), 0.80);
        assert_eq!(Difficulty::Easy.crowd_confidence_percent(), 70);
        assert_eq!(Difficulty::Medium.crowd_confidence_percent(), 50);
        assert_eq!(Difficulty::Hard.crowd_confidence_percent(), 30);
        assert_eq!(Difficulty::Million.crowd_confidence_percent(), 30);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("EASY".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!(" Million ".parse::<Difficulty>().unwrap(), Difficulty::Million);
        assert!("legendary".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Hard).unwrap(),
            "\"hard\""
        );
        let parsed: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, Difficulty::Medium);
    }
}
