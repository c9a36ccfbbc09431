//! Wizard difficulty level and the article length policy it selects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Difficulty tier chosen once per session on the intro screen.
///
/// Drives the category list, the event-summary choices, and the
/// length targets handed to the text generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WizardLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl WizardLevel {
    /// All levels in display order
    pub fn all() -> &'static [WizardLevel] {
        &[
            WizardLevel::Beginner,
            WizardLevel::Intermediate,
            WizardLevel::Advanced,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WizardLevel::Beginner => "Beginner",
            WizardLevel::Intermediate => "Intermediate",
            WizardLevel::Advanced => "Advanced",
        }
    }

    /// Badge color used by the printed page.
    pub fn badge_color(&self) -> &'static str {
        match self {
            WizardLevel::Beginner => "#6366F1",
            WizardLevel::Intermediate => "#10B981",
            WizardLevel::Advanced => "#F59E0B",
        }
    }

    pub fn length_policy(&self) -> LengthPolicy {
        match self {
            WizardLevel::Beginner => LengthPolicy {
                paragraphs: "2-3",
                sentences: "3-4 sentences per paragraph",
                style: "short and simple sentences, easy vocabulary",
                min_words: 100,
                max_words: 150,
                max_tokens: 500,
            },
            WizardLevel::Intermediate => LengthPolicy {
                paragraphs: "3-4",
                sentences: "4-5 sentences per paragraph",
                style: "moderate length sentences, intermediate vocabulary",
                min_words: 200,
                max_words: 300,
                max_tokens: 800,
            },
            WizardLevel::Advanced => LengthPolicy {
                paragraphs: "4-5",
                sentences: "5-6 sentences per paragraph",
                style: "longer sentences with more complex structures, advanced vocabulary",
                min_words: 350,
                max_words: 500,
                max_tokens: 1200,
            },
        }
    }
}

impl fmt::Display for WizardLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WizardLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            other => Err(DomainError::parse(format!("Unknown wizard level: {}", other))),
        }
    }
}

/// Length targets for a generated article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthPolicy {
    /// Paragraph count range, e.g. "2-3"
    pub paragraphs: &'static str,
    /// Sentences per paragraph, e.g. "3-4 sentences per paragraph"
    pub sentences: &'static str,
    /// Vocabulary and sentence style guidance
    pub style: &'static str,
    pub min_words: usize,
    pub max_words: usize,
    /// Completion token cap sent with the request
    pub max_tokens: u32,
}

impl LengthPolicy {
    pub fn word_range(&self) -> (usize, usize) {
        (self.min_words, self.max_words)
    }

    /// Whether a word count falls inside the inclusive target band.
    pub fn accepts(&self, word_count: usize) -> bool {
        (self.min_words..=self.max_words).contains(&word_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("beginner".parse::<WizardLevel>().unwrap(), WizardLevel::Beginner);
        assert_eq!(" Advanced ".parse::<WizardLevel>().unwrap(), WizardLevel::Advanced);
        assert!("expert".parse::<WizardLevel>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for level in WizardLevel::all() {
            assert_eq!(level.to_string().parse::<WizardLevel>().unwrap(), *level);
        }
    }

    #[test]
    fn test_length_policy_bands() {
        let beginner = WizardLevel::Beginner.length_policy();
        assert_eq!(beginner.paragraphs, "2-3");
        assert_eq!(beginner.sentences, "3-4 sentences per paragraph");
        assert_eq!(beginner.word_range(), (100, 150));

        let intermediate = WizardLevel::Intermediate.length_policy();
        assert_eq!(intermediate.paragraphs, "3-4");
        assert_eq!(intermediate.sentences, "4-5 sentences per paragraph");
        assert_eq!(intermediate.word_range(), (200, 300));

        let advanced = WizardLevel::Advanced.length_policy();
        assert_eq!(advanced.paragraphs, "4-5");
        assert_eq!(advanced.sentences, "5-6 sentences per paragraph");
        assert_eq!(advanced.word_range(), (350, 500));
    }

    #[test]
    fn test_accepts_is_inclusive() {
        let policy = WizardLevel::Beginner.length_policy();
        assert!(policy.accepts(100));
        assert!(policy.accepts(150));
        assert!(!policy.accepts(99));
        assert!(!policy.accepts(151));
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&WizardLevel::Intermediate).unwrap();
        assert_eq!(json, "\"Intermediate\"");
    }
}
