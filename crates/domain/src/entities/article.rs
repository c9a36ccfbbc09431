use serde::{Deserialize, Serialize};

/// Headline and body text of the child's newspaper article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub headline: String,
    pub content: String,
}

impl Article {
    pub fn new(headline: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            content: content.into(),
        }
    }

    /// Whitespace-separated token count of the body.
    pub fn word_count(&self) -> usize {
        word_count(&self.content)
    }

    /// True when either the headline or the body is blank.
    pub fn is_blank(&self) -> bool {
        self.headline.trim().is_empty() || self.content.trim().is_empty()
    }

    /// Body split on blank lines, each paragraph trimmed.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect()
    }
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_ignores_extra_whitespace() {
        let article = Article::new("H", "  one two\n\nthree\tfour  ");
        assert_eq!(article.word_count(), 4);
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_is_blank() {
        assert!(Article::default().is_blank());
        assert!(Article::new("Headline", "   ").is_blank());
        assert!(!Article::new("Headline", "Body").is_blank());
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let article = Article::new("H", "First para.\n\nSecond para.\n\n\n");
        assert_eq!(article.paragraphs(), vec!["First para.", "Second para."]);
    }
}
