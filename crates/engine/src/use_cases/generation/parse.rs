//! Turning raw completion text into an [`Article`].
//!
//! The model is asked for JSON, but answers in plain text or markdown are
//! common enough that both shapes are accepted.

use std::sync::LazyLock;

use newsdesk_domain::Article;
use regex_lite::Regex;

static HEADING_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#+\s*").expect("valid regex"));
static CODE_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^\s*```[A-Za-z]*\s*(.*?)\s*```\s*$").expect("valid regex")
});

/// Headline used when a JSON answer has none.
pub const DEFAULT_HEADLINE: &str = "News Headline";

/// Parses a completion into headline and body.
///
/// JSON first: `headline` (default [`DEFAULT_HEADLINE`]) and `content`
/// (default: the whole raw text). Otherwise the first line is the headline
/// with leading `#` markers removed, and the remaining lines are the body.
pub fn parse_article_response(raw: &str) -> Article {
    let candidate = strip_code_fence(raw);

    match serde_json::from_str::<serde_json::Value>(candidate) {
        Ok(value) => {
            let headline = non_empty_str(&value, "headline").unwrap_or(DEFAULT_HEADLINE);
            let content = non_empty_str(&value, "content").unwrap_or(raw);
            Article::new(headline, content.trim())
        }
        Err(_) => parse_plain_text(raw),
    }
}

fn parse_plain_text(raw: &str) -> Article {
    let mut lines = raw.split('\n');
    let first = lines.next().unwrap_or_default();
    let headline = if first.is_empty() {
        DEFAULT_HEADLINE.to_string()
    } else {
        HEADING_MARKER_RE.replace(first, "").trim().to_string()
    };

    let rest = lines.collect::<Vec<_>>().join("\n");
    let content = if rest.is_empty() { raw } else { rest.as_str() };

    Article::new(headline, content.trim())
}

fn non_empty_str<'a>(value: &'a serde_json::Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .filter(|s| !s.is_empty())
}

fn strip_code_fence(raw: &str) -> &str {
    CODE_FENCE_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(raw)
}
