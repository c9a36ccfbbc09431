//! Generate article use case.

use std::sync::Arc;

use newsdesk_domain::{Article, Step1Data, WizardLevel};

use super::parse::parse_article_response;
use super::prompt::{build_article_prompt, ARTICLE_SYSTEM_PROMPT, ARTICLE_TEMPERATURE};
use super::GenerationError;
use crate::infrastructure::ports::{LlmPort, LlmRequest};

/// Writes one article through the text port.
///
/// A single attempt: transport and HTTP failures go straight back to the
/// caller, who decides on the fallback.
pub struct GenerateArticle {
    llm: Arc<dyn LlmPort>,
}

impl GenerateArticle {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    pub async fn execute(
        &self,
        level: WizardLevel,
        step1: &Step1Data,
    ) -> Result<Article, GenerationError> {
        let policy = level.length_policy();
        let request = LlmRequest::new(build_article_prompt(level, step1))
            .with_system_prompt(ARTICLE_SYSTEM_PROMPT)
            .with_temperature(ARTICLE_TEMPERATURE)
            .with_max_tokens(policy.max_tokens);

        let response = self.llm.generate(request).await.map_err(|e| {
            tracing::error!(level = %level, error = %e, "Article generation request failed");
            GenerationError::from(e)
        })?;

        if response.content.trim().is_empty() {
            tracing::error!(level = %level, "Article generation returned empty content");
            return Err(GenerationError::EmptyResponse);
        }

        if response.is_truncated() {
            tracing::warn!(
                level = %level,
                max_tokens = policy.max_tokens,
                "Article hit the token limit and may end mid-sentence"
            );
        }

        let article = parse_article_response(&response.content);

        let word_count = article.word_count();
        if !policy.accepts(word_count) {
            tracing::warn!(
                level = %level,
                word_count,
                min_words = policy.min_words,
                max_words = policy.max_words,
                "Article word count is outside the target range"
            );
        } else {
            tracing::debug!(level = %level, word_count, "Article generated");
        }

        Ok(article)
    }
}
