//! Article and illustration generation.
//!
//! [`GenerationClient`] is the single entry point the wizard talks to. It
//! wraps the text and image ports, builds prompts, parses answers, and
//! provides the template article used when the text service is down.

mod article;
mod fallback;
mod images;
mod parse;
mod prompt;

use std::sync::Arc;

use newsdesk_domain::{Article, ImageRef, Step1Data, WizardLevel};

use crate::infrastructure::ports::{ImageGenError, ImageGenPort, LlmError, LlmPort};

pub use article::GenerateArticle;
pub use fallback::fallback_article;
pub use images::GenerateImages;
pub use parse::{parse_article_response, DEFAULT_HEADLINE};
pub use prompt::{
    alternate_scene_prompt, build_article_prompt, main_scene_prompt, ARTICLE_SYSTEM_PROMPT,
    ARTICLE_TEMPERATURE,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("Text generation failed: {0}")]
    Llm(#[from] LlmError),
    #[error("Image generation failed: {0}")]
    Image(#[from] ImageGenError),
    #[error("Empty response from text generation")]
    EmptyResponse,
    #[error("All image requests failed: {first}; {second}")]
    AllImagesFailed {
        first: ImageGenError,
        second: ImageGenError,
    },
}

/// Container for generation use cases.
#[derive(Clone)]
pub struct GenerationClient {
    article: Arc<GenerateArticle>,
    images: Arc<GenerateImages>,
    image_gen: Arc<dyn ImageGenPort>,
}

impl GenerationClient {
    pub fn new(llm: Arc<dyn LlmPort>, image_gen: Arc<dyn ImageGenPort>) -> Self {
        Self {
            article: Arc::new(GenerateArticle::new(llm)),
            images: Arc::new(GenerateImages::new(image_gen.clone())),
            image_gen,
        }
    }

    /// Both ports served by one OpenAI-compatible backend.
    pub fn from_openai(client: crate::infrastructure::openai::OpenAiClient) -> Self {
        let client = Arc::new(client);
        Self::new(client.clone(), client)
    }

    pub async fn generate_article(
        &self,
        level: WizardLevel,
        step1: &Step1Data,
    ) -> Result<Article, GenerationError> {
        self.article.execute(level, step1).await
    }

    pub fn fallback_article(&self, level: WizardLevel, step1: &Step1Data) -> Article {
        fallback_article(level, step1)
    }

    pub async fn generate_images(
        &self,
        article: &Article,
        level: WizardLevel,
    ) -> Result<Vec<ImageRef>, GenerationError> {
        self.images.execute(article, level).await
    }

    pub async fn generate_first_image(
        &self,
        article: &Article,
    ) -> Result<ImageRef, GenerationError> {
        self.images.first(article).await
    }

    /// Whether the backend answers at all. Never fails; errors read as `false`.
    pub async fn check_health(&self) -> bool {
        match self.image_gen.check_health().await {
            Ok(healthy) => healthy,
            Err(e) => {
                tracing::debug!(error = %e, "Backend health check failed");
                false
            }
        }
    }
}
