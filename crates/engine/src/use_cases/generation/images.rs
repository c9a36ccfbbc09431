//! Generate illustrations use case.

use std::sync::Arc;

use futures_util::future::join;
use newsdesk_domain::{Article, ImageRef, WizardLevel};

use super::prompt::{alternate_scene_prompt, main_scene_prompt};
use super::GenerationError;
use crate::infrastructure::ports::{ImageGenError, ImageGenPort, ImageRequest};

/// Produces candidate illustrations for an article.
pub struct GenerateImages {
    image_gen: Arc<dyn ImageGenPort>,
}

impl GenerateImages {
    pub fn new(image_gen: Arc<dyn ImageGenPort>) -> Self {
        Self { image_gen }
    }

    /// Requests two illustrations at once and keeps whichever succeed.
    ///
    /// Order is preserved (main scene first). Fails only when both requests
    /// fail.
    pub async fn execute(
        &self,
        article: &Article,
        level: WizardLevel,
    ) -> Result<Vec<ImageRef>, GenerationError> {
        let main = self.request(main_scene_prompt(article));
        let alternate = self.request(alternate_scene_prompt(article));

        let (first, second) = join(main, alternate).await;

        let mut images = Vec::with_capacity(2);
        let mut failures = Vec::new();
        for result in [first, second] {
            match result {
                Ok(image) => images.push(image),
                Err(e) => {
                    tracing::warn!(level = %level, error = %e, "Illustration request failed");
                    failures.push(e);
                }
            }
        }

        if images.is_empty() {
            let mut failures = failures.into_iter();
            let first = failures.next().unwrap_or(ImageGenError::Unavailable);
            let second = failures.next().unwrap_or(ImageGenError::Unavailable);
            tracing::error!(level = %level, "Every illustration request failed");
            return Err(GenerationError::AllImagesFailed { first, second });
        }

        tracing::info!(level = %level, count = images.len(), "Illustrations generated");
        Ok(images)
    }

    /// Only the main scene, for showing something while the second renders.
    pub async fn first(&self, article: &Article) -> Result<ImageRef, GenerationError> {
        self.request(main_scene_prompt(article))
            .await
            .map_err(GenerationError::from)
    }

    async fn request(&self, prompt: String) -> Result<ImageRef, ImageGenError> {
        let result = self.image_gen.generate(ImageRequest::new(prompt)).await?;
        Ok(ImageRef::new(result.url))
    }
}
