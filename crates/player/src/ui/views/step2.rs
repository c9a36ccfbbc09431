//! Step 2: the generated article and the illustration choice.
//!
//! Every remote failure here ends in something usable: a template article
//! when text generation fails, placeholder images when illustrations fail.

use newsdesk_domain::{Article, ImageRef, Step2Patch};
use newsdesk_engine::GenerationClient;

use crate::state::WizardSession;
use crate::ui::error::ViewError;
use crate::ui::routes::Route;

pub const SAMPLE_HEADLINE: &str = "Sample Headline";
pub const SAMPLE_CONTENT: &str = "Sample article content...";

pub const ARTICLE_FALLBACK_NOTICE: &str =
    "Failed to generate article. Using a template article.";
pub const ARTICLE_MISSING_NOTICE: &str =
    "Please create an article first before generating images.";
pub const IMAGE_FAILURE_NOTICE: &str = "Failed to generate images. Please try again.";

/// What happened to the article when the step was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleOutcome {
    /// An article already existed, an attempt was already made, or the
    /// inputs are incomplete.
    Skipped,
    Generated,
    /// The remote call failed; the template article was written instead.
    Fallback,
}

/// One visit to step 2. Build a new view per visit.
#[derive(Debug, Clone, Default)]
pub struct Step2View {
    generation_attempted: bool,
    notice: Option<String>,
}

impl Step2View {
    pub fn new() -> Self {
        Self::default()
    }

    /// User-visible message from the last failure, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Generates the article once per visit.
    pub async fn on_enter(
        &mut self,
        session: &mut WizardSession,
        client: &GenerationClient,
    ) -> ArticleOutcome {
        if !session.step2().article.is_blank() {
            self.generation_attempted = true;
            return ArticleOutcome::Skipped;
        }
        if self.generation_attempted {
            return ArticleOutcome::Skipped;
        }

        let step1 = session.step1().clone();
        let level = match session.level() {
            Some(level)
                if !step1.category.is_empty()
                    && !step1.who.is_empty()
                    && !step1.where_.is_empty() =>
            {
                level
            }
            _ => {
                tracing::debug!(session_id = %session.id(), "Article inputs incomplete, not generating");
                return ArticleOutcome::Skipped;
            }
        };

        self.generation_attempted = true;
        let images = session.step2().images.clone();
        let selected = session.step2().selected_image_index;

        let (article, outcome) = match client.generate_article(level, &step1).await {
            Ok(article) => {
                let headline = if article.headline.trim().is_empty() {
                    SAMPLE_HEADLINE.to_string()
                } else {
                    article.headline
                };
                let content = if article.content.trim().is_empty() {
                    SAMPLE_CONTENT.to_string()
                } else {
                    article.content
                };
                (Article::new(headline, content), ArticleOutcome::Generated)
            }
            Err(e) => {
                tracing::error!(
                    session_id = %session.id(),
                    level = %level,
                    error = %e,
                    "Article generation failed, using template"
                );
                self.notice = Some(ARTICLE_FALLBACK_NOTICE.to_string());
                (
                    client.fallback_article(level, &step1),
                    ArticleOutcome::Fallback,
                )
            }
        };

        tracing::info!(
            session_id = %session.id(),
            word_count = article.word_count(),
            outcome = ?outcome,
            "Article ready"
        );
        session.set_step2_data(
            Step2Patch::default()
                .article(article)
                .images(images)
                .selected_image_index(selected),
        );
        outcome
    }

    /// Requests both illustrations. Returns how many were stored.
    ///
    /// On failure the placeholder pair is stored so the page still has
    /// something to show, and the error is returned so the user can retry.
    pub async fn generate_images(
        &mut self,
        session: &mut WizardSession,
        client: &GenerationClient,
    ) -> Result<usize, ViewError> {
        let article = session.step2().article.clone();
        if article.content.trim().is_empty() {
            self.notice = Some(ARTICLE_MISSING_NOTICE.to_string());
            return Err(ViewError::ArticleMissing);
        }
        let level = session.level().ok_or(ViewError::LevelNotSelected)?;

        match client.generate_images(&article, level).await {
            Ok(images) => {
                let images = if images.is_empty() {
                    ImageRef::placeholder_pair()
                } else {
                    images
                };
                let count = images.len();
                tracing::info!(session_id = %session.id(), count, "Illustrations ready");
                self.notice = None;
                session.set_step2_data(
                    Step2Patch::default()
                        .article(article)
                        .images(images)
                        .selected_image_index(None),
                );
                Ok(count)
            }
            Err(e) => {
                tracing::error!(session_id = %session.id(), error = %e, "Illustration generation failed");
                self.notice = Some(IMAGE_FAILURE_NOTICE.to_string());
                let selected = session.step2().selected_image_index;
                session.set_step2_data(
                    Step2Patch::default()
                        .article(article)
                        .images(ImageRef::placeholder_pair())
                        .selected_image_index(selected),
                );
                Err(ViewError::ImageGeneration(e))
            }
        }
    }

    pub fn edit_headline(&mut self, session: &mut WizardSession, headline: impl Into<String>) {
        let step2 = session.step2().clone();
        let article = Article::new(headline, step2.article.content);
        session.set_step2_data(
            Step2Patch::default()
                .article(article)
                .images(step2.images)
                .selected_image_index(step2.selected_image_index),
        );
    }

    pub fn edit_content(&mut self, session: &mut WizardSession, content: impl Into<String>) {
        let step2 = session.step2().clone();
        let article = Article::new(step2.article.headline, content);
        session.set_step2_data(
            Step2Patch::default()
                .article(article)
                .images(step2.images)
                .selected_image_index(step2.selected_image_index),
        );
    }

    /// Only occupied slots can be chosen; returns whether the choice took.
    pub fn select_image(&mut self, session: &mut WizardSession, index: usize) -> bool {
        if index >= session.step2().images.len() {
            return false;
        }
        session.set_selected_image(Some(index));
        true
    }

    pub fn next(&self, session: &WizardSession) -> Result<Route, ViewError> {
        if session.step2().can_advance() {
            Ok(Route::Step3Route {})
        } else {
            Err(ViewError::ImageNotSelected)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::views::test_support::{filled_session, session};
    use newsdesk_domain::WizardLevel;
    use newsdesk_engine::infrastructure::ports::{
        ImageGenError, ImageResult, LlmError, LlmResponse, MockImageGenPort, MockLlmPort,
    };
    use newsdesk_engine::GenerationError;
    use std::sync::Arc;

    fn client(llm: MockLlmPort, image_gen: MockImageGenPort) -> GenerationClient {
        GenerationClient::new(Arc::new(llm), Arc::new(image_gen))
    }

    fn llm_answering(body: &'static str) -> MockLlmPort {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .times(1)
            .returning(move |_| Ok(LlmResponse::text(body)));
        llm
    }

    fn llm_failing() -> MockLlmPort {
        let mut llm = MockLlmPort::new();
        llm.expect_generate()
            .times(1)
            .returning(|_| Err(LlmError::Timeout));
        llm
    }

    #[tokio::test]
    async fn test_enter_generates_article_once() {
        let client = client(
            llm_answering(r#"{"headline":"H","content":"C"}"#),
            MockImageGenPort::new(),
        );
        let mut session = filled_session(WizardLevel::Beginner);
        let mut view = Step2View::new();

        assert_eq!(view.on_enter(&mut session, &client).await, ArticleOutcome::Generated);
        assert_eq!(session.step2().article, Article::new("H", "C"));

        // Second entry in the same visit must not call the backend again
        assert_eq!(view.on_enter(&mut session, &client).await, ArticleOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_guard_blocks_retry_after_attempt() {
        let client = client(llm_failing(), MockImageGenPort::new());
        let mut session = filled_session(WizardLevel::Beginner);
        let mut view = Step2View::new();

        assert_eq!(view.on_enter(&mut session, &client).await, ArticleOutcome::Fallback);
        session.reset_step2_data();
        assert_eq!(view.on_enter(&mut session, &client).await, ArticleOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_enter_skips_when_inputs_missing() {
        let mut llm = MockLlmPort::new();
        llm.expect_generate().never();
        let client = client(llm, MockImageGenPort::new());
        let mut session = session();
        session.set_level(WizardLevel::Beginner);

        let mut view = Step2View::new();
        assert_eq!(view.on_enter(&mut session, &client).await, ArticleOutcome::Skipped);
        assert!(session.step2().article.is_blank());
    }

    #[tokio::test]
    async fn test_failure_writes_template_article_and_notice() {
        let client = client(llm_failing(), MockImageGenPort::new());
        let mut session = filled_session(WizardLevel::Intermediate);
        let mut view = Step2View::new();

        assert_eq!(view.on_enter(&mut session, &client).await, ArticleOutcome::Fallback);

        let article = &session.step2().article;
        assert_eq!(article.headline, "Mina at the park");
        assert_eq!(article.paragraphs().len(), 4);
        assert_eq!(view.notice(), Some(ARTICLE_FALLBACK_NOTICE));
    }

    #[tokio::test]
    async fn test_blank_parts_get_sample_defaults() {
        let client = client(
            llm_answering(r#"{"headline":"  ","content":"Body text."}"#),
            MockImageGenPort::new(),
        );
        let mut session = filled_session(WizardLevel::Beginner);

        Step2View::new().on_enter(&mut session, &client).await;

        assert_eq!(session.step2().article.headline, SAMPLE_HEADLINE);
        assert_eq!(session.step2().article.content, "Body text.");
    }

    #[tokio::test]
    async fn test_generate_images_requires_content() {
        let client = client(MockLlmPort::new(), MockImageGenPort::new());
        let mut session = filled_session(WizardLevel::Beginner);
        let mut view = Step2View::new();

        let err = view.generate_images(&mut session, &client).await.unwrap_err();
        assert_eq!(err, ViewError::ArticleMissing);
        assert_eq!(view.notice(), Some(ARTICLE_MISSING_NOTICE));
    }

    #[tokio::test]
    async fn test_generate_images_stores_results_and_clears_selection() {
        let mut image_gen = MockImageGenPort::new();
        image_gen.expect_generate().times(2).returning(|request| {
            if request.prompt.ends_with("Main scene.") {
                Ok(ImageResult {
                    url: "https://img/1.png".into(),
                })
            } else {
                Err(ImageGenError::Timeout)
            }
        });
        let client = client(MockLlmPort::new(), image_gen);
        let mut session = filled_session(WizardLevel::Beginner);
        session.set_step2_data(
            Step2Patch::default()
                .article(Article::new("H", "C"))
                .images(ImageRef::placeholder_pair())
                .selected_image_index(Some(1)),
        );

        let count = Step2View::new()
            .generate_images(&mut session, &client)
            .await
            .unwrap();

        assert_eq!(count, 1);
        assert_eq!(session.step2().images, vec![ImageRef::new("https://img/1.png")]);
        assert_eq!(session.step2().selected_image_index, None);
        assert_eq!(session.step2().article, Article::new("H", "C"));
    }

    #[tokio::test]
    async fn test_total_image_failure_uses_placeholders() {
        let mut image_gen = MockImageGenPort::new();
        image_gen
            .expect_generate()
            .times(2)
            .returning(|_| Err(ImageGenError::Unavailable));
        let client = client(MockLlmPort::new(), image_gen);
        let mut session = filled_session(WizardLevel::Beginner);
        session.set_step2_data(Step2Patch::default().article(Article::new("H", "C")));
        let mut view = Step2View::new();

        let err = view.generate_images(&mut session, &client).await.unwrap_err();

        assert!(matches!(
            err,
            ViewError::ImageGeneration(GenerationError::AllImagesFailed { .. })
        ));
        assert_eq!(session.step2().images, ImageRef::placeholder_pair());
        assert_eq!(view.notice(), Some(IMAGE_FAILURE_NOTICE));
    }

    #[test]
    fn test_edits_echo_the_rest() {
        let mut session = session();
        session.set_step2_data(
            Step2Patch::default()
                .article(Article::new("H", "C"))
                .images(ImageRef::placeholder_pair())
                .selected_image_index(Some(0)),
        );
        let mut view = Step2View::new();

        view.edit_headline(&mut session, "New H");
        view.edit_content(&mut session, "New C");

        assert_eq!(session.step2().article, Article::new("New H", "New C"));
        assert_eq!(session.step2().images.len(), 2);
        assert_eq!(session.step2().selected_image_index, Some(0));
    }

    #[test]
    fn test_next_blocked_until_image_selected() {
        let mut session = session();
        let mut view = Step2View::new();
        assert_eq!(view.next(&session), Err(ViewError::ImageNotSelected));

        assert!(!view.select_image(&mut session, 0));

        session.set_step2_data(Step2Patch::default().images(ImageRef::placeholder_pair()));
        assert_eq!(view.next(&session), Err(ViewError::ImageNotSelected));
        assert!(!view.select_image(&mut session, 2));
        assert!(view.select_image(&mut session, 1));
        assert_eq!(view.next(&session), Ok(Route::Step3Route {}));
    }
}
