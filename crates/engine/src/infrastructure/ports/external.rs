//! External service port traits (text generation, image generation).

use async_trait::async_trait;

use super::error::{ImageGenError, LlmError};

// =============================================================================
// Text generation
// =============================================================================

/// One single-turn completion: an optional system prompt and the user prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmRequest {
    pub system_prompt: Option<String>,
    pub prompt: String,
    /// 0.0 - 2.0
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl LlmRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: None,
            prompt: prompt.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LlmResponse {
    pub content: String,
    pub finish_reason: FinishReason,
}

impl LlmResponse {
    /// A plain stop response, handy for fakes.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            finish_reason: FinishReason::Stop,
        }
    }

    pub fn with_finish_reason(mut self, finish_reason: FinishReason) -> Self {
        self.finish_reason = finish_reason;
        self
    }

    /// The model ran into `max_tokens` before it was done.
    pub fn is_truncated(&self) -> bool {
        self.finish_reason == FinishReason::Length
    }
}

/// Why the model stopped writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    Other,
}

impl FinishReason {
    /// Maps the wire value; a missing reason counts as a normal stop.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("stop") | None => Self::Stop,
            Some("length") => Self::Length,
            Some("content_filter") => Self::ContentFilter,
            Some(_) => Self::Other,
        }
    }
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait LlmPort: Send + Sync {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;
}

// =============================================================================
// Image generation
// =============================================================================

/// Landscape frame used for every illustration.
pub const DEFAULT_IMAGE_SIZE: &str = "1792x1024";

/// Standard quality renders faster than "hd".
pub const DEFAULT_IMAGE_QUALITY: &str = "standard";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub prompt: String,
    pub size: String,
    pub quality: String,
}

impl ImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            size: DEFAULT_IMAGE_SIZE.to_string(),
            quality: DEFAULT_IMAGE_QUALITY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageResult {
    /// Where the backend published the rendered image
    pub url: String,
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ImageGenPort: Send + Sync {
    async fn generate(&self, request: ImageRequest) -> Result<ImageResult, ImageGenError>;

    /// Whether the backend answers at all.
    async fn check_health(&self) -> Result<bool, ImageGenError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_reason_from_wire() {
        assert_eq!(FinishReason::from_wire(None), FinishReason::Stop);
        assert_eq!(FinishReason::from_wire(Some("stop")), FinishReason::Stop);
        assert_eq!(FinishReason::from_wire(Some("length")), FinishReason::Length);
        assert_eq!(
            FinishReason::from_wire(Some("content_filter")),
            FinishReason::ContentFilter
        );
        assert_eq!(FinishReason::from_wire(Some("tool_calls")), FinishReason::Other);
    }

    #[test]
    fn test_only_length_counts_as_truncated() {
        assert!(!LlmResponse::text("x").is_truncated());
        assert!(LlmResponse::text("x")
            .with_finish_reason(FinishReason::Length)
            .is_truncated());
    }
}
