//! Client for an OpenAI-compatible proxy (chat completions + image generations).
//!
//! Native builds go through hyper with a transport timeout. In the browser
//! reqwest uses `fetch`, whose futures are not `Send`; they are wrapped so
//! the same ports serve both targets.

use std::future::Future;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::infrastructure::ports::{
    FinishReason, ImageGenError, ImageGenPort, ImageRequest, ImageResult, LlmError, LlmPort,
    LlmRequest, LlmResponse,
};

/// Default model for article text.
pub const DEFAULT_TEXT_MODEL: &str = "gpt-3.5-turbo";

/// Default model for illustrations.
pub const DEFAULT_IMAGE_MODEL: &str = "dall-e-3";

/// Both text and image calls share this transport timeout (native only).
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Client for the backend's OpenAI-compatible API
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    text_model: String,
    image_model: String,
}

impl OpenAiClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    /// Create client with custom timeout (for testing).
    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            client: build_client(timeout_secs),
            base_url: base_url.trim_end_matches('/').to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
        }
    }

    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn text_model(&self) -> &str {
        &self.text_model
    }

    pub fn image_model(&self) -> &str {
        &self.image_model
    }

    fn chat_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn images_url(&self) -> String {
        format!("{}/images/generations", self.base_url)
    }

    async fn send_chat(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let api_request = build_chat_request(&self.text_model, &request);

        tracing::debug!(
            model = %self.text_model,
            max_tokens = ?request.max_tokens,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.chat_url())
            .json(&api_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::RequestFailed(format!("{status}: {error_text}")));
        }

        let api_response: OpenAIChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        convert_chat_response(api_response)
    }

    async fn send_image(&self, request: ImageRequest) -> Result<ImageResult, ImageGenError> {
        let api_request = build_image_request(&self.image_model, &request);

        tracing::debug!(
            model = %self.image_model,
            size = %request.size,
            "Sending image generation request"
        );

        let response = self
            .client
            .post(self.images_url())
            .json(&api_request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ImageGenError::GenerationFailed(format!(
                "{status}: {error_text}"
            )));
        }

        let api_response: OpenAIImageResponse = response
            .json()
            .await
            .map_err(|e| ImageGenError::InvalidResponse(e.to_string()))?;

        convert_image_response(api_response)
    }

    async fn fetch_health(&self) -> Result<bool, ImageGenError> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|_| ImageGenError::Unavailable)?;
        Ok(response.status().is_success())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(timeout_secs: u64) -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// The browser enforces its own fetch limits.
#[cfg(target_arch = "wasm32")]
fn build_client(_timeout_secs: u64) -> Client {
    Client::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn single_threaded<F: Future>(future: F) -> F {
    future
}

/// The page has exactly one thread, so the wrapper's thread check always holds.
#[cfg(target_arch = "wasm32")]
fn single_threaded<F: Future>(future: F) -> send_wrapper::SendWrapper<F> {
    send_wrapper::SendWrapper::new(future)
}

#[async_trait]
impl LlmPort for OpenAiClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        single_threaded(self.send_chat(request)).await
    }
}

#[async_trait]
impl ImageGenPort for OpenAiClient {
    async fn generate(&self, request: ImageRequest) -> Result<ImageResult, ImageGenError> {
        single_threaded(self.send_image(request)).await
    }

    async fn check_health(&self) -> Result<bool, ImageGenError> {
        single_threaded(self.fetch_health()).await
    }
}

fn build_chat_request(model: &str, request: &LlmRequest) -> OpenAIChatRequest {
    let mut messages = Vec::with_capacity(2);
    if let Some(system) = &request.system_prompt {
        messages.push(OpenAIMessage {
            role: "system",
            content: system.clone(),
        });
    }
    messages.push(OpenAIMessage {
        role: "user",
        content: request.prompt.clone(),
    });

    OpenAIChatRequest {
        model: model.to_string(),
        messages,
        temperature: request.temperature,
        max_tokens: request.max_tokens,
    }
}

fn build_image_request(model: &str, request: &ImageRequest) -> OpenAIImageRequest {
    OpenAIImageRequest {
        model: model.to_string(),
        prompt: request.prompt.clone(),
        n: 1,
        size: request.size.clone(),
        quality: request.quality.clone(),
    }
}

fn convert_chat_response(response: OpenAIChatResponse) -> Result<LlmResponse, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("No choices in LLM response".to_string()))?;

    Ok(LlmResponse {
        content: choice.message.content.unwrap_or_default(),
        finish_reason: FinishReason::from_wire(choice.finish_reason.as_deref()),
    })
}

fn convert_image_response(response: OpenAIImageResponse) -> Result<ImageResult, ImageGenError> {
    let url = response
        .data
        .into_iter()
        .next()
        .and_then(|d| d.url)
        .filter(|url| !url.trim().is_empty())
        .ok_or_else(|| ImageGenError::InvalidResponse("No image URL in response".to_string()))?;

    Ok(ImageResult { url })
}

// =============================================================================
// OpenAI API types
// =============================================================================

#[derive(Debug, Serialize)]
struct OpenAIChatRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct OpenAIMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIChatResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChoice {
    message: OpenAIResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct OpenAIImageRequest {
    model: String,
    prompt: String,
    n: u32,
    size: String,
    quality: String,
}

#[derive(Debug, Deserialize)]
struct OpenAIImageResponse {
    data: Vec<OpenAIImageData>,
}

#[derive(Debug, Deserialize)]
struct OpenAIImageData {
    url: Option<String>,
}
