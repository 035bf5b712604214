//! Async LLM client for narration and icon art
//!
//! This is a model-agnostic HTTP client for calling LLM APIs.
//! Text completion supports both Anthropic and OpenAI-compatible APIs
//! (DeepSeek, etc). Icon art goes to an OpenAI-compatible images endpoint
//! and comes back as a base64 data URL.

use crate::assets::ImageHandle;
use crate::core::error::{MergeError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
const DEFAULT_MODEL: &str = "claude-3-haiku-20240307";
const DEFAULT_IMAGE_URL: &str = "https://api.openai.com/v1/images/generations";
const DEFAULT_IMAGE_MODEL: &str = "dall-e-2";

/// API format type
#[derive(Debug, Clone, PartialEq)]
pub enum ApiFormat {
    Anthropic,
    OpenAI,
}

/// Async LLM client for making API calls
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
    api_format: ApiFormat,
    image_url: String,
    image_model: String,
}

impl LlmClient {
    /// Create a new LLM client with explicit configuration
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        let api_format = Self::detect_api_format(&api_url);
        Self {
            client: Client::new(),
            api_key,
            api_url,
            model,
            api_format,
            image_url: DEFAULT_IMAGE_URL.into(),
            image_model: DEFAULT_IMAGE_MODEL.into(),
        }
    }

    /// Point icon generation somewhere else
    pub fn with_image_endpoint(mut self, image_url: String, image_model: String) -> Self {
        self.image_url = image_url;
        self.image_model = image_model;
        self
    }

    /// Detect API format from URL
    fn detect_api_format(url: &str) -> ApiFormat {
        if url.contains("anthropic.com") {
            ApiFormat::Anthropic
        } else {
            // DeepSeek, OpenAI, and other compatible APIs use OpenAI format
            ApiFormat::OpenAI
        }
    }

    /// Create a client from environment variables
    ///
    /// Required: LLM_API_KEY
    /// Optional: LLM_API_URL (defaults to Anthropic API)
    /// Optional: LLM_MODEL (defaults to claude-3-haiku-20240307)
    /// Optional: IMAGE_API_URL, IMAGE_MODEL (OpenAI images API, dall-e-2)
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("LLM_API_KEY")
            .map_err(|_| MergeError::LlmError("LLM_API_KEY not set".into()))?;
        let api_url = std::env::var("LLM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.into());
        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());
        let image_url =
            std::env::var("IMAGE_API_URL").unwrap_or_else(|_| DEFAULT_IMAGE_URL.into());
        let image_model =
            std::env::var("IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.into());

        Ok(Self::new(api_key, api_url, model).with_image_endpoint(image_url, image_model))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send a completion request to the LLM
    ///
    /// # Arguments
    /// * `system` - System prompt providing context and instructions
    /// * `user` - User message/query to process
    ///
    /// # Returns
    /// The LLM's text response
    pub async fn complete(&self, system: &str, user: &str) -> Result<String> {
        match self.api_format {
            ApiFormat::Anthropic => self.complete_anthropic(system, user).await,
            ApiFormat::OpenAI => self.complete_openai(system, user).await,
        }
    }

    async fn complete_anthropic(&self, system: &str, user: &str) -> Result<String> {
        let request = AnthropicRequest {
            model: self.model.clone(),
            max_tokens: 512,
            system: system.into(),
            messages: vec![Message {
                role: "user".into(),
                content: user.into(),
            }],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| MergeError::LlmError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(api_error(status, &error_text, MergeError::LlmError));
        }

        let completion: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| MergeError::LlmError(e.to_string()))?;

        completion
            .content
            .first()
            .map(|c| c.text.clone())
            .ok_or_else(|| MergeError::LlmError("Empty response".into()))
    }

    async fn complete_openai(&self, system: &str, user: &str) -> Result<String> {
        let request = OpenAIRequest {
            model: self.model.clone(),
            max_tokens: 512,
            messages: vec![
                Message {
                    role: "system".into(),
                    content: system.into(),
                },
                Message {
                    role: "user".into(),
                    content: user.into(),
                },
            ],
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| MergeError::LlmError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(api_error(status, &error_text, MergeError::LlmError));
        }

        let completion: OpenAIResponse = response
            .json()
            .await
            .map_err(|e| MergeError::LlmError(e.to_string()))?;

        completion
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| MergeError::LlmError("Empty response".into()))
    }

    /// Ask the images endpoint for one picture
    ///
    /// `Ok(None)` when the reply carries no image data. Quota exhaustion
    /// comes back as [`MergeError::RateLimited`].
    pub async fn generate_image(&self, prompt: &str) -> Result<Option<ImageHandle>> {
        let request = ImageRequest {
            model: self.image_model.clone(),
            prompt: prompt.into(),
            n: 1,
            size: "256x256".into(),
            response_format: "b64_json".into(),
        };

        let response = self
            .client
            .post(&self.image_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_message(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(api_error(status, &error_text, MergeError::AssetUnavailable));
        }

        let body: ImageResponse = response
            .json()
            .await
            .map_err(|e| MergeError::AssetUnavailable(e.to_string()))?;

        Ok(body
            .data
            .into_iter()
            .find_map(|d| d.b64_json)
            .map(|b64| ImageHandle(format!("data:image/png;base64,{}", b64))))
    }
}

/// Turn a failed response into an error, spotting rate limits
fn api_error(status: StatusCode, body: &str, other: fn(String) -> MergeError) -> MergeError {
    let message = format!("API error {}: {}", status.as_u16(), body);
    if status == StatusCode::TOO_MANY_REQUESTS || is_quota_message(body) {
        MergeError::RateLimited(message)
    } else {
        other(message)
    }
}

fn classify_message(message: String) -> MergeError {
    if message.contains("429") || is_quota_message(&message) {
        MergeError::RateLimited(message)
    } else {
        MergeError::AssetUnavailable(message)
    }
}

fn is_quota_message(text: &str) -> bool {
    text.to_ascii_lowercase().contains("quota")
}

// Anthropic API format
#[derive(Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    system: String,
    messages: Vec<Message>,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    text: String,
}

// OpenAI-compatible API format (DeepSeek, OpenAI, etc.)
#[derive(Serialize)]
struct OpenAIRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
}

#[derive(Deserialize)]
struct OpenAIResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

// OpenAI-compatible images API
#[derive(Serialize)]
struct ImageRequest {
    model: String,
    prompt: String,
    n: u32,
    size: String,
    response_format: String,
}

#[derive(Deserialize)]
struct ImageResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Deserialize)]
struct ImageData {
    b64_json: Option<String>,
}

// Shared
#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}
