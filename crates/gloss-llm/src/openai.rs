//! OpenAI Provider Implementation
//!
//! Sends chat-style prompts to a hosted chat-completion endpoint
//! (`POST /v1/chat/completions`) and returns the first choice's text.
//!
//! # Features
//!
//! - Credential passed explicitly through [`LlmConfig`], never read from
//!   process-wide state
//! - Missing credential detected before any network call
//! - Request timeout; no retries
//!
//! # Examples
//!
//! ```no_run
//! use gloss_llm::{LlmConfig, OpenAiProvider};
//!
//! let config = LlmConfig::with_api_key("sk-...");
//! let provider = OpenAiProvider::new(config).unwrap();
//! ```

use crate::LlmError;
use async_trait::async_trait;
use gloss_domain::traits::LlmProvider;
use gloss_domain::{CompletionOptions, Prompt};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Default chat-completion endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Default timeout for completion requests (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Connection settings for [`OpenAiProvider`]
#[derive(Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// API key; absence is reported as [`LlmError::MissingCredential`] on first use
    #[serde(skip)]
    pub api_key: Option<String>,

    /// Chat-completion endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl LlmConfig {
    /// Default settings with the given API key
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Request timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// Hand-written so the key never ends up in logs
impl fmt::Debug for LlmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Chat-completion API provider
pub struct OpenAiProvider {
    api_key: Option<String>,
    endpoint: String,
    client: reqwest::Client,
}

/// Request body for the chat-completion API
#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Response from the chat-completion API
#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Error envelope returned with non-2xx statuses
#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl OpenAiProvider {
    /// Create a new provider
    ///
    /// # Errors
    ///
    /// Returns [`LlmError::Communication`] if the HTTP client cannot be built.
    pub fn new(config: LlmConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| LlmError::Communication(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.api_key,
            endpoint: config.endpoint,
            client,
        })
    }

    fn credential(&self) -> Result<&str, LlmError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(LlmError::MissingCredential),
        }
    }
}

fn build_request<'a>(prompt: &'a Prompt, options: &'a CompletionOptions) -> ChatCompletionRequest<'a> {
    ChatCompletionRequest {
        model: &options.model,
        messages: prompt
            .messages()
            .iter()
            .map(|m| WireMessage {
                role: m.role.as_str(),
                content: &m.content,
            })
            .collect(),
        temperature: options.temperature,
        max_tokens: options.max_tokens,
    }
}

fn parse_success(body: &str) -> Result<String, LlmError> {
    let response: ChatCompletionResponse = serde_json::from_str(body)
        .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

    let content = response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| LlmError::InvalidResponse("Response contained no choices".to_string()))?;

    Ok(content.trim().to_string())
}

fn parse_error(status: u16, body: &str) -> LlmError {
    let message = serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                "Unknown error".to_string()
            } else {
                body.trim().to_string()
            }
        });
    LlmError::Api { status, message }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    type Error = LlmError;

    async fn complete(
        &self,
        prompt: &Prompt,
        options: &CompletionOptions,
    ) -> Result<String, Self::Error> {
        let api_key = self.credential()?;
        let request_body = build_request(prompt, options);

        debug!(
            "Sending completion request: model={}, user message {} chars",
            options.model,
            prompt.user().len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LlmError::Communication(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            return Err(parse_error(status.as_u16(), &body));
        }

        parse_success(&body)
    }
}
