//! Gloss LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `gloss-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing, records every prompt
//! - `OpenAiProvider`: Hosted chat-completion API over HTTPS
//!
//! # Examples
//!
//! ```
//! use gloss_domain::traits::LlmProvider;
//! use gloss_domain::{CompletionOptions, Prompt};
//! use gloss_llm::MockProvider;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let provider = MockProvider::new("Hello from LLM!");
//! let prompt = Prompt::new("system", "user");
//! let result = provider.complete(&prompt, &CompletionOptions::default()).await.unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! # }
//! ```

#![warn(missing_docs)]

pub mod openai;

use async_trait::async_trait;
use gloss_domain::traits::LlmProvider;
use gloss_domain::{CompletionOptions, Prompt};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

pub use openai::{LlmConfig, OpenAiProvider};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// No API key configured; raised before any network call
    #[error("API key is not set. Pass --api-key or set OPENAI_API_KEY")]
    MissingCredential,

    /// Network or transport failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// The API answered with an error status
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message reported by the API
        message: String,
    },

    /// Response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error,
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls. Rules
/// match when the prompt's user message contains the registered needle; the
/// first matching rule wins, otherwise the default response is returned.
///
/// # Examples
///
/// ```
/// use gloss_domain::traits::LlmProvider;
/// use gloss_domain::{CompletionOptions, Prompt};
/// use gloss_llm::MockProvider;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut provider = MockProvider::default();
/// provider.add_response("'cats'", "feline, kitty");
///
/// let options = CompletionOptions::default();
/// let prompt = Prompt::new("sys", "synonyms for the word 'cats'");
/// assert_eq!(provider.complete(&prompt, &options).await.unwrap(), "feline, kitty");
/// assert_eq!(provider.prompts().len(), 1);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    rules: Arc<Mutex<Vec<(String, MockReply)>>>,
    prompts: Arc<Mutex<Vec<Prompt>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            rules: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Respond with `response` when the user message contains `needle`
    pub fn add_response(&mut self, needle: impl Into<String>, response: impl Into<String>) {
        lock(&self.rules).push((needle.into(), MockReply::Text(response.into())));
    }

    /// Fail when the user message contains `needle`
    pub fn add_error(&mut self, needle: impl Into<String>) {
        lock(&self.rules).push((needle.into(), MockReply::Error));
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }

    /// Every prompt received so far, in call order
    pub fn prompts(&self) -> Vec<Prompt> {
        lock(&self.prompts).clone()
    }

    /// Reset the call count and recorded prompts
    pub fn reset_call_count(&self) {
        lock(&self.prompts).clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    type Error = LlmError;

    async fn complete(
        &self,
        prompt: &Prompt,
        _options: &CompletionOptions,
    ) -> Result<String, Self::Error> {
        lock(&self.prompts).push(prompt.clone());

        let reply = lock(&self.rules)
            .iter()
            .find(|(needle, _)| prompt.user().contains(needle.as_str()))
            .map(|(_, reply)| reply.clone());

        match reply {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::Error) => Err(LlmError::Other("Mock error".to_string())),
            None => Ok(self.default_response.clone()),
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
