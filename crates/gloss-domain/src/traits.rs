//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the pipeline and the outside
//! world. Implementations live in `gloss-llm` and `gloss-article`.

use crate::prompt::{CompletionOptions, Prompt};
use async_trait::async_trait;

/// Trait for chat-completion providers
///
/// Implemented by the infrastructure layer (gloss-llm)
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Error type for completion calls
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send a prompt and return the generated text
    async fn complete(
        &self,
        prompt: &Prompt,
        options: &CompletionOptions,
    ) -> Result<String, Self::Error>;
}

/// Trait for turning a URL into plain article text
///
/// Implemented by the infrastructure layer (gloss-article)
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Error type for retrieval and parsing
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch and parse the article at `url`
    ///
    /// No URL syntax validation is required; an invalid URL should surface as
    /// the implementation's own error.
    async fn fetch_text(&self, url: &str) -> Result<String, Self::Error>;
}
