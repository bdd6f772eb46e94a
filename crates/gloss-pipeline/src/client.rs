//! Timed wrapper around an `LlmProvider`

use crate::error::PipelineError;
use gloss_domain::traits::LlmProvider;
use gloss_domain::{CompletionOptions, Prompt};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Shared handle to a provider plus the options and timeout every call uses
pub struct LlmClient<L> {
    provider: Arc<L>,
    options: CompletionOptions,
    timeout: Duration,
}

impl<L> Clone for LlmClient<L> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            options: self.options.clone(),
            timeout: self.timeout,
        }
    }
}

impl<L> LlmClient<L>
where
    L: LlmProvider,
    PipelineError: From<L::Error>,
{
    /// Create a client around a shared provider
    pub fn new(provider: Arc<L>, options: CompletionOptions, timeout: Duration) -> Self {
        Self {
            provider,
            options,
            timeout,
        }
    }

    /// Run one completion; `stage` names the caller in timeout errors
    pub async fn complete(&self, stage: &'static str, prompt: &Prompt) -> Result<String, PipelineError> {
        timeout(self.timeout, self.provider.complete(prompt, &self.options))
            .await
            .map_err(|_| PipelineError::Timeout(stage, self.timeout.as_secs()))?
            .map_err(PipelineError::from)
    }
}
