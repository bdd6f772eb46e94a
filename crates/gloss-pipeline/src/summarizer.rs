//! Article summarization into subtopic lines

use crate::client::LlmClient;
use crate::error::PipelineError;
use crate::prompt::summary_prompt;
use gloss_domain::traits::LlmProvider;
use gloss_domain::Summary;
use tracing::{info, warn};

/// Turns article text into a normalised subtopic summary
pub struct Summarizer<L> {
    client: LlmClient<L>,
}

impl<L> Summarizer<L>
where
    L: LlmProvider,
    PipelineError: From<L::Error>,
{
    /// Create a summarizer
    pub fn new(client: LlmClient<L>) -> Self {
        Self { client }
    }

    /// Summarize `text` into trimmed, non-empty subtopic lines
    pub async fn summarize(&self, text: &str) -> Result<Summary, PipelineError> {
        info!("Summarizing {} chars of article text", text.len());

        let response = self.client.complete("Summarization", &summary_prompt(text)).await?;
        let summary = Summary::from_response(&response);

        if summary.is_empty() {
            warn!("Model returned an empty summary");
        } else {
            info!("Summary has {} subtopic lines", summary.line_count());
        }
        Ok(summary)
    }
}
