//! Per-word explanations and synonym lists

use crate::client::LlmClient;
use crate::error::PipelineError;
use crate::prompt::annotation_prompt;
use gloss_domain::traits::LlmProvider;
use gloss_domain::AnnotationMode;
use tracing::debug;

/// Asks the model to explain a word or list its synonyms
pub struct WordAnnotator<L> {
    client: LlmClient<L>,
}

impl<L> Clone for WordAnnotator<L> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
        }
    }
}

impl<L> WordAnnotator<L>
where
    L: LlmProvider,
    PipelineError: From<L::Error>,
{
    /// Create an annotator
    pub fn new(client: LlmClient<L>) -> Self {
        Self { client }
    }

    /// Annotate one word; the model's reply is lower-cased
    pub async fn annotate(&self, word: &str, mode: AnnotationMode) -> Result<String, PipelineError> {
        debug!("Annotating '{}' ({})", word, mode);
        let response = self.client.complete("Annotation", &annotation_prompt(word, mode)).await?;
        Ok(response.to_lowercase())
    }
}
