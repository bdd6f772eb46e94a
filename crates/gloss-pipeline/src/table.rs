//! Annotation table assembly

use crate::annotator::WordAnnotator;
use crate::config::AnnotationFailurePolicy;
use crate::error::PipelineError;
use futures::stream::{self, StreamExt, TryStreamExt};
use gloss_domain::traits::LlmProvider;
use gloss_domain::{Annotation, AnnotationMode, AnnotationRow, AnnotationTable, Keyword};
use tracing::{info, warn};

/// Annotates every keyword and assembles the two-column table.
///
/// Each keyword occurrence gets its own call, duplicates included. With
/// `concurrency > 1` calls overlap, but rows always come back in keyword order.
pub struct TableBuilder<L> {
    annotator: WordAnnotator<L>,
    concurrency: usize,
    policy: AnnotationFailurePolicy,
}

impl<L> TableBuilder<L>
where
    L: LlmProvider,
    PipelineError: From<L::Error>,
{
    /// Create a builder; `concurrency` is clamped to at least 1
    pub fn new(annotator: WordAnnotator<L>, concurrency: usize, policy: AnnotationFailurePolicy) -> Self {
        Self {
            annotator,
            concurrency: concurrency.max(1),
            policy,
        }
    }

    /// Annotate `keywords` in `mode`
    ///
    /// # Errors
    ///
    /// - [`PipelineError::InvalidInput`] when `keywords` is empty
    /// - under [`AnnotationFailurePolicy::Abort`], the first failing
    ///   annotation's error in keyword order
    pub async fn build(
        &self,
        keywords: &[Keyword],
        mode: AnnotationMode,
    ) -> Result<AnnotationTable, PipelineError> {
        if keywords.is_empty() {
            return Err(PipelineError::InvalidInput(
                "Expected a non-empty list of keywords".to_string(),
            ));
        }

        info!(
            "Annotating {} keywords ({} mode, concurrency {})",
            keywords.len(),
            mode,
            self.concurrency
        );

        let annotator = &self.annotator;
        let calls = stream::iter(keywords)
            .map(move |keyword| async move { annotator.annotate(keyword.as_str(), mode).await })
            .buffered(self.concurrency);

        let rows: Vec<AnnotationRow> = match self.policy {
            AnnotationFailurePolicy::Abort => {
                let texts: Vec<String> = calls.try_collect().await?;
                keywords
                    .iter()
                    .cloned()
                    .zip(texts)
                    .map(|(keyword, text)| AnnotationRow {
                        keyword,
                        annotation: Annotation::Text(text),
                    })
                    .collect()
            }
            AnnotationFailurePolicy::MarkRow => {
                let results: Vec<Result<String, PipelineError>> = calls.collect().await;
                keywords
                    .iter()
                    .cloned()
                    .zip(results)
                    .map(|(keyword, result)| {
                        let annotation = match result {
                            Ok(text) => Annotation::Text(text),
                            Err(e) => {
                                warn!("Annotation failed for '{}': {}", keyword, e);
                                Annotation::Failed(e.to_string())
                            }
                        };
                        AnnotationRow { keyword, annotation }
                    })
                    .collect()
            }
        };

        let table = AnnotationTable::from_rows(mode, rows);
        info!(
            "Built table with {} rows ({} failed)",
            table.len(),
            table.failed_count()
        );
        Ok(table)
    }
}
