//! Top-level flow: fetch, summarize, pick keywords, annotate

use crate::annotator::WordAnnotator;
use crate::client::LlmClient;
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::keywords::KeywordExtractor;
use crate::stopwords::StopWords;
use crate::summarizer::Summarizer;
use crate::table::TableBuilder;
use gloss_domain::traits::{ArticleSource, LlmProvider};
use gloss_domain::{AnnotationMode, AnnotationTable, Keyword, Summary};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::info;

/// Everything a successful run produces
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// The URL as entered, trimmed
    pub url: String,
    /// Subtopic summary of the article
    pub summary: Summary,
    /// Keywords taken from the summary, in order
    pub keywords: Vec<Keyword>,
    /// One annotated row per keyword
    pub table: AnnotationTable,
}

/// The end-to-end vocabulary pipeline
///
/// Stages run strictly in sequence; the first failing stage ends the run and
/// its error is returned. Nothing is cached between runs.
pub struct Pipeline<L, A> {
    source: Arc<A>,
    summarizer: Summarizer<L>,
    keywords: KeywordExtractor,
    tables: TableBuilder<L>,
    config: PipelineConfig,
}

impl<L, A> Pipeline<L, A>
where
    L: LlmProvider,
    A: ArticleSource,
    PipelineError: From<L::Error> + From<A::Error>,
{
    /// Create a pipeline
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Config`] if `config` fails validation.
    pub fn new(llm: L, source: A, config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate().map_err(PipelineError::Config)?;

        let client = LlmClient::new(
            Arc::new(llm),
            config.completion.clone(),
            config.stage_timeout(),
        );

        Ok(Self {
            source: Arc::new(source),
            summarizer: Summarizer::new(client.clone()),
            keywords: KeywordExtractor::new(StopWords::english(), config.keyword_limit),
            tables: TableBuilder::new(
                WordAnnotator::new(client),
                config.annotation_concurrency,
                config.annotation_failure,
            ),
            config,
        })
    }

    /// Replace the stop-word set used for keyword extraction
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.keywords = KeywordExtractor::new(stop_words, self.keywords.limit());
        self
    }

    /// Active configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Fetch article text, failing with `EmptyExtraction` if there is none
    pub async fn fetch_article(&self, url: &str) -> Result<String, PipelineError> {
        let stage_timeout = self.config.stage_timeout();
        let text = timeout(stage_timeout, self.source.fetch_text(url))
            .await
            .map_err(|_| PipelineError::Timeout("Article fetch", stage_timeout.as_secs()))??;

        if text.trim().is_empty() {
            return Err(PipelineError::EmptyExtraction);
        }
        Ok(text)
    }

    /// Summarize article text
    pub async fn summarize(&self, text: &str) -> Result<Summary, PipelineError> {
        self.summarizer.summarize(text).await
    }

    /// Pick keywords from a summary
    pub fn extract_keywords(&self, summary: &Summary) -> Result<Vec<Keyword>, PipelineError> {
        self.keywords.extract(summary.as_str())
    }

    /// Annotate keywords into a table
    pub async fn build_table(
        &self,
        keywords: &[Keyword],
        mode: AnnotationMode,
    ) -> Result<AnnotationTable, PipelineError> {
        self.tables.build(keywords, mode).await
    }

    /// Run every stage for `url` in `mode`
    pub async fn run(&self, url: &str, mode: AnnotationMode) -> Result<PipelineOutput, PipelineError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(PipelineError::InvalidInput(
                "Please enter a valid news article URL".to_string(),
            ));
        }

        info!("Starting run for {} ({} mode)", url, mode);

        let text = self.fetch_article(url).await?;
        let summary = self.summarize(&text).await?;
        let keywords = self.extract_keywords(&summary)?;
        let table = self.build_table(&keywords, mode).await?;

        info!("Run complete: {} keywords annotated", table.len());

        Ok(PipelineOutput {
            url: url.to_string(),
            summary,
            keywords,
            table,
        })
    }
}
