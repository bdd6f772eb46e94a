//! Gloss Pipeline
//!
//! Turns a news article URL into a vocabulary table: the article is
//! summarized into subtopics, keywords are picked from the summary, and each
//! keyword is annotated with an explanation or a synonym list.
//!
//! # Architecture
//!
//! ```text
//! URL → ArticleSource → Summarizer → KeywordExtractor → TableBuilder → CSV
//!                          ↓                               ↓
//!                       LlmProvider ←──── WordAnnotator ───┘
//! ```
//!
//! # Key Features
//!
//! - **Typed failures**: every stage returns [`PipelineError`]; error text is
//!   never passed along as content
//! - **Order preservation**: table rows always match keyword order, even with
//!   concurrent annotation calls
//! - **Configurable failure policy**: abort the table, or keep failed rows
//!   with a visible marker
//!
//! # Example Usage
//!
//! ```no_run
//! use gloss_article::HttpArticleSource;
//! use gloss_domain::AnnotationMode;
//! use gloss_llm::{LlmConfig, OpenAiProvider};
//! use gloss_pipeline::{to_csv, Pipeline, PipelineConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = OpenAiProvider::new(LlmConfig::with_api_key("sk-..."))?;
//! let source = HttpArticleSource::new()?;
//! let pipeline = Pipeline::new(llm, source, PipelineConfig::default())?;
//!
//! let output = pipeline.run("https://example.com/news", AnnotationMode::Synonym).await?;
//! println!("{}", output.summary);
//! println!("{}", to_csv(&output.table)?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod annotator;
mod client;
mod config;
mod error;
mod export;
mod keywords;
mod pipeline;
mod prompt;
mod stopwords;
mod summarizer;
mod table;
pub mod tokenizer;

#[cfg(test)]
mod tests;

pub use annotator::WordAnnotator;
pub use client::LlmClient;
pub use config::{AnnotationFailurePolicy, PipelineConfig, DEFAULT_KEYWORD_LIMIT};
pub use error::PipelineError;
pub use export::{parse_csv, to_csv, write_csv, CsvTable, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
pub use keywords::{extract_keywords, KeywordExtractor};
pub use pipeline::{Pipeline, PipelineOutput};
pub use prompt::{annotation_prompt, summary_prompt};
pub use stopwords::StopWords;
pub use summarizer::Summarizer;
pub use table::TableBuilder;
