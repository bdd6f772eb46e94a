//! Error types for the pipeline

use gloss_article::ArticleError;
use gloss_llm::LlmError;
use thiserror::Error;

/// Errors that can occur at any pipeline stage
#[derive(Error, Debug)]
pub enum PipelineError {
    /// No API key at call time
    #[error("API key is not set. Pass --api-key or set OPENAI_API_KEY")]
    MissingCredential,

    /// Article fetch or API transport failure
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The completion API returned an error or an unusable response
    #[error("API failure: {0}")]
    ApiFailure(String),

    /// The article page was fetched but could not be parsed
    #[error("Could not extract text from the URL: {0}")]
    Extraction(String),

    /// The article page yielded no text
    #[error("Could not extract text from the URL")]
    EmptyExtraction,

    /// Keyword filtering left nothing
    #[error("No valid keywords found")]
    NoKeywordsFound,

    /// Caller supplied unusable input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// An external call exceeded the configured stage timeout
    #[error("{0} timed out after {1}s")]
    Timeout(&'static str, u64),

    /// Table could not be serialized
    #[error("Export error: {0}")]
    Export(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<LlmError> for PipelineError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::MissingCredential => PipelineError::MissingCredential,
            LlmError::Communication(msg) => PipelineError::NetworkFailure(msg),
            LlmError::Api { status, message } => {
                PipelineError::ApiFailure(format!("HTTP {}: {}", status, message))
            }
            LlmError::InvalidResponse(msg) | LlmError::Other(msg) => PipelineError::ApiFailure(msg),
        }
    }
}

impl From<ArticleError> for PipelineError {
    fn from(e: ArticleError) -> Self {
        match e {
            ArticleError::Network(msg) => PipelineError::NetworkFailure(msg),
            ArticleError::Status(code) => {
                PipelineError::NetworkFailure(format!("article request returned HTTP {}", code))
            }
            ArticleError::Parse(msg) => PipelineError::Extraction(msg),
        }
    }
}

impl From<csv::Error> for PipelineError {
    fn from(e: csv::Error) -> Self {
        PipelineError::Export(e.to_string())
    }
}
