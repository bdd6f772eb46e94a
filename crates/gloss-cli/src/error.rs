//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pipeline stage failure
    #[error("{0}")]
    Pipeline(#[from] gloss_pipeline::PipelineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Line editor failure
    #[error("Editor error: {0}")]
    Editor(String),
}

impl From<gloss_llm::LlmError> for CliError {
    fn from(e: gloss_llm::LlmError) -> Self {
        CliError::Pipeline(e.into())
    }
}

impl From<gloss_article::ArticleError> for CliError {
    fn from(e: gloss_article::ArticleError) -> Self {
        CliError::Pipeline(e.into())
    }
}
