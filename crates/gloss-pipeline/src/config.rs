//! Configuration for the pipeline

use gloss_domain::CompletionOptions;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of keywords kept from a summary
pub const DEFAULT_KEYWORD_LIMIT: usize = 20;

/// What to do when a single keyword's annotation call fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationFailurePolicy {
    /// Fail the whole table with the first error (in keyword order)
    #[default]
    Abort,
    /// Keep the row with a visible failure marker and continue
    MarkRow,
}

/// Configuration for the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Model, temperature and token limit for every completion call
    pub completion: CompletionOptions,

    /// Maximum keywords taken from the summary
    pub keyword_limit: usize,

    /// Annotation calls in flight at once (1 = sequential)
    pub annotation_concurrency: usize,

    /// Maximum time for a single external call (seconds)
    pub stage_timeout_secs: u64,

    /// Behaviour when one annotation call fails
    pub annotation_failure: AnnotationFailurePolicy,
}

impl PipelineConfig {
    /// Get the stage timeout as a Duration
    pub fn stage_timeout(&self) -> Duration {
        Duration::from_secs(self.stage_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.keyword_limit == 0 {
            return Err("keyword_limit must be greater than 0".to_string());
        }
        if self.annotation_concurrency == 0 {
            return Err("annotation_concurrency must be greater than 0".to_string());
        }
        if self.stage_timeout_secs == 0 {
            return Err("stage_timeout_secs must be greater than 0".to_string());
        }
        if !(0.0..=2.0).contains(&self.completion.temperature) {
            return Err("completion.temperature must be between 0.0 and 2.0".to_string());
        }
        if self.completion.max_tokens == 0 {
            return Err("completion.max_tokens must be greater than 0".to_string());
        }
        if self.completion.model.trim().is_empty() {
            return Err("completion.model must not be empty".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            completion: CompletionOptions::default(),
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
            annotation_concurrency: 1,
            stage_timeout_secs: 120,
            annotation_failure: AnnotationFailurePolicy::Abort,
        }
    }
}
