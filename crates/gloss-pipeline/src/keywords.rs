//! Keyword extraction from summary text

use crate::config::DEFAULT_KEYWORD_LIMIT;
use crate::error::PipelineError;
use crate::stopwords::StopWords;
use crate::tokenizer::word_tokenize;
use gloss_domain::Keyword;
use tracing::debug;

/// Selects study keywords from text.
///
/// Tokens are lower-cased; non-alphabetic tokens and stop words are dropped;
/// the first `limit` survivors are returned in source order. Duplicates are
/// kept.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: StopWords,
    limit: usize,
}

impl KeywordExtractor {
    /// Create an extractor with a stop-word set and a keyword limit
    pub fn new(stop_words: StopWords, limit: usize) -> Self {
        Self { stop_words, limit }
    }

    /// Maximum number of keywords returned
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Extract keywords from `text`
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::NoKeywordsFound`] when no token survives filtering.
    pub fn extract(&self, text: &str) -> Result<Vec<Keyword>, PipelineError> {
        let keywords: Vec<Keyword> = word_tokenize(text)
            .iter()
            .filter_map(|token| Keyword::from_token(token))
            .filter(|keyword| !self.stop_words.contains(keyword.as_str()))
            .take(self.limit)
            .collect();

        debug!("Extracted {} keywords (limit {})", keywords.len(), self.limit);

        if keywords.is_empty() {
            return Err(PipelineError::NoKeywordsFound);
        }
        Ok(keywords)
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(StopWords::english(), DEFAULT_KEYWORD_LIMIT)
    }
}

/// Extract up to 20 keywords using the English stop-word list
pub fn extract_keywords(text: &str) -> Result<Vec<Keyword>, PipelineError> {
    KeywordExtractor::default().extract(text)
}
