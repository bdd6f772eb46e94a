//! English stop-word list
//!
//! The English list is NLTK's, as shipped by the `stop-words` crate.

use std::collections::HashSet;

/// A case-insensitive stop-word set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// NLTK's English list
    pub fn english() -> Self {
        Self::from_words(stop_words::get(stop_words::LANGUAGE::English))
    }

    /// Build a set from arbitrary words (stored lower-case)
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// True when `word` is a stop word, ignoring case
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Number of stop words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the set is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}
