//! Keyword module - vocabulary tokens selected for study

use std::fmt;

/// A lower-cased, alphabetic-only token.
///
/// Stop-word filtering happens upstream in the keyword extractor; this type
/// only guarantees the lexical shape. Duplicates are legal: a keyword sequence
/// keeps every occurrence in source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Keyword(String);

impl Keyword {
    /// Normalise a raw token into a keyword
    ///
    /// Returns `None` when the lower-cased token is empty or contains any
    /// non-alphabetic character.
    ///
    /// # Examples
    ///
    /// ```
    /// use gloss_domain::Keyword;
    ///
    /// assert_eq!(Keyword::from_token("Cats").unwrap().as_str(), "cats");
    /// assert!(Keyword::from_token("covid-19").is_none());
    /// assert!(Keyword::from_token("").is_none());
    /// ```
    pub fn from_token(token: &str) -> Option<Self> {
        // Checked after lowering: some capitals lower to a letter plus a combining mark
        let lowered = token.to_lowercase();
        if lowered.is_empty() || !lowered.chars().all(char::is_alphabetic) {
            return None;
        }
        Some(Self(lowered))
    }

    /// Borrow the keyword text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the owned string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Keyword {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| format!("Not an alphabetic word: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases() {
        assert_eq!(Keyword::from_token("Dogs").unwrap().as_str(), "dogs");
    }

    #[test]
    fn test_rejects_non_alphabetic() {
        assert!(Keyword::from_token("1990").is_none());
        assert!(Keyword::from_token("well-known").is_none());
        assert!(Keyword::from_token("n't").is_none());
        assert!(Keyword::from_token(".").is_none());
    }

    #[test]
    fn test_accepts_unicode_letters() {
        assert_eq!(Keyword::from_token("Café").unwrap().as_str(), "café");
    }

    #[test]
    fn test_from_str() {
        let keyword: Keyword = "Loyal".parse().unwrap();
        assert_eq!(keyword.to_string(), "loyal");
        assert!("pets!".parse::<Keyword>().is_err());
    }
}
