//! Summary module - normalised subtopic text

use std::fmt;

/// Subtopic summary text.
///
/// Invariant: every line is non-empty after trimming and carries no
/// surrounding whitespace. The only way to build one is [`Summary::from_response`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary(String);

impl Summary {
    /// Normalise raw model output
    ///
    /// Splits on line breaks, trims each line, drops blank lines and rejoins
    /// with `\n`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gloss_domain::Summary;
    ///
    /// let summary = Summary::from_response("  1. Cats \r\n\n   \n2. Dogs\n");
    /// assert_eq!(summary.as_str(), "1. Cats\n2. Dogs");
    /// ```
    pub fn from_response(raw: &str) -> Self {
        let lines: Vec<&str> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self(lines.join("\n"))
    }

    /// Borrow the summary text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over subtopic lines
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines()
    }

    /// Number of subtopic lines
    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// True when the model produced nothing but whitespace
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
