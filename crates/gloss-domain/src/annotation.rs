//! Annotation module - explanations and synonym lists for keywords

use crate::keyword::Keyword;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of annotation to request for every keyword in a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationMode {
    /// A brief English definition
    #[default]
    Explanation,
    /// A comma-separated list of synonyms
    Synonym,
}

impl AnnotationMode {
    /// Display name, also used as the annotation column header
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationMode::Explanation => "Explanation",
            AnnotationMode::Synonym => "Synonym",
        }
    }

    /// Parse a mode name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "explanation" | "explain" | "definition" => Some(AnnotationMode::Explanation),
            "synonym" | "synonyms" => Some(AnnotationMode::Synonym),
            _ => None,
        }
    }
}

impl fmt::Display for AnnotationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AnnotationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid mode: {}", s))
    }
}

/// The annotation attached to one keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Lower-cased model output
    Text(String),
    /// The annotation call failed; the row is kept with a visible marker
    Failed(String),
}

impl Annotation {
    /// Build a text annotation, lower-casing the model output
    pub fn text(raw: &str) -> Self {
        Annotation::Text(raw.to_lowercase())
    }

    /// True for rows whose annotation call failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Annotation::Failed(_))
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Text(text) => f.write_str(text),
            Annotation::Failed(reason) => write!(f, "error: {}", reason),
        }
    }
}

/// One (keyword, annotation) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRow {
    /// Source keyword
    pub keyword: Keyword,
    /// Its annotation
    pub annotation: Annotation,
}

/// Ordered two-column table of keywords and their annotations.
///
/// Row order always equals the keyword order the table was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationTable {
    mode: AnnotationMode,
    rows: Vec<AnnotationRow>,
}

impl AnnotationTable {
    /// Header of the keyword column
    pub const WORD_HEADER: &'static str = "Word";

    /// Create an empty table for a mode
    pub fn new(mode: AnnotationMode) -> Self {
        Self {
            mode,
            rows: Vec::new(),
        }
    }

    /// Create a table from prebuilt rows
    pub fn from_rows(mode: AnnotationMode, rows: Vec<AnnotationRow>) -> Self {
        Self { mode, rows }
    }

    /// Append a row
    pub fn push(&mut self, keyword: Keyword, annotation: Annotation) {
        self.rows.push(AnnotationRow { keyword, annotation });
    }

    /// Mode this table was built for
    pub fn mode(&self) -> AnnotationMode {
        self.mode
    }

    /// Column headers: `Word` and the mode name
    pub fn header(&self) -> [&'static str; 2] {
        [Self::WORD_HEADER, self.mode.as_str()]
    }

    /// Rows in keyword order
    pub fn rows(&self) -> &[AnnotationRow] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows carrying a failure marker
    pub fn failed_count(&self) -> usize {
        self.rows.iter().filter(|row| row.annotation.is_failed()).count()
    }
}
