//! Gloss Domain Layer
//!
//! Core value types and collaborator interfaces for the gloss vocabulary
//! pipeline. Every other crate in the workspace depends on this one.
//!
//! ## Key Concepts
//!
//! - **Prompt**: An ordered pair of role-tagged chat messages (system, user)
//! - **Summary**: Model output normalised to non-empty, trimmed lines
//! - **Keyword**: A lower-cased, alphabetic-only token selected from a summary
//! - **Annotation**: An explanation or synonym list attached to a keyword
//! - **AnnotationTable**: Ordered (keyword, annotation) rows for one mode
//!
//! ## Architecture
//!
//! - Pure value types only, no I/O
//! - Infrastructure (HTTP, HTML parsing) lives in other crates
//! - Trait definitions for the two external collaborators

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod annotation;
pub mod keyword;
pub mod prompt;
pub mod summary;
pub mod traits;

// Re-exports for convenience
pub use annotation::{Annotation, AnnotationMode, AnnotationRow, AnnotationTable};
pub use keyword::Keyword;
pub use prompt::{ChatMessage, CompletionOptions, Prompt, Role};
pub use summary::Summary;
