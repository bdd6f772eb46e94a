//! Prompt templates for summarization and word annotation

use gloss_domain::{AnnotationMode, Prompt};

const SUMMARY_SYSTEM: &str =
    "You are an assistant that summarizes learning materials into clear, concise subtopics.";

const SUMMARY_INSTRUCTION: &str =
    "Summarize the following learning material into key subtopics and provide a concise explanation for each:";

const EXPLANATION_SYSTEM: &str =
    "You are an assistant that provides clear, concise definitions for words.";

const SYNONYM_SYSTEM: &str = "You are an assistant that provides synonyms for words.";

/// Prompt asking for a subtopic summary of `text`
pub fn summary_prompt(text: &str) -> Prompt {
    Prompt::new(SUMMARY_SYSTEM, format!("{}\n\n{}", SUMMARY_INSTRUCTION, text))
}

/// Prompt asking for an explanation or synonyms of a single word
pub fn annotation_prompt(word: &str, mode: AnnotationMode) -> Prompt {
    match mode {
        AnnotationMode::Explanation => Prompt::new(
            EXPLANATION_SYSTEM,
            format!(
                "Please provide a brief and clear explanation for the word '{}' in English.",
                word
            ),
        ),
        AnnotationMode::Synonym => Prompt::new(
            SYNONYM_SYSTEM,
            format!(
                "Provide synonyms for the word '{}' without any numbers or extra text. Just the synonyms, separated by commas.",
                word
            ),
        ),
    }
}
