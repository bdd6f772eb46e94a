//! English word tokenizer
//!
//! Treebank-style splitting: whitespace first, then symbols such as brackets,
//! quotes and `;` become their own tokens wherever they sit. Commas and colons
//! split too, except before a digit (`3,000`, `10:30`). Leading and trailing
//! punctuation runs of what remains become their own tokens, then contraction
//! clitics are split off the word they attach to. Internal hyphens, digits
//! and periods stay inside the token.

/// Suffixes split from the preceding word, longest first
const CLITICS: [&str; 7] = ["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Characters that always stand alone
const SPLIT_SYMBOLS: [char; 17] = [
    ';', '@', '#', '$', '%', '&', '?', '!', '"', '(', ')', '[', ']', '{', '}', '<', '>',
];

/// Split text into word and punctuation tokens
///
/// # Examples
///
/// ```
/// use gloss_pipeline::tokenizer::word_tokenize;
///
/// assert_eq!(
///     word_tokenize("Dogs don't bark (usually)."),
///     vec!["Dogs", "do", "n't", "bark", "(", "usually", ")", "."]
/// );
/// ```
pub fn word_tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        tokenize_chunk(chunk, &mut tokens);
    }
    tokens
}

fn tokenize_chunk(chunk: &str, tokens: &mut Vec<String>) {
    let mut segment_start = 0;
    let mut chars = chunk.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        let next = chars.peek().map(|&(_, n)| n);
        if is_split_symbol(c, next) {
            tokenize_segment(&chunk[segment_start..i], tokens);
            let end = i + c.len_utf8();
            tokens.push(chunk[i..end].to_string());
            segment_start = end;
        }
    }
    tokenize_segment(&chunk[segment_start..], tokens);
}

fn is_split_symbol(c: char, next: Option<char>) -> bool {
    match c {
        ',' | ':' => !next.is_some_and(|n| n.is_ascii_digit()),
        _ => SPLIT_SYMBOLS.contains(&c),
    }
}

fn tokenize_segment(segment: &str, tokens: &mut Vec<String>) {
    if segment.is_empty() {
        return;
    }
    let Some(start) = segment.find(char::is_alphanumeric) else {
        tokens.push(segment.to_string());
        return;
    };
    let end = segment
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(segment.len());

    if start > 0 {
        tokens.push(segment[..start].to_string());
    }

    let core = &segment[start..end];
    if core.eq_ignore_ascii_case("cannot") {
        tokens.push(core[..3].to_string());
        tokens.push(core[3..].to_string());
    } else {
        let (stem, clitic) = split_clitic(core);
        if !stem.is_empty() {
            tokens.push(stem.to_string());
        }
        if let Some(clitic) = clitic {
            tokens.push(clitic.to_string());
        }
    }

    if end < segment.len() {
        tokens.push(segment[end..].to_string());
    }
}

fn split_clitic(core: &str) -> (&str, Option<&str>) {
    for clitic in CLITICS {
        let width = clitic.chars().count();
        let Some((tail_start, _)) = core.char_indices().rev().nth(width - 1) else {
            continue;
        };
        if tail_start == 0 {
            continue;
        }
        let tail = &core[tail_start..];
        if tail.chars().zip(clitic.chars()).all(|(a, e)| clitic_char_matches(a, e)) {
            return (&core[..tail_start], Some(tail));
        }
    }
    (core, None)
}

fn clitic_char_matches(actual: char, expected: char) -> bool {
    if expected == '\'' {
        actual == '\'' || actual == '\u{2019}'
    } else {
        actual.to_ascii_lowercase() == expected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_punctuation() {
        assert_eq!(
            word_tokenize("Cats are popular pets. Dogs are loyal companions."),
            vec!["Cats", "are", "popular", "pets", ".", "Dogs", "are", "loyal", "companions", "."]
        );
    }

    #[test]
    fn test_contractions() {
        assert_eq!(word_tokenize("It's"), vec!["It", "'s"]);
        assert_eq!(word_tokenize("can't"), vec!["ca", "n't"]);
        assert_eq!(word_tokenize("they'll"), vec!["they", "'ll"]);
        assert_eq!(word_tokenize("We’re"), vec!["We", "’re"]);
        assert_eq!(word_tokenize("Cannot"), vec!["Can", "not"]);
    }

    #[test]
    fn test_internal_punctuation_kept() {
        assert_eq!(word_tokenize("well-known COVID-19"), vec!["well-known", "COVID-19"]);
        assert_eq!(word_tokenize("U.S. officials"), vec!["U.S", ".", "officials"]);
    }

    #[test]
    fn test_leading_punctuation_and_numbering() {
        assert_eq!(
            word_tokenize("1. \"Pets\": overview"),
            vec!["1", ".", "\"", "Pets", "\"", ":", "overview"]
        );
    }

    #[test]
    fn test_joined_words_split() {
        assert_eq!(
            word_tokenize("Cats,dogs and mice."),
            vec!["Cats", ",", "dogs", "and", "mice", "."]
        );
        assert_eq!(word_tokenize("**Pets:**Cats"), vec!["**", "Pets", ":", "**", "Cats"]);
        assert_eq!(word_tokenize("pets;cats"), vec!["pets", ";", "cats"]);
        assert_eq!(word_tokenize("(cats)[dogs]"), vec!["(", "cats", ")", "[", "dogs", "]"]);
    }

    #[test]
    fn test_digit_separators_kept() {
        assert_eq!(word_tokenize("3,000 fans at 10:30"), vec!["3,000", "fans", "at", "10:30"]);
        assert_eq!(word_tokenize("42%"), vec!["42", "%"]);
    }

    #[test]
    fn test_punctuation_only() {
        assert_eq!(word_tokenize("-- ..."), vec!["--", "..."]);
        assert!(word_tokenize("   ").is_empty());
    }

    #[test]
    fn test_possessive_plural() {
        assert_eq!(word_tokenize("dogs'"), vec!["dogs", "'"]);
        assert_eq!(word_tokenize("cats"), vec!["cats"]);
    }
}
