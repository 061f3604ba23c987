//! Name Extractor: positional header heuristic first, entity recognition as fallback.
//!
//! Tier 1 reads only the first 150 characters. Tokens are scanned left to right until one
//! contains `@` or a digit, or is a field label ending in `:` such as `Email:`; any of those
//! marks the start of contact details. Each earlier token keeps only its ASCII letters, and
//! non-empty leftovers are name words, collecting at most three. Two to four words are
//! accepted and title-cased. No check is made against job titles or other
//! non-name words, so a header such as "Senior Data Engineer" is accepted as a name.
//!
//! Tier 2 runs the configured `EntityRecognizer` over the whole text and takes the first
//! person. A failing recognizer is logged and the rule-based recognizer answers instead.

use tracing::{debug, warn};

use crate::ner::{first_person, EntityRecognizer, RuleBasedRecognizer};

const HEADER_WINDOW_CHARS: usize = 150;
const MAX_HEADER_WORDS: usize = 3;
const MIN_ACCEPTED_WORDS: usize = 2;
const MAX_ACCEPTED_WORDS: usize = 4;

pub async fn extract_name(text: &str, recognizer: &dyn EntityRecognizer) -> String {
    let words = header_name_words(text);
    if (MIN_ACCEPTED_WORDS..=MAX_ACCEPTED_WORDS).contains(&words.len()) {
        return title_case(&words);
    }

    debug!(
        "header yielded {} name words, falling back to {} recognizer",
        words.len(),
        recognizer.backend()
    );
    recognize_person(text, recognizer).await
}

/// Tier 1: the cleaned name-word candidates from the header window.
pub fn header_name_words(text: &str) -> Vec<String> {
    let mut words = Vec::new();

    for token in header_window(text).split_whitespace() {
        if token.contains('@') || token.ends_with(':') || token.chars().any(char::is_numeric) {
            break;
        }
        let letters: String = token.chars().filter(char::is_ascii_alphabetic).collect();
        if !letters.is_empty() {
            words.push(letters);
        }
        if words.len() == MAX_HEADER_WORDS {
            break;
        }
    }

    words
}

async fn recognize_person(text: &str, recognizer: &dyn EntityRecognizer) -> String {
    let entities = match recognizer.recognize(text).await {
        Ok(entities) => entities,
        Err(e) => {
            warn!(
                "{} recognizer failed, using rules instead: {e}",
                recognizer.backend()
            );
            RuleBasedRecognizer.find_people(text)
        }
    };
    first_person(&entities).unwrap_or_default().to_string()
}

fn header_window(text: &str) -> &str {
    match text.char_indices().nth(HEADER_WINDOW_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Words are ASCII letters only, so per-word capitalisation is enough.
fn title_case(words: &[String]) -> String {
    words
        .iter()
        .map(|word| {
            let (head, tail) = word.split_at(1);
            format!("{}{}", head.to_ascii_uppercase(), tail.to_ascii_lowercase())
        })
        .collect::<Vec<_>>()
        .join(" ")
}
