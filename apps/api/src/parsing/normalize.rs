use std::ops::Deref;

use serde::Serialize;

/// Canonical whitespace form of a document's text: single spaces, no line breaks,
/// no leading or trailing whitespace. Only constructible through [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for NormalizedText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

/// Collapses every whitespace run (newlines and tabs included) to one space and trims.
pub fn normalize(raw: &str) -> NormalizedText {
    NormalizedText(raw.split_whitespace().collect::<Vec<_>>().join(" "))
}
