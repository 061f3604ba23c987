//! Skills dictionary and the skills extractor.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Built-in vocabulary used when no skills file is configured.
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "sql",
    "nlp",
    "html",
    "css",
    "react",
    "javascript",
    "machine learning",
    "deep learning",
    "django",
    "flask",
    "data analysis",
];

/// Ordered, deduplicated, lowercase set of skill terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillsDictionary {
    terms: Vec<String>,
}

impl SkillsDictionary {
    /// Builds a dictionary from arbitrary terms: trimmed, lowercased, empties dropped,
    /// duplicates removed keeping the first occurrence.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .filter(|t| seen.insert(t.clone()))
            .collect();
        Self { terms }
    }

    /// Parses a vocabulary file: one term per line, `#` starts a comment line.
    pub fn parse(contents: &str) -> Self {
        Self::new(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skills file '{}'", path.display()))?;
        let dictionary = Self::parse(&contents);
        anyhow::ensure!(
            !dictionary.is_empty(),
            "Skills file '{}' contains no terms",
            path.display()
        );
        Ok(dictionary)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for SkillsDictionary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }
}

/// Returns every dictionary term occurring as a substring of the lowercased text,
/// joined with `", "` in dictionary order.
pub fn extract_skills(text: &str, dictionary: &SkillsDictionary) -> String {
    let lowered = text.to_lowercase();
    dictionary
        .terms()
        .iter()
        .filter(|term| lowered.contains(term.as_str()))
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
