//! Named-entity recognition: pluggable backends behind the `EntityRecognizer` trait.
//!
//! Default: `RuleBasedRecognizer` (pure-Rust, deterministic, built once per process).
//! Optional: `LlmEntityRecognizer` (Anthropic Messages API via `llm_client`).
//!
//! `ResumeParser` holds an `Arc<dyn EntityRecognizer>`, chosen at startup via `NER_BACKEND`.

pub mod llm;
pub mod prompts;
pub mod rules;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm_client::LlmError;

pub use llm::LlmEntityRecognizer;
pub use rules::RuleBasedRecognizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
}

/// A labelled span of the input text. `start..end` are byte offsets into that text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Error)]
pub enum NerError {
    #[error("LLM entity recognition failed: {0}")]
    Llm(#[from] LlmError),
}

/// Implement this to swap recognizer backends without touching the name extractor.
#[async_trait]
pub trait EntityRecognizer: Send + Sync {
    /// Returns the entities found in `text`, in document order.
    async fn recognize(&self, text: &str) -> Result<Vec<Entity>, NerError>;

    /// Short backend name for logs: "rules" | "llm".
    fn backend(&self) -> &'static str;
}

/// Text of the first entity labelled `Person`, if any.
pub fn first_person(entities: &[Entity]) -> Option<&str> {
    entities
        .iter()
        .find(|e| e.label == EntityLabel::Person)
        .map(|e| e.text.as_str())
}
