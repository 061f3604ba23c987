//! Person recognition via the Anthropic Messages API.
//!
//! The model only proposes names; a name is kept when it occurs verbatim in the source
//! text, and its offsets are taken from that occurrence.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::prompts::PERSON_NER_PROMPT;
use super::{Entity, EntityLabel, EntityRecognizer, NerError};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::LlmClient;

#[derive(Debug, Deserialize)]
struct PersonList {
    #[serde(default)]
    persons: Vec<String>,
}

pub struct LlmEntityRecognizer {
    client: LlmClient,
}

impl LlmEntityRecognizer {
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EntityRecognizer for LlmEntityRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<Entity>, NerError> {
        let prompt = PERSON_NER_PROMPT.replace("{text}", text);
        let list: PersonList = self.client.complete_json(&prompt, JSON_ONLY_SYSTEM).await?;
        debug!("LLM proposed {} person names", list.persons.len());
        Ok(ground_in_text(text, &list.persons))
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Keeps proposed names that occur in `text`, ordered by where they first occur.
fn ground_in_text(text: &str, proposed: &[String]) -> Vec<Entity> {
    let mut entities: Vec<Entity> = proposed
        .iter()
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .filter_map(|name| {
            text.find(name).map(|start| Entity {
                text: name.to_string(),
                label: EntityLabel::Person,
                start,
                end: start + name.len(),
            })
        })
        .collect();
    entities.sort_by_key(|e| e.start);
    entities.dedup_by(|a, b| a.start == b.start && a.text == b.text);
    entities
}
