//! Resume Parser: normalizes extracted text and runs the four field extractors.
//!
//! Extractors are independent: each reads the same normalized text, none sees another's
//! output, and none can fail.

use std::sync::Arc;

use tracing::debug;

use crate::models::CandidateRecord;
use crate::ner::{EntityRecognizer, RuleBasedRecognizer};
use crate::parsing::contact::{extract_email, extract_phone};
use crate::parsing::name::extract_name;
use crate::parsing::normalize::normalize;
use crate::parsing::skills::{extract_skills, SkillsDictionary};

#[derive(Clone)]
pub struct ResumeParser {
    skills: Arc<SkillsDictionary>,
    recognizer: Arc<dyn EntityRecognizer>,
}

impl ResumeParser {
    pub fn new(skills: Arc<SkillsDictionary>, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { skills, recognizer }
    }

    pub fn skills(&self) -> Arc<SkillsDictionary> {
        Arc::clone(&self.skills)
    }

    pub fn recognizer_backend(&self) -> &'static str {
        self.recognizer.backend()
    }

    /// Builds a `CandidateRecord` from one document's raw extracted text.
    pub async fn parse(&self, raw_text: &str, filename: &str) -> CandidateRecord {
        let normalized = normalize(raw_text);
        let text = normalized.as_str();

        let record = CandidateRecord {
            name: extract_name(text, self.recognizer.as_ref()).await,
            email: extract_email(text),
            phone: extract_phone(text),
            skills: extract_skills(text, &self.skills),
            filename: filename.to_string(),
        };

        debug!(
            "parsed {filename}: name={:?} email={:?} phone={:?} skills={:?}",
            record.name, record.email, record.phone, record.skills
        );
        record
    }
}

impl Default for ResumeParser {
    /// Built-in skills vocabulary with the rule-based recognizer.
    fn default() -> Self {
        Self::new(
            Arc::new(SkillsDictionary::default()),
            Arc::new(RuleBasedRecognizer),
        )
    }
}
