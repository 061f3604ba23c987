//! Rule-based person recognizer.
//!
//! A person is a run of 2 or 3 consecutive capitalised, name-shaped words that are not
//! common resume vocabulary. Trailing punctuation closes a run; a run longer than three
//! words is treated as a heading or title and dropped. Single initials (`J.`) may appear
//! inside a run but cannot open or close one.
//!
//! The compiled patterns and the stop list live in one process-wide model, built on first
//! use and read-only afterwards.

use std::collections::HashSet;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{Entity, EntityLabel, EntityRecognizer, NerError};

const MIN_NAME_WORDS: usize = 2;
const MAX_NAME_WORDS: usize = 3;

/// Characters peeled off the front of a token before matching.
const OPENERS: &[char] = &['(', '[', '"', '\'', '“', '‘'];
/// Characters that end a token and close the current run.
const CLOSERS: &[char] = &[',', ';', ':', '.', ')', ']', '|', '"', '\'', '”', '’', '/'];

/// Capitalised words that show up in resume headers but are not names.
const STOP_WORDS: &[&str] = &[
    // document & section vocabulary
    "resume", "résumé", "curriculum", "vitae", "cv", "bio", "biodata", "profile", "summary",
    "objective", "career", "experience", "experiences", "employment", "history", "education",
    "qualifications", "qualification", "skills", "skill", "projects", "project", "contact",
    "details", "information", "personal", "professional", "technical", "references",
    "reference", "certifications", "certification", "certificates", "achievements", "awards",
    "honors", "publications", "languages", "interests", "hobbies", "activities",
    "extracurricular", "declaration", "volunteer", "internship", "internships", "work",
    "academic", "courses", "coursework", "strengths", "tools", "technologies", "about", "me",
    // contact labels
    "name", "email", "mail", "phone", "mobile", "tel", "telephone", "cell", "address",
    "linkedin", "github", "portfolio", "website", "location", "nationality", "dob", "date",
    "birth", "gender",
    // roles & seniority
    "senior", "junior", "lead", "principal", "staff", "chief", "head", "intern", "trainee",
    "associate", "assistant", "manager", "director", "engineer", "engineering", "developer",
    "development", "designer", "architect", "analyst", "consultant", "scientist",
    "researcher", "specialist", "administrator", "officer", "executive", "coordinator",
    "student", "graduate", "fresher", "software", "data", "full", "stack", "frontend",
    "backend", "web", "mobile", "cloud", "product", "team", "member", "president",
    // institutions & degrees
    "university", "college", "institute", "school", "academy", "department", "faculty",
    "bachelor", "bachelors", "master", "masters", "doctor", "degree", "diploma", "science",
    "sciences", "arts", "technology", "computer", "information", "national", "international",
    "state", "central", "government", "public", "private", "limited", "ltd", "inc", "llc",
    "corp", "corporation", "company", "pvt", "group", "solutions", "services", "systems",
    "labs", "lab",
    // months & days
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec", "present", "current", "monday", "tuesday", "wednesday",
    "thursday", "friday", "saturday", "sunday",
    // technologies commonly capitalised
    "python", "java", "javascript", "typescript", "react", "angular", "django", "flask",
    "spring", "node", "rust", "ruby", "rails", "swift", "kotlin", "scala", "excel", "word",
    "power", "tableau", "linux", "windows", "docker", "kubernetes", "git", "machine",
    "learning", "deep", "analysis", "natural", "language", "processing", "vision",
    // honorifics & function words
    "mr", "mrs", "ms", "miss", "dr", "prof", "sir", "madam", "dear", "the", "and", "of", "in",
    "at", "for", "with", "to", "from", "on", "by", "an", "a", "my", "i", "new", "street",
    "road", "city", "india", "usa",
];

struct RuleModel {
    token: Regex,
    name_word: Regex,
    initial: Regex,
    stop_words: HashSet<&'static str>,
}

static MODEL: Lazy<RuleModel> = Lazy::new(|| RuleModel {
    token: Regex::new(r"\S+").expect("valid token regex"),
    name_word: Regex::new(r"^[A-Z](?:[a-z]+|'[A-Z][a-z]+|[a-z]*[A-Z][a-z]+)(?:-[A-Z][a-z]+)?$")
        .expect("valid name word regex"),
    initial: Regex::new(r"^[A-Z]\.$").expect("valid initial regex"),
    stop_words: STOP_WORDS.iter().copied().collect(),
});

/// Handle to the shared rule model. Cheap to copy; all instances share one model.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleBasedRecognizer;

#[derive(Debug, Clone, Copy)]
struct RunWord {
    start: usize,
    end: usize,
    is_initial: bool,
}

impl RuleBasedRecognizer {
    /// Forces the model to build now instead of on the first fallback.
    pub fn warm_up() {
        Lazy::force(&MODEL);
    }

    /// Person entities in `text`, in document order.
    pub fn find_people(&self, text: &str) -> Vec<Entity> {
        let model = &*MODEL;
        let mut entities = Vec::new();
        let mut run: Vec<RunWord> = Vec::new();

        for token in model.token.find_iter(text) {
            let raw = token.as_str();
            let opened = raw.trim_start_matches(OPENERS);
            let start = token.start() + (raw.len() - opened.len());

            if model.initial.is_match(opened) {
                run.push(RunWord {
                    start,
                    end: token.end(),
                    is_initial: true,
                });
                continue;
            }

            let core = opened.trim_end_matches(CLOSERS);
            let closes_run = core.len() < opened.len();

            if model.is_name_word(core) {
                run.push(RunWord {
                    start,
                    end: start + core.len(),
                    is_initial: false,
                });
                if closes_run {
                    flush_run(text, &mut run, &mut entities);
                }
            } else {
                flush_run(text, &mut run, &mut entities);
            }
        }
        flush_run(text, &mut run, &mut entities);

        entities
    }
}

impl RuleModel {
    fn is_name_word(&self, word: &str) -> bool {
        !word.is_empty()
            && self.name_word.is_match(word)
            && !self.stop_words.contains(word.to_lowercase().as_str())
    }
}

fn flush_run(text: &str, run: &mut Vec<RunWord>, entities: &mut Vec<Entity>) {
    let words = std::mem::take(run);
    let (Some(first), Some(last)) = (words.first(), words.last()) else {
        return;
    };
    if !(MIN_NAME_WORDS..=MAX_NAME_WORDS).contains(&words.len())
        || first.is_initial
        || last.is_initial
    {
        return;
    }
    entities.push(Entity {
        text: text[first.start..last.end].to_string(),
        label: EntityLabel::Person,
        start: first.start,
        end: last.end,
    });
}

#[async_trait]
impl EntityRecognizer for RuleBasedRecognizer {
    async fn recognize(&self, text: &str) -> Result<Vec<Entity>, NerError> {
        Ok(self.find_people(text))
    }

    fn backend(&self) -> &'static str {
        "rules"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(text: &str) -> Vec<String> {
        RuleBasedRecognizer
            .find_people(text)
            .into_iter()
            .map(|e| e.text)
            .collect()
    }

    #[test]
    fn test_finds_two_word_name() {
        assert_eq!(people("Resume 2024 John Smith Software Engineer"), ["John Smith"]);
    }

    #[test]
    fn test_name_after_label_with_colon() {
        assert_eq!(people("CURRICULUM VITAE Name: Priya Sharma, Jaipur"), ["Priya Sharma"]);
    }

    #[test]
    fn test_middle_initial_is_kept() {
        assert_eq!(people("Contact: Mary J. Blige 555 0100"), ["Mary J. Blige"]);
    }

    #[test]
    fn test_prefixed_and_hyphenated_surnames() {
        assert_eq!(people("by Sean O'Brien today"), ["Sean O'Brien"]);
        assert_eq!(people("Ronald McDonald"), ["Ronald McDonald"]);
        assert_eq!(people("Anna Smith-Jones"), ["Anna Smith-Jones"]);
    }

    #[test]
    fn test_stop_words_break_runs() {
        assert!(people("Senior Software Engineer at Machine Learning Labs").is_empty());
    }

    #[test]
    fn test_long_capitalised_runs_are_dropped() {
        assert!(people("Quick Brown Fox Jumps Over everything").is_empty());
    }

    #[test]
    fn test_single_word_is_not_a_person() {
        assert!(people("2019 Madonna 2020").is_empty());
    }

    #[test]
    fn test_all_caps_is_not_matched() {
        assert!(people("JOHN SMITH").is_empty());
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "(Grace Hopper) was here";
        let entities = RuleBasedRecognizer.find_people(text);
        assert_eq!(entities.len(), 1);
        let entity = &entities[0];
        assert_eq!(&text[entity.start..entity.end], "Grace Hopper");
        assert_eq!(entity.label, EntityLabel::Person);
    }

    #[test]
    fn test_multiple_people_in_order() {
        assert_eq!(
            people("Referee: Alan Turing; Mentor: Ada Lovelace."),
            ["Alan Turing", "Ada Lovelace"]
        );
    }

    #[tokio::test]
    async fn test_trait_recognize_matches_find_people() {
        let recognizer = RuleBasedRecognizer;
        let entities = recognizer.recognize("hello Linus Torvalds").await.unwrap();
        assert_eq!(entities[0].text, "Linus Torvalds");
        assert_eq!(recognizer.backend(), "rules");
    }
}
