use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;
const DEFAULT_BATCH_CONCURRENCY: usize = 4;
const DEFAULT_NER_LLM_MODEL: &str = "claude-sonnet-4-5";

/// Which entity recognizer answers the name fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NerBackend {
    #[default]
    Rules,
    Llm,
}

impl std::str::FromStr for NerBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rules" | "rule" => Ok(NerBackend::Rules),
            "llm" => Ok(NerBackend::Llm),
            other => bail!("NER_BACKEND must be 'rules' or 'llm', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub skills_file: Option<PathBuf>,
    pub ner_backend: NerBackend,
    pub anthropic_api_key: Option<String>,
    pub ner_llm_model: String,
    pub max_upload_bytes: usize,
    pub batch_concurrency: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let ner_backend = optional_env("NER_BACKEND")
            .map(|v| v.parse::<NerBackend>())
            .transpose()?
            .unwrap_or_default();

        let anthropic_api_key = match ner_backend {
            NerBackend::Llm => Some(require_env("ANTHROPIC_API_KEY")?),
            NerBackend::Rules => optional_env("ANTHROPIC_API_KEY"),
        };

        let batch_concurrency = parse_env("BATCH_CONCURRENCY", DEFAULT_BATCH_CONCURRENCY)?;
        if batch_concurrency == 0 {
            bail!("BATCH_CONCURRENCY must be at least 1");
        }

        Ok(Config {
            port: parse_env("PORT", 8080)?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            skills_file: optional_env("SKILLS_FILE").map(PathBuf::from),
            ner_backend,
            anthropic_api_key,
            ner_llm_model: optional_env("NER_LLM_MODEL")
                .unwrap_or_else(|| DEFAULT_NER_LLM_MODEL.to_string()),
            max_upload_bytes: parse_env("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            batch_concurrency,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            skills_file: None,
            ner_backend: NerBackend::Rules,
            anthropic_api_key: None,
            ner_llm_model: DEFAULT_NER_LLM_MODEL.to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            batch_concurrency: DEFAULT_BATCH_CONCURRENCY,
        }
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}
