mod batch;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod ner;
mod parsing;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, NerBackend};
use crate::llm_client::LlmClient;
use crate::ner::{EntityRecognizer, LlmEntityRecognizer, RuleBasedRecognizer};
use crate::parsing::{ResumeParser, SkillsDictionary};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume parser v{}", env!("CARGO_PKG_VERSION"));

    // Skills vocabulary: file override or built-in list
    let skills = match &config.skills_file {
        Some(path) => SkillsDictionary::from_file(path)?,
        None => SkillsDictionary::default(),
    };
    info!("Skills dictionary loaded ({} terms)", skills.len());

    let recognizer = build_recognizer(&config)?;
    let parser = ResumeParser::new(Arc::new(skills), recognizer);
    info!("Name fallback recognizer: {}", parser.recognizer_backend());

    let state = AppState::new(config.clone(), parser);

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Rules are loaded eagerly so the first request doesn't pay for regex compilation.
fn build_recognizer(config: &Config) -> Result<Arc<dyn EntityRecognizer>> {
    match config.ner_backend {
        NerBackend::Rules => {
            RuleBasedRecognizer::warm_up();
            Ok(Arc::new(RuleBasedRecognizer))
        }
        NerBackend::Llm => {
            let api_key = config
                .anthropic_api_key
                .clone()
                .context("ANTHROPIC_API_KEY is required when NER_BACKEND=llm")?;
            let client = LlmClient::new(api_key, config.ner_llm_model.clone())?;
            info!("LLM client initialized (model: {})", client.model());
            Ok(Arc::new(LlmEntityRecognizer::new(client)))
        }
    }
}
