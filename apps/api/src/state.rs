use std::sync::Arc;

use crate::batch::BatchRunner;
use crate::config::Config;
use crate::parsing::{ResumeParser, SkillsDictionary};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Active skills vocabulary. Also held by the parser; kept here for the skills endpoint.
    pub skills: Arc<SkillsDictionary>,
    pub parser: ResumeParser,
    pub runner: BatchRunner,
}

impl AppState {
    pub fn new(config: Config, parser: ResumeParser) -> Self {
        let runner = BatchRunner::new(parser.clone(), config.batch_concurrency);
        Self {
            skills: parser.skills(),
            config,
            parser,
            runner,
        }
    }
}
