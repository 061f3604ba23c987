//! Batch Runner: extract and parse every uploaded document, one report per request.
//!
//! A document that cannot be read becomes a `DocumentFailure`; the rest of the batch
//! carries on. Documents may run concurrently up to the configured limit, but records and
//! failures are always reported in upload order.

pub mod export;
pub mod handlers;

use std::sync::Arc;

use anyhow::anyhow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use tracing::{info, warn};
use uuid::Uuid;

use crate::extraction::{extract_text, Document};
use crate::models::CandidateRecord;
use crate::parsing::ResumeParser;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFailure {
    pub filename: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub batch_id: Uuid,
    pub processed_at: DateTime<Utc>,
    pub records: Vec<CandidateRecord>,
    pub failures: Vec<DocumentFailure>,
}

#[derive(Clone)]
pub struct BatchRunner {
    parser: ResumeParser,
    limit: Arc<Semaphore>,
}

impl BatchRunner {
    pub fn new(parser: ResumeParser, concurrency: usize) -> Self {
        Self {
            parser,
            limit: Arc::new(Semaphore::new(concurrency.max(1))),
        }
    }

    pub async fn run(&self, documents: Vec<Document>) -> BatchReport {
        let batch_id = Uuid::new_v4();
        info!("Batch {batch_id}: processing {} documents", documents.len());

        let handles: Vec<_> = documents
            .into_iter()
            .map(|document| {
                let parser = self.parser.clone();
                let limit = Arc::clone(&self.limit);
                let filename = document.filename.clone();
                let handle = tokio::spawn(async move {
                    let _permit = limit.acquire_owned().await.map_err(|e| anyhow!(e))?;
                    process_document(&parser, document).await
                });
                (filename, handle)
            })
            .collect();

        let mut records = Vec::new();
        let mut failures = Vec::new();
        for (filename, handle) in handles {
            let outcome = handle.await.map_err(|e| anyhow!("worker task failed: {e}"));
            match outcome.and_then(|result| result) {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!("Batch {batch_id}: skipping '{filename}': {e:#}");
                    failures.push(DocumentFailure {
                        filename,
                        error: format!("{e:#}"),
                    });
                }
            }
        }

        info!(
            "Batch {batch_id}: {} parsed, {} failed",
            records.len(),
            failures.len()
        );

        BatchReport {
            batch_id,
            processed_at: Utc::now(),
            records,
            failures,
        }
    }
}

async fn process_document(
    parser: &ResumeParser,
    document: Document,
) -> anyhow::Result<CandidateRecord> {
    let Document {
        filename,
        kind,
        content,
    } = document;

    let text = tokio::task::spawn_blocking(move || extract_text(&content, kind)).await??;
    Ok(parser.parse(&text, &filename).await)
}
