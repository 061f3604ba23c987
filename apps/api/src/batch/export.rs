//! CSV export of candidate records: UTF-8, header row always present, one row per record.

use anyhow::{Context, Result};

use crate::models::{CandidateRecord, CANDIDATE_CSV_HEADER};

pub const CSV_FILENAME: &str = "parsed_resumes.csv";
pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

pub fn records_to_csv(records: &[CandidateRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer
        .write_record(CANDIDATE_CSV_HEADER)
        .context("Failed to write CSV header")?;
    for record in records {
        writer
            .write_record(record.as_csv_row())
            .with_context(|| format!("Failed to write CSV row for '{}'", record.filename))?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))
}
