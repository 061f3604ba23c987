//! PDF path: page-by-page text via `pdf-extract`.
//!
//! `pdf-extract` panics on some malformed inputs instead of returning an error, so the
//! call is wrapped in `catch_unwind`. Image-only pages yield no text and are skipped;
//! there is no OCR fallback.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, warn};

use super::{DocumentKind, ExtractionError};

pub fn extract_pdf_text(content: &[u8]) -> Result<String, ExtractionError> {
    let pages = extract_pages(content)?;
    debug!("PDF has {} pages", pages.len());
    Ok(join_pages(&pages))
}

fn extract_pages(content: &[u8]) -> Result<Vec<String>, ExtractionError> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(content)
    }));

    match result {
        Ok(Ok(pages)) => Ok(pages),
        Ok(Err(e)) => Err(ExtractionError::Pdf(e.to_string())),
        Err(_) => {
            warn!("pdf-extract panicked while reading a document");
            Err(ExtractionError::Malformed {
                kind: DocumentKind::Pdf,
            })
        }
    }
}

/// Joins page texts in order with a single space. Pages with no text contribute nothing.
fn join_pages(pages: &[String]) -> String {
    pages
        .iter()
        .map(|page| page.trim())
        .filter(|page| !page.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
