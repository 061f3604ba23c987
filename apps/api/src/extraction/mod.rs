//! Document Text Extractor: turns an uploaded PDF or DOCX into one flat string.
//!
//! Operates on in-memory bytes only. The two formats share no logic; an unreadable
//! document surfaces as an `ExtractionError`, while empty or partial text is not an error.

pub mod docx;
pub mod pdf;

use std::path::Path;

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// The document formats accepted at the upload boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Detects the kind from a filename's extension, case-insensitively.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())?;

        match extension.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "pdf",
            DocumentKind::Docx => "docx",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One uploaded file. Lives only for the duration of a parse request.
#[derive(Debug, Clone)]
pub struct Document {
    pub filename: String,
    pub kind: DocumentKind,
    pub content: Bytes,
}

impl Document {
    pub fn new(filename: impl Into<String>, kind: DocumentKind, content: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            kind,
            content: content.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("DOCX extraction failed: {0}")]
    Docx(String),

    #[error("{kind} extraction aborted on a malformed document")]
    Malformed { kind: DocumentKind },
}

/// Extracts all text from a document's bytes according to its declared kind.
///
/// CPU-bound; async callers should run it on the blocking pool.
pub fn extract_text(content: &[u8], kind: DocumentKind) -> Result<String, ExtractionError> {
    let text = match kind {
        DocumentKind::Pdf => pdf::extract_pdf_text(content)?,
        DocumentKind::Docx => docx::extract_docx_text(content)?,
    };
    info!(
        "{} extraction produced {} characters from {} bytes",
        kind,
        text.chars().count(),
        content.len()
    );
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_filename_is_case_insensitive() {
        assert_eq!(DocumentKind::from_filename("cv.PDF"), Some(DocumentKind::Pdf));
        assert_eq!(
            DocumentKind::from_filename("Jane Doe Resume.Docx"),
            Some(DocumentKind::Docx)
        );
    }

    #[test]
    fn test_kind_rejects_other_formats() {
        assert_eq!(DocumentKind::from_filename("resume.doc"), None);
        assert_eq!(DocumentKind::from_filename("resume.txt"), None);
        assert_eq!(DocumentKind::from_filename("pdf"), None);
        assert_eq!(DocumentKind::from_filename(""), None);
    }

    #[test]
    fn test_kind_display_matches_extension() {
        assert_eq!(DocumentKind::Pdf.to_string(), "pdf");
        assert_eq!(DocumentKind::Docx.to_string(), "docx");
    }

    #[test]
    fn test_extract_text_dispatches_on_kind() {
        let err = extract_text(b"definitely not a zip archive", DocumentKind::Docx).unwrap_err();
        assert!(matches!(err, ExtractionError::Docx(_)));
    }
}
