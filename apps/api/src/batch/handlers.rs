//! Axum route handlers for the resume parsing API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::batch::export::{records_to_csv, CSV_CONTENT_TYPE, CSV_FILENAME};
use crate::batch::BatchReport;
use crate::errors::AppError;
use crate::extraction::{Document, DocumentKind};
use crate::models::CandidateRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ParseTextRequest {
    pub filename: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    pub skills: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes/parse
///
/// Multipart upload of one or more PDF/DOCX files. Returns one record per readable file,
/// in upload order, plus the files that could not be read.
pub async fn handle_parse(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<BatchReport>, AppError> {
    let documents = read_uploads(multipart).await?;
    let report = state.runner.run(documents).await;
    Ok(Json(report))
}

/// POST /api/v1/resumes/export
///
/// Same input as `/parse`; responds with the records as a `parsed_resumes.csv` download.
pub async fn handle_export(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let documents = read_uploads(multipart).await?;
    let report = state.runner.run(documents).await;
    let body = records_to_csv(&report.records)?;

    Ok((
        [
            (header::CONTENT_TYPE, CSV_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{CSV_FILENAME}\""),
            ),
        ],
        body,
    ))
}

/// POST /api/v1/resumes/parse-text
///
/// Parses already-extracted text. Useful when the caller has its own extraction step.
pub async fn handle_parse_text(
    State(state): State<AppState>,
    Json(request): Json<ParseTextRequest>,
) -> Result<Json<CandidateRecord>, AppError> {
    if request.filename.trim().is_empty() {
        return Err(AppError::Validation("filename cannot be empty".to_string()));
    }
    let record = state.parser.parse(&request.text, &request.filename).await;
    Ok(Json(record))
}

/// GET /api/v1/skills
pub async fn handle_get_skills(State(state): State<AppState>) -> Json<SkillsResponse> {
    Json(SkillsResponse {
        skills: state.skills.terms().to_vec(),
    })
}

/// Collects every file part of the upload. Parts without a filename are ignored; any
/// file that is not PDF or DOCX rejects the whole request.
async fn read_uploads(mut multipart: Multipart) -> Result<Vec<Document>, AppError> {
    let mut documents = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        let Some(filename) = field.file_name().map(str::to_owned) else {
            continue;
        };
        let kind = DocumentKind::from_filename(&filename).ok_or_else(|| {
            AppError::Validation(format!(
                "Unsupported file type for '{filename}': only .pdf and .docx are accepted"
            ))
        })?;
        let content = field.bytes().await?;
        documents.push(Document::new(filename, kind, content));
    }

    if documents.is_empty() {
        return Err(AppError::Validation(
            "Upload at least one .pdf or .docx file".to_string(),
        ));
    }
    Ok(documents)
}
