//! Axum route handlers for résumé ingestion.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::resumes::document::{extract_pdf_text, DocumentError};
use crate::resumes::{ingest_resume, ResumeIngestResponse};
use crate::state::AppState;

const DEFAULT_TEXT_FILE_NAME: &str = "resume.txt";

#[derive(Debug, Deserialize)]
pub struct ResumeTextRequest {
    pub user_id: Option<Uuid>,
    pub file_name: Option<String>,
    #[serde(default)]
    pub text: String,
}

/// POST /api/v1/resumes
///
/// Multipart upload: `user_id` field plus a PDF in the `file` field.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ResumeIngestResponse>), AppError> {
    let mut user_id: Option<Uuid> = None;
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "user_id" => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("unreadable user_id: {e}")))?;
                user_id = Some(parse_user_id(&raw)?);
            }
            "file" => {
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("unreadable file: {e}")))?;
                upload = Some((file_name, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let user_id = user_id.ok_or_else(|| AppError::Validation("User ID required".to_string()))?;
    let (file_name, bytes) =
        upload.ok_or_else(|| AppError::Validation("No file provided".to_string()))?;
    if !file_name.to_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation("Only PDF files allowed".to_string()));
    }

    let text = tokio::task::spawn_blocking(move || extract_pdf_text(&bytes))
        .await
        .map_err(|e| DocumentError::Extraction(format!("PDF parser aborted: {e}")))??;

    let response = ingest_resume(
        &state.db,
        &state.orchestrator,
        user_id,
        &file_name,
        &text,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/resumes/text
///
/// Same as the upload route for text that was already extracted elsewhere.
pub async fn handle_submit_resume_text(
    State(state): State<AppState>,
    Json(request): Json<ResumeTextRequest>,
) -> Result<(StatusCode, Json<ResumeIngestResponse>), AppError> {
    let user_id = request
        .user_id
        .ok_or_else(|| AppError::Validation("User ID required".to_string()))?;
    let text = request.text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    let file_name = request
        .file_name
        .as_deref()
        .unwrap_or(DEFAULT_TEXT_FILE_NAME);

    let response = ingest_resume(&state.db, &state.orchestrator, user_id, file_name, text).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

fn parse_user_id(raw: &str) -> Result<Uuid, AppError> {
    raw.trim()
        .parse::<Uuid>()
        .map_err(|_| AppError::Validation("user_id must be a UUID".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_id_trims() {
        let id = Uuid::new_v4();
        assert_eq!(parse_user_id(&format!("  {id}\n")).unwrap(), id);
    }

    #[test]
    fn test_parse_user_id_rejects_garbage() {
        assert!(matches!(
            parse_user_id("not-a-uuid"),
            Err(AppError::Validation(_))
        ));
    }
}
