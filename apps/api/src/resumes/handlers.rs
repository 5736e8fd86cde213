//! Axum route handlers for résumé upload and listing.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extractor::{extract_pdf_file, ExtractionError};
use crate::models::resume::{ResumeRecord, StoredResume};
use crate::parser::parse_resume;
use crate::resumes::uploads::save_upload;
use crate::state::AppState;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub id: i64,
    pub extracted_data: ResumeRecord,
}

/// POST /upload
///
/// Saves the uploaded PDF, extracts its text, parses it and stores the record.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart = multipart.map_err(|e| {
        warn!("Rejected upload body: {e}");
        AppError::Validation("No file provided".to_string())
    })?;
    let (filename, bytes) = read_file_field(&mut multipart).await?;

    let path = save_upload(&state.upload_dir, &bytes).await?;
    info!(
        "Saved upload '{filename}' ({} bytes) as {}",
        bytes.len(),
        path.display()
    );

    let text = match tokio::task::spawn_blocking(move || extract_pdf_file(&path)).await {
        Ok(result) => result?,
        Err(e) => return Err(ExtractionError::Pdf(format!("PDF parser panicked: {e}")).into()),
    };
    info!("Extracted {} characters from '{filename}'", text.len());

    let record = parse_resume(&text);
    let id = state.store.store(&record).await?;

    Ok(Json(UploadResponse {
        message: "File uploaded and processed successfully".to_string(),
        id,
        extracted_data: record,
    }))
}

/// GET /resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<Vec<StoredResume>>, AppError> {
    Ok(Json(state.store.list_all().await?))
}

/// Finds the `file` part. Parts named `file` that carry no filename are not files.
async fn read_file_field(multipart: &mut Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        if filename.is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }
        let bytes = field.bytes().await?;
        return Ok((filename, bytes));
    }
    Err(AppError::Validation("No file provided".to_string()))
}
