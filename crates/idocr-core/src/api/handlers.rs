//! API request handlers.

use axum::{
    Json,
    extract::{Multipart, State},
};

use crate::identity::extract;
use crate::ingest::Upload;
use crate::models::record::ExtractedRecord;

use super::{
    error::ApiError,
    types::{ApiState, HealthResponse},
};

/// Extract endpoint handler.
///
/// POST /extract
///
/// Accepts multipart form data with:
/// - `file` (or `files`): the document to extract, PDF, image or plain text
/// - `password` (optional): password for an encrypted PDF
///
/// Returns the extracted record with every field present; fields that could
/// not be found are empty strings.
pub async fn extract_handler(
    State(state): State<ApiState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractedRecord>, ApiError> {
    let mut upload: Option<Upload> = None;
    let mut password: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::validation(e.to_string()))?
    {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" | "files" => {
                let file_name = field.file_name().map(|s| s.to_string());
                let content_type = field.content_type().map(|s| s.to_string());
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::validation(e.to_string()))?;

                let mut file = Upload::new(data.to_vec());
                file.file_name = file_name;
                file.content_type = content_type;
                upload = Some(file);
            }
            "password" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::validation(e.to_string()))?;
                password = Some(value);
            }
            _ => {}
        }
    }

    let upload = upload
        .ok_or_else(|| ApiError::validation("No file provided for extraction"))?
        .with_password(password);

    tracing::info!(
        "Received {} ({} bytes)",
        upload.file_name.as_deref().unwrap_or("unnamed upload"),
        upload.data.len()
    );

    let ingestor = state.ingestor.clone();
    let text = tokio::task::spawn_blocking(move || ingestor.ingest(&upload))
        .await
        .map_err(|e| ApiError::internal(format!("extraction task failed: {}", e)))??;

    Ok(Json(extract(&text)))
}

/// Health check endpoint handler.
///
/// GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
