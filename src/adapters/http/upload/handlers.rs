//! HTTP handler for the image upload proxy.
//!
//! The multipart stream is read directly; the single `file` field is
//! forwarded to the image host and its URL returned.

use std::sync::Arc;

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::handlers::{UploadImageCommand, UploadImageHandler};
use crate::ports::{ImageHost, ImageHostError};

/// Body returned for every failed upload.
pub const UPLOAD_FAILED: &str = "Upload to Cloudinary failed";

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct UploadAppState {
    upload_handler: Arc<UploadImageHandler>,
}

impl UploadAppState {
    pub fn new(image_host: Arc<dyn ImageHost>) -> Self {
        Self {
            upload_handler: Arc::new(UploadImageHandler::new(image_host)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub url: String,
}

#[derive(Debug, Error)]
enum UploadError {
    #[error("malformed multipart body: {0}")]
    Multipart(String),

    #[error("no `file` field in request")]
    MissingFile,

    #[error(transparent)]
    Host(#[from] ImageHostError),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Image upload failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": UPLOAD_FAILED })),
        )
            .into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/upload - Forward one image to the image host
pub async fn upload_image(
    State(state): State<UploadAppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    match handle_upload(&state, multipart).await {
        Ok(url) => (StatusCode::OK, Json(UploadResponse { success: true, url })).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn handle_upload(
    state: &UploadAppState,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<String, UploadError> {
    let mut multipart = multipart.map_err(|e| UploadError::Multipart(e.body_text()))?;
    let cmd = read_file_field(&mut multipart)
        .await?
        .ok_or(UploadError::MissingFile)?;

    tracing::debug!(
        file_name = ?cmd.file_name,
        bytes = cmd.data.len(),
        "Forwarding upload to image host"
    );
    let uploaded = state.upload_handler.handle(cmd).await?;
    tracing::info!(public_id = %uploaded.public_id, "Image uploaded");
    Ok(uploaded.secure_url)
}

async fn read_file_field(
    multipart: &mut Multipart,
) -> Result<Option<UploadImageCommand>, UploadError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Multipart(e.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| UploadError::Multipart(e.body_text()))?;
        return Ok(Some(UploadImageCommand {
            data: data.to_vec(),
            file_name,
            content_type,
        }));
    }
    Ok(None)
}
