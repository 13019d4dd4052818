use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;

use crate::app_state::AppState;
use crate::domain::{UploadRequestBody, UploadResponse};
use crate::errors::UploadError;

pub async fn upload(
    State(state): State<AppState>,
    Json(request): Json<UploadRequestBody>,
) -> Result<impl IntoResponse, UploadError> {
    let file_name = request
        .file_name
        .filter(|name| !name.is_empty())
        .ok_or(UploadError::MissingFields)?;
    let data = request
        .data
        .filter(|data| !data.is_empty())
        .ok_or(UploadError::MissingFields)?;

    let bytes = B64
        .decode(data.as_bytes())
        .map_err(|_| UploadError::InvalidPayload)?;
    let content_type = request
        .content_type
        .unwrap_or_else(|| "application/octet-stream".to_owned());

    let url = state
        .object_store
        .save(&file_name, &content_type, bytes)
        .await
        .map_err(|e| UploadError::store_failed(state.config.is_production(), e.to_string()))?;

    Ok(Json(UploadResponse { success: true, url }))
}
