use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum UploadError {
    #[error("Nome do arquivo e conteúdo são obrigatórios")]
    MissingFields,

    #[error("Conteúdo do arquivo não é base64 válido")]
    InvalidPayload,

    #[error("Erro interno no servidor")]
    StoreFailed { details: Option<String> },
}

impl UploadError {
    pub fn store_failed(is_production: bool, details: String) -> Self {
        UploadError::StoreFailed {
            details: (!is_production).then_some(details),
        }
    }
}

impl IntoResponse for UploadError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            UploadError::MissingFields | UploadError::InvalidPayload => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string() }),
            ),
            UploadError::StoreFailed { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                match details {
                    Some(details) => json!({ "error": self.to_string(), "details": details }),
                    None => json!({ "error": self.to_string() }),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}
