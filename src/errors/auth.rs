use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Rejections produced by the authentication gate. Every variant is a 401;
/// the payload shape tells an expired credential (refresh hint under
/// `solution`) apart from a rejected one (`details`).
#[derive(Error, Debug, PartialEq)]
pub enum AuthError {
    #[error("Token não fornecido")]
    MissingCredential,

    #[error("Formato de credencial inválido")]
    MalformedCredential,

    #[error("Token expirado")]
    TokenExpired,

    #[error("Token inválido")]
    TokenInvalid,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let body = match self {
            AuthError::TokenExpired => json!({
                "error": self.to_string(),
                "solution": "Renove suas credenciais e tente novamente",
            }),
            AuthError::MissingCredential | AuthError::MalformedCredential => json!({
                "error": self.to_string(),
                "details": "Envie o cabeçalho Authorization: Bearer <token>",
            }),
            AuthError::TokenInvalid => json!({
                "error": self.to_string(),
                "details": "Credencial rejeitada pelo provedor de identidade",
            }),
        };

        (StatusCode::UNAUTHORIZED, Json(body)).into_response()
    }
}
