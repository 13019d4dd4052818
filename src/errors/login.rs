use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LoginError {
    #[error("Email e senha são obrigatórios")]
    MissingFields,

    #[error("Email inválido")]
    InvalidEmail,

    #[error("Usuário não encontrado")]
    UserNotFound,

    #[error("Erro interno no servidor")]
    InternalServerError { details: Option<String> },
}

impl LoginError {
    /// 500 with provider detail outside production, opaque otherwise.
    pub fn internal(is_production: bool, details: String) -> Self {
        LoginError::InternalServerError {
            details: (!is_production).then_some(details),
        }
    }
}

impl IntoResponse for LoginError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            LoginError::MissingFields | LoginError::InvalidEmail => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string() }),
            ),
            LoginError::UserNotFound => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": self.to_string(),
                    "solution": "Verifique o email informado ou crie uma conta",
                }),
            ),
            LoginError::InternalServerError { details } => (
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
