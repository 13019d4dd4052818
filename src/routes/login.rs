use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::{
    Email, IdentityError, LoginRequestBody, LoginResponse, LoginUserPayload, Password,
};
use crate::errors::LoginError;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequestBody>,
) -> Result<impl IntoResponse, LoginError> {
    let (email, password) = match (request.email, request.password) {
        (Some(email), Some(password)) => (email, password),
        _ => return Err(LoginError::MissingFields),
    };
    let email = Email::parse(email).or(Err(LoginError::InvalidEmail))?;
    let password = Password::parse(password).or(Err(LoginError::MissingFields))?;

    let signed_in = state
        .identity_service
        .sign_in(email.as_ref(), password.as_ref())
        .await
        .map_err(|e| match e {
            IdentityError::UserNotFound => LoginError::UserNotFound,
            other => LoginError::internal(state.config.is_production(), other.to_string()),
        })?;

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            success: true,
            user: LoginUserPayload {
                uid: signed_in.uid,
                email: signed_in.email,
                email_verified: signed_in.email_verified,
            },
            token: signed_in.id_token,
            expires_in: signed_in.expires_in,
        }),
    ))
}
