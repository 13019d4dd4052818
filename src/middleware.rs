use axum::extract::{Request, State};
use axum::http::{header, HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::app_state::AppState;
use crate::errors::AuthError;
use crate::services::AuthService;
use crate::utils::BEARER_PREFIX;

// Ensures each request has an X-Request-Id and mirrors it on the response.
pub async fn request_id(mut request: Request, next: Next) -> Response {
    let header_name = HeaderName::from_static("x-request-id");

    // Preserve an incoming request-id; otherwise generate one.
    let id_value = request
        .headers()
        .get(&header_name)
        .cloned()
        .unwrap_or_else(|| {
            HeaderValue::from_str(&Uuid::new_v4().to_string())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"))
        });

    request.extensions_mut().insert(id_value.clone());

    let mut response = next.run(request).await;
    response.headers_mut().insert(header_name, id_value);
    response
}

/// Authentication gate for protected routes.
///
/// A missing or non-Bearer header is rejected before any cache or provider
/// work happens. Accepted requests carry the resolved claims as an
/// extension for the handler.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let raw_token = match request.headers().get(header::AUTHORIZATION) {
        None => return Err(AuthError::MissingCredential),
        Some(value) => value
            .to_str()
            .ok()
            .and_then(|v| v.strip_prefix(BEARER_PREFIX))
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MalformedCredential)?,
    };

    let claims = AuthService::authenticate(&state, raw_token).await?;
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let request_id = request
        .extensions()
        .get::<HeaderValue>()
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_owned();
    let started = std::time::Instant::now();

    let response = next.run(request).await;

    log::info!(
        "{} {} -> {} ({}ms) request_id={}",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis(),
        request_id
    );
    response
}
