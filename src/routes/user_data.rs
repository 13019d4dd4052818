use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde_json::json;

use crate::domain::UserClaims;

// Claims were attached by the authentication gate; by the time this handler
// runs the credential has already been accepted.
pub async fn user_data(Extension(claims): Extension<UserClaims>) -> impl IntoResponse {
    Json(json!({ "success": true, "user": claims }))
}
