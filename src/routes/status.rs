use axum::extract::State;
use axum::Json;
use chrono::Utc;

use crate::app_state::AppState;
use crate::domain::{StatusEndpoints, StatusResponse};

pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "online".to_owned(),
        environment: state.config.app_env().as_str().to_owned(),
        timestamp: Utc::now().to_rfc3339(),
        endpoints: StatusEndpoints {
            login: "POST /api/login".to_owned(),
            user_data: "GET /api/user-data".to_owned(),
            upload: "POST /api/storage/upload".to_owned(),
        },
    })
}
