//! Status Routes

use axum::{extract::State, routing::get, Json, Router};

use crate::models::StatusResponse;
use crate::AppState;

/// Server start time and every recorded call.
///
/// Always answers 200; a storage failure is reported in `error`.
#[utoipa::path(
    get,
    path = "/v1/status",
    responses(
        (status = 200, description = "Service status", body = StatusResponse)
    ),
    tag = "Status"
)]
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let response = match state.call_service.list_calls(None).await {
        Ok(calls) => StatusResponse {
            server_started: state.server_started,
            calls: Some(calls.into_iter().map(Into::into).collect()),
            error: None,
        },
        Err(e) => {
            tracing::warn!("Failed to list api calls: {}", e);
            StatusResponse {
                server_started: state.server_started,
                calls: None,
                error: Some(e.to_string()),
            }
        }
    };

    Json(response)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/status", get(get_status))
}
