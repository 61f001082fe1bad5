//! Details Routes - Video details lookup

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use crate::models::{DetailsRequest, DetailsResponse, MessageResponse, API_CALL_FAILED};
use crate::AppState;

fn bad_request(message: String) -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::BAD_REQUEST, Json(MessageResponse { message }))
}

/// Fetch video details and record the call
#[utoipa::path(
    post,
    path = "/v1/details",
    request_body = DetailsRequest,
    responses(
        (status = 200, description = "Video details", body = DetailsResponse),
        (status = 400, description = "Missing video id or provider failure", body = MessageResponse)
    ),
    tag = "Details"
)]
pub async fn get_details(
    State(state): State<AppState>,
    payload: Result<Json<DetailsRequest>, JsonRejection>,
) -> Result<Json<DetailsResponse>, (StatusCode, Json<MessageResponse>)> {
    // An unreadable body is treated like one without a video id
    let request = payload.map(|Json(r)| r).unwrap_or_else(|rejection| {
        tracing::debug!("Rejected details body: {}", rejection);
        DetailsRequest::default()
    });

    let mut call = request.into_call().map_err(|e| bad_request(e.to_string()))?;

    state
        .call_service
        .call(&mut call)
        .await
        .map_err(|e| bad_request(format!("{}{}", API_CALL_FAILED, e)))?;

    tracing::info!("Fetched details for video {} in {:?}", call.video_id, call.taken);

    Ok(Json(DetailsResponse {
        message: call.video,
        id: call.video_id,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/v1/details", post(get_details))
}
