//! Call record and status DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use vidcall::{ApiCall, Video};

/// Stored call record as reported by the status endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiCallResponse {
    pub id: i64,
    #[serde(rename = "type")]
    pub call_type: String,
    pub called: DateTime<Utc>,
    pub video_id: String,
    /// Provider latency in nanoseconds
    pub taken: u64,
    pub error: String,
    #[schema(value_type = Object)]
    pub video: Video,
}

impl From<ApiCall> for ApiCallResponse {
    fn from(call: ApiCall) -> Self {
        Self {
            id: call.id,
            call_type: call.call_type,
            called: call.called,
            video_id: call.video_id,
            taken: u64::try_from(call.taken.as_nanos()).unwrap_or(u64::MAX),
            error: call.error,
            video: call.video,
        }
    }
}

/// Service status
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub server_started: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calls: Option<Vec<ApiCallResponse>>,
    /// Set only when the calls could not be read
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
