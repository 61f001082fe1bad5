//! Details request/response DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use vidcall::{ApiCall, DomainError, Video};

/// Message returned when a details request names no video
pub const MISSING_VIDEO_ID_FIELD: &str = "missing 'video_id'";

/// Prefix for provider failures reported by the details endpoint
pub const API_CALL_FAILED: &str = "failed to make api call : ";

/// Video details request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct DetailsRequest {
    #[serde(default)]
    pub video_id: Option<String>,
    /// When the call was made; defaults to now
    #[serde(default)]
    pub called: Option<DateTime<Utc>>,
}

impl DetailsRequest {
    /// Validate the request and build the call record it describes
    pub fn into_call(self) -> Result<ApiCall, DomainError> {
        // Blank ids are rejected but the id is forwarded as sent
        let video_id = self
            .video_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| DomainError::Validation(MISSING_VIDEO_ID_FIELD.to_string()))?;

        Ok(ApiCall::new(video_id, self.called.unwrap_or_else(Utc::now)))
    }
}

/// Successful details response
#[derive(Debug, Serialize, ToSchema)]
pub struct DetailsResponse {
    /// Provider video document
    #[schema(value_type = Object)]
    pub message: Video,
    /// Video id as the provider spells it
    pub id: String,
}

/// Error body: `{"message": "..."}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
