//! Video - Provider video document

use serde::{Deserialize, Serialize};

/// Video details as returned by the provider.
///
/// Only the identifying fields are typed; everything else the provider
/// sends is kept in `extra` and written back out unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Video {
    #[serde(rename = "video_id", default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Video {
    /// True for the default document stored when no call succeeded
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
            && self.state.is_none()
            && self.created_at.is_none()
            && self.updated_at.is_none()
            && self.extra.is_empty()
    }
}
