//! ApiCall - Video details invocation record
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::Video;

/// Operation name recorded for a successful details call
pub const DETAILS_CALL_TYPE: &str = "/v1/video/details";

/// ApiCall - Record of one attempt to fetch video details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiCall {
    /// Surrogate key, `0` until the record is first stored
    pub id: i64,
    #[serde(rename = "type")]
    pub call_type: String,
    /// Set by storage on insert
    #[serde(skip)]
    pub created_at: Option<DateTime<Utc>>,
    pub called: DateTime<Utc>,
    pub video_id: String,
    #[serde(with = "duration_nanos")]
    pub taken: Duration,
    pub error: String,
    pub video: Video,
}

impl ApiCall {
    /// Create a new, not yet persisted call record
    pub fn new(video_id: impl Into<String>, called: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            call_type: String::new(),
            created_at: None,
            called,
            video_id: video_id.into(),
            taken: Duration::ZERO,
            error: String::new(),
            video: Video::default(),
        }
    }

    /// True once storage has assigned an id
    pub fn exists(&self) -> bool {
        self.id > 0
    }

    /// Record the provider's answer. The provider owns the canonical form
    /// of the video id.
    pub fn succeed(&mut self, video: Video) {
        self.call_type = DETAILS_CALL_TYPE.to_string();
        if !video.id.is_empty() {
            self.video_id = video.id.clone();
        }
        self.video = video;
        self.error.clear();
    }

    /// Record a provider failure; `call_type` and `video` are left alone
    pub fn fail(&mut self, error: impl Into<String>) {
        self.error = error.into();
    }
}

/// Serializes a `Duration` as integer nanoseconds
mod duration_nanos {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_nanos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exists() {
        let mut call = ApiCall::new("123", Utc::now());
        assert!(!call.exists());
        call.id = -1;
        assert!(!call.exists());
        call.id = 7;
        assert!(call.exists());
    }

    #[test]
    fn test_succeed_takes_provider_video_id() {
        let mut call = ApiCall::new("45D4063D-0045-4C9F-B21E-5186A09C3115", Utc::now());
        call.error = "earlier failure".to_string();
        let video = Video {
            id: "45d4063d00454c9fb21e5186a09c3115".to_string(),
            ..Default::default()
        };

        call.succeed(video.clone());

        assert_eq!(call.call_type, DETAILS_CALL_TYPE);
        assert_eq!(call.video_id, "45d4063d00454c9fb21e5186a09c3115");
        assert_eq!(call.video, video);
        assert!(call.error.is_empty());
    }

    #[test]
    fn test_fail_leaves_type_and_video() {
        let mut call = ApiCall::new("abc", Utc::now());
        call.fail("Invalid uuid.");
        assert_eq!(call.error, "Invalid uuid.");
        assert!(call.call_type.is_empty());
        assert!(call.video.is_empty());
    }

    #[test]
    fn test_json_shape() {
        let mut call = ApiCall::new("abc", Utc::now());
        call.id = 3;
        call.taken = Duration::from_millis(12);
        call.created_at = Some(Utc::now());

        let value = serde_json::to_value(&call).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["type"], "");
        assert_eq!(value["video_id"], "abc");
        assert_eq!(value["taken"], 12_000_000u64);
        assert_eq!(value["error"], "");
        assert!(value.get("called").is_some());
        assert!(value.get("video").is_some());
        assert!(value.get("created_at").is_none());
        assert!(value.get("ctime").is_none());
    }
}
