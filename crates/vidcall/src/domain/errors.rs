//! Domain Errors
//!
//! Error types for domain operations. Every variant displays its message
//! unchanged so storage and provider text reaches callers verbatim.

use thiserror::Error;

/// Message returned when a call record without a video id is saved
pub const MISSING_VIDEO_ID: &str = "missing video id, can not save job";

/// Domain layer errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Repository(String),

    #[error("{0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn missing_video_id() -> Self {
        Self::Validation(MISSING_VIDEO_ID.to_string())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
