//! Video Provider Port
//!
//! Abstract interface for the external video-processing service.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, Video};

/// Service interface for fetching video details
#[async_trait]
pub trait VideoProvider: Send + Sync {
    /// Fetch the details document for a video.
    ///
    /// Failures are `DomainError::ExternalService` carrying the provider's
    /// own message.
    async fn get_video(&self, video_id: &str) -> Result<Video, DomainError>;
}
