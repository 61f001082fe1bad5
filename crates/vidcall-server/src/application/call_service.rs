//! Call Application Service (Use Case)
//!
//! Owns the ApiCall lifecycle: invoke the provider, then store the outcome.

use std::sync::Arc;
use std::time::Instant;

use vidcall::{ApiCall, CallRepository, DomainError, VideoProvider};

/// Application service for ApiCall operations
pub struct CallService {
    repo: Arc<dyn CallRepository>,
    provider: Arc<dyn VideoProvider>,
}

impl CallService {
    pub fn new(repo: Arc<dyn CallRepository>, provider: Arc<dyn VideoProvider>) -> Self {
        Self { repo, provider }
    }

    /// Insert the call, or overwrite it in place when it already has an id.
    ///
    /// A call without a video id is rejected before touching storage.
    pub async fn save(&self, call: &mut ApiCall) -> Result<(), DomainError> {
        if call.video_id.is_empty() {
            return Err(DomainError::missing_video_id());
        }

        if call.exists() {
            self.repo.update(call).await
        } else {
            call.id = self.repo.create(call).await?;
            tracing::debug!("Recorded api call {} for video {}", call.id, call.video_id);
            Ok(())
        }
    }

    /// Fetch video details from the provider and record the attempt.
    ///
    /// The record is saved after the outcome is applied, whether or not the
    /// provider call succeeded. A failed save is logged and does not change
    /// the result returned here.
    pub async fn call(&self, call: &mut ApiCall) -> Result<(), DomainError> {
        let started = Instant::now();
        let result = self.provider.get_video(&call.video_id).await;
        call.taken = started.elapsed();

        let outcome = match result {
            Ok(video) => {
                call.succeed(video);
                Ok(())
            }
            Err(e) => {
                call.fail(e.to_string());
                Err(e)
            }
        };

        if let Err(e) = self.save(call).await {
            tracing::warn!(
                video_id = %call.video_id,
                error = %e,
                "Failed to record api call"
            );
        }

        outcome
    }

    /// List recorded calls, optionally only those for one video id
    pub async fn list_calls(&self, video_id: Option<&str>) -> Result<Vec<ApiCall>, DomainError> {
        match video_id {
            Some(id) => self.repo.find_by_video_id(id).await,
            None => self.repo.find_all().await,
        }
    }
}
