//! SYNQ Video API Client
//!
//! Fetches video details from the provider using reqwest.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

use vidcall::{DomainError, Video, VideoProvider, DETAILS_CALL_TYPE};

use crate::config::SynqConfig;

/// HTTP implementation of VideoProvider
pub struct SynqClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Error document the provider returns on failure
#[derive(Deserialize)]
struct ProviderError {
    message: Option<String>,
}

impl SynqClient {
    pub fn new(config: &SynqConfig) -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("vidcall/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn details_url(&self) -> String {
        format!("{}{}", self.base_url, DETAILS_CALL_TYPE)
    }
}

/// Pick the provider's own message out of an error response
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ProviderError>(body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("{}: {}", status, body.trim()))
}

#[async_trait]
impl VideoProvider for SynqClient {
    async fn get_video(&self, video_id: &str) -> Result<Video, DomainError> {
        tracing::debug!(video_id = %video_id, "Fetching video details");

        let response = self
            .client
            .post(self.details_url())
            .form(&[("api_key", self.api_key.as_str()), ("video_id", video_id)])
            .send()
            .await
            .map_err(|e| DomainError::ExternalService(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::ExternalService(e.to_string()))?;

        if !status.is_success() {
            return Err(DomainError::ExternalService(error_message(status, &body)));
        }

        serde_json::from_str(&body).map_err(|e| {
            DomainError::ExternalService(format!("Invalid video details response: {e}"))
        })
    }
}
