//! Shared test doubles: an in-memory repository, a stub provider and a
//! local stand-in for the provider's HTTP API.

use async_trait::async_trait;
use axum::{http::StatusCode, routing::post, Form, Json, Router};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use vidcall::{ApiCall, CallRepository, DomainError, Video, VideoProvider};

use crate::application::CallService;

pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_VIDEO_ID: &str = "45d4063d00454c9fb21e5186a09c3115";
pub const INVALID_UUID_MESSAGE: &str = "Invalid uuid. Example: '1c0e3ea4529011e6991554a050defa20'.";

/// CallRepository backed by a Vec; can be "closed" to simulate a dead pool
#[derive(Default)]
pub struct InMemoryCallRepository {
    rows: Mutex<Vec<ApiCall>>,
    closed: AtomicBool,
}

impl InMemoryCallRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn rows(&self) -> Vec<ApiCall> {
        self.rows.lock().unwrap().clone()
    }

    fn check_open(&self) -> Result<(), DomainError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(DomainError::Repository(sqlx::Error::PoolClosed.to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl CallRepository for InMemoryCallRepository {
    async fn create(&self, call: &ApiCall) -> Result<i64, DomainError> {
        self.check_open()?;
        let mut rows = self.rows.lock().unwrap();
        let id = rows.len() as i64 + 1;
        rows.push(ApiCall {
            id,
            created_at: Some(chrono::Utc::now()),
            ..call.clone()
        });
        Ok(id)
    }

    async fn update(&self, call: &ApiCall) -> Result<(), DomainError> {
        self.check_open()?;
        let mut rows = self.rows.lock().unwrap();
        if let Some(row) = rows.iter_mut().find(|r| r.id == call.id) {
            *row = ApiCall {
                created_at: row.created_at,
                ..call.clone()
            };
        }
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<ApiCall>, DomainError> {
        self.check_open()?;
        Ok(self.rows())
    }

    async fn find_by_video_id(&self, video_id: &str) -> Result<Vec<ApiCall>, DomainError> {
        self.check_open()?;
        Ok(self
            .rows()
            .into_iter()
            .filter(|r| r.video_id == video_id)
            .collect())
    }
}

/// VideoProvider that answers every request with the same result
pub struct StubProvider {
    result: Result<Video, DomainError>,
}

impl StubProvider {
    pub fn video(id: &str) -> Self {
        Self {
            result: Ok(Video {
                id: id.to_string(),
                state: Some("uploaded".to_string()),
                ..Default::default()
            }),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            result: Err(DomainError::ExternalService(message.to_string())),
        }
    }
}

#[async_trait]
impl VideoProvider for StubProvider {
    async fn get_video(&self, _video_id: &str) -> Result<Video, DomainError> {
        self.result.clone()
    }
}

pub fn service_with(
    provider: StubProvider,
) -> (Arc<CallService>, Arc<InMemoryCallRepository>) {
    let repo = Arc::new(InMemoryCallRepository::new());
    let service = Arc::new(CallService::new(repo.clone(), Arc::new(provider)));
    (service, repo)
}

/// Canonical provider form: 32 lowercase hex digits, no dashes
fn canonical_uuid(raw: &str) -> Option<String> {
    let id: String = raw.chars().filter(|c| *c != '-').collect::<String>().to_lowercase();
    (id.len() == 32 && id.chars().all(|c| c.is_ascii_hexdigit())).then_some(id)
}

async fn fake_details(
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<serde_json::Value>) {
    if form.get("api_key").map(String::as_str) != Some(TEST_API_KEY) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "name": "invalid_api_key", "message": "Invalid API key" })),
        );
    }

    match form.get("video_id").and_then(|id| canonical_uuid(id)) {
        Some(id) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "video_id": id,
                "state": "uploaded",
                "player": { "views": 0 },
                "metadata": {}
            })),
        ),
        None => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "name": "invalid_uuid", "message": INVALID_UUID_MESSAGE })),
        ),
    }
}

/// Serve a stand-in provider API on an ephemeral port and return its base URL
pub async fn spawn_fake_synq() -> String {
    let app = Router::new().route("/v1/video/details", post(fake_details));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}
