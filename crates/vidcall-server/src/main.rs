use anyhow::{Context, Result};
use axum::{routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod db_url;
mod models;
mod routes;
#[cfg(test)]
mod test_support;

use adapters::{PgCallRepository, SynqClient};
use application::CallService;
use config::Config;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub call_service: Arc<CallService>,
    /// When the server started accepting requests
    pub server_started: DateTime<Utc>,
}

impl AppState {
    pub fn new(call_service: Arc<CallService>) -> Self {
        Self {
            call_service,
            server_started: Utc::now(),
        }
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the full router with shared state
fn app(state: AppState) -> Router {
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::details::router())
        .merge(routes::status::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🎬 Vidcall API initializing...");

    let config = Config::from_env()?;

    if config.synq.api_key.is_empty() {
        tracing::warn!("⚠️  No SYNQ_API_KEY set - provider calls will be unauthenticated");
    }
    let provider = SynqClient::new(&config.synq).context("Failed to build provider client")?;
    tracing::info!("📡 Provider API: {}", config.synq.base_url);

    let params = db_url::parse_database_url(&config.database_url);
    let options = db_url::connect_options(&params).context("Invalid DATABASE_URL")?;
    tracing::info!(
        "🗄️  Connecting to database {} on {}:{}",
        options.get_database().unwrap_or_default(),
        options.get_host(),
        options.get_port()
    );

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!()
        .run(&pool)
        .await
        .context("Failed to create database schema")?;

    tracing::info!("✅ Database schema ready");

    let repo = Arc::new(PgCallRepository::new(pool));
    let call_service = Arc::new(CallService::new(repo, Arc::new(provider)));

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;

    let state = AppState::new(call_service);
    tracing::info!("📚 Swagger UI: /swagger-ui");
    tracing::info!("✅ Running server on port :{}", config.port);

    axum::serve(listener, app(state))
        .await
        .context("Server error")?;

    Ok(())
}
