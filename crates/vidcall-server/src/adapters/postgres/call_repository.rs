//! PostgreSQL implementation of CallRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{types::Json, PgPool};
use std::time::Duration;

use vidcall::{ApiCall, CallRepository, DomainError, Video};

/// PostgreSQL implementation of CallRepository
pub struct PgCallRepository {
    pool: PgPool,
}

impl PgCallRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ApiCallRow {
    id: i64,
    #[sqlx(rename = "type")]
    call_type: String,
    ctime: DateTime<Utc>,
    called: DateTime<Utc>,
    video_id: String,
    taken: i64,
    error: String,
    result: Json<Video>,
}

impl From<ApiCallRow> for ApiCall {
    fn from(row: ApiCallRow) -> Self {
        Self {
            id: row.id,
            call_type: row.call_type,
            created_at: Some(row.ctime),
            called: row.called,
            video_id: row.video_id,
            taken: Duration::from_nanos(u64::try_from(row.taken).unwrap_or(0)),
            error: row.error,
            video: row.result.0,
        }
    }
}

/// `taken` is stored as BIGINT nanoseconds
fn taken_nanos(call: &ApiCall) -> i64 {
    i64::try_from(call.taken.as_nanos()).unwrap_or(i64::MAX)
}

fn storage_error(e: sqlx::Error) -> DomainError {
    DomainError::Repository(e.to_string())
}

#[async_trait]
impl CallRepository for PgCallRepository {
    async fn create(&self, call: &ApiCall) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO api_calls (video_id, called, taken, type, error, result)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&call.video_id)
        .bind(call.called)
        .bind(taken_nanos(call))
        .bind(&call.call_type)
        .bind(&call.error)
        .bind(Json(&call.video))
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)
    }

    async fn update(&self, call: &ApiCall) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE api_calls
            SET video_id = $1, called = $2, taken = $3, type = $4, error = $5, result = $6
            WHERE id = $7
            "#,
        )
        .bind(&call.video_id)
        .bind(call.called)
        .bind(taken_nanos(call))
        .bind(&call.call_type)
        .bind(&call.error)
        .bind(Json(&call.video))
        .bind(call.id)
        .execute(&self.pool)
        .await
        .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            tracing::warn!("No api call row with id {} to update", call.id);
        }

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<ApiCall>, DomainError> {
        let rows = sqlx::query_as::<_, ApiCallRow>("SELECT * FROM api_calls ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_video_id(&self, video_id: &str) -> Result<Vec<ApiCall>, DomainError> {
        let rows = sqlx::query_as::<_, ApiCallRow>(
            "SELECT * FROM api_calls WHERE video_id = $1 ORDER BY id",
        )
        .bind(video_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
