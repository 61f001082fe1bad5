//! Call Repository Port
//!
//! Abstract interface for ApiCall persistence operations.

use async_trait::async_trait;

use crate::domain::{errors::DomainError, ApiCall};

/// Repository interface for ApiCall entities.
///
/// Callers pick `create` or `update` depending on whether the record
/// already carries a storage id. Storage failures come back as
/// `DomainError::Repository` with the driver's message unchanged.
#[async_trait]
pub trait CallRepository: Send + Sync {
    /// Insert a new row and return the id storage assigned
    async fn create(&self, call: &ApiCall) -> Result<i64, DomainError>;

    /// Overwrite every mutable column of the row with `call.id`
    async fn update(&self, call: &ApiCall) -> Result<(), DomainError>;

    /// All calls in storage order
    async fn find_all(&self) -> Result<Vec<ApiCall>, DomainError>;

    /// Calls recorded for one video id, in storage order
    async fn find_by_video_id(&self, video_id: &str) -> Result<Vec<ApiCall>, DomainError>;
}
