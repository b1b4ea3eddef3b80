use super::avatar_models::AvatarJob;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[allow(dead_code)]
    #[error("Storage error: {0}")]
    Backend(String),
}

/// Trait for keeping job records.
///
/// The core only needs insert-or-overwrite and lookup, so a persistent
/// backend can replace the in-memory one without touching the service.
/// Implementations must accept concurrent `put`s of distinct ids.
#[async_trait]
pub trait JobStore: Send + Sync {
    /// Insert the job, or overwrite the record with the same id.
    async fn put(&self, job: AvatarJob) -> Result<(), StoreError>;

    /// Look up a job. Returns `None` for unknown ids.
    async fn get(&self, id: &Uuid) -> Result<Option<AvatarJob>, StoreError>;
}
