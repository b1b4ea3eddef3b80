// In-memory implementation of JobStore.
//
// Records live for the lifetime of the process and are never evicted.
// A persistent store only needs to implement the same two methods.

use crate::core::avatar::{AvatarJob, JobStore, StoreError};
use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

/// DashMap-backed job store.
///
/// Each job id is an independent key, so concurrent submissions never
/// contend on shared sub-state and no outer Mutex is needed.
pub struct InMemoryJobStore {
    jobs: DashMap<Uuid, AvatarJob>,
}

impl InMemoryJobStore {
    pub fn new() -> Self {
        Self {
            jobs: DashMap::new(),
        }
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

#[async_trait]
impl JobStore for InMemoryJobStore {
    async fn put(&self, job: AvatarJob) -> Result<(), StoreError> {
        self.jobs.insert(job.id, job);
        Ok(())
    }

    async fn get(&self, id: &Uuid) -> Result<Option<AvatarJob>, StoreError> {
        // Clone out of the shard guard so no lock outlives this call
        Ok(self.jobs.get(id).map(|entry| entry.value().clone()))
    }
}

impl Default for InMemoryJobStore {
    fn default() -> Self {
        Self::new()
    }
}
