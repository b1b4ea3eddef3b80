// Avatar processing service - the job lifecycle.
//
// One submission = one job = one moderation call:
//   create (pending, mock URL) -> store -> moderate -> one transition -> store
//
// Moderation failures are absorbed here and recorded on the job. The caller
// only ever sees an error when the store itself fails.

use super::avatar_models::{AvatarJob, JobError, JobStatus};
use super::job_store::{JobStore, StoreError};
use super::moderation::ModerationClient;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid job transition: {0}")]
    Transition(#[from] JobError),
}

/// Submits avatar jobs and answers status lookups.
pub struct AvatarProcessingService<S: JobStore, M: ModerationClient> {
    store: S,
    moderation: M,
}

impl<S: JobStore, M: ModerationClient> AvatarProcessingService<S, M> {
    pub fn new(store: S, moderation: M) -> Self {
        Self { store, moderation }
    }

    /// Submit a new avatar job and process it to a terminal status.
    ///
    /// Blocks on the moderation call, whose duration is bounded by the
    /// client's timeout. The returned job is also the stored record.
    pub async fn submit_job(
        &self,
        user_id: &str,
        input_data: &str,
    ) -> Result<AvatarJob, AvatarError> {
        let mut job = AvatarJob::new(user_id, input_data);
        self.store.put(job.clone()).await?;

        tracing::info!(
            job_id = %job.id,
            user_id = %job.user_id,
            "Avatar job accepted"
        );

        match self.moderation.moderate(&job.input_data, &job.user_id).await {
            Ok(result) if result.approved => job.complete()?,
            Ok(result) => job.reject(result.reason)?,
            Err(e) => job.fail(e.to_string())?,
        }

        match job.status {
            JobStatus::Completed => tracing::info!(
                job_id = %job.id,
                user_id = %job.user_id,
                status = %job.status,
                "Avatar job completed"
            ),
            _ => tracing::warn!(
                job_id = %job.id,
                user_id = %job.user_id,
                status = %job.status,
                error = job.error_message.as_deref().unwrap_or_default(),
                "Avatar job did not complete"
            ),
        }

        self.store.put(job.clone()).await?;
        Ok(job)
    }

    /// Look up a job by id.
    ///
    /// Unknown ids and strings that aren't job ids both come back as `None`.
    pub async fn get_job_status(&self, job_id: &str) -> Result<Option<AvatarJob>, AvatarError> {
        let Ok(id) = Uuid::from_str(job_id.trim()) else {
            tracing::debug!(job_id, "Status lookup for malformed job id");
            return Ok(None);
        };

        Ok(self.store.get(&id).await?)
    }
}

// ============================================================================
// TESTS
// ============================================================================
