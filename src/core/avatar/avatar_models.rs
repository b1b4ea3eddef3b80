// Avatar domain models - the job record and the moderation verdict.
//
// These are pure domain types with no HTTP or storage dependencies.
// The only way to move a job out of `Pending` is through the transition
// methods below, and each of them refuses to touch a terminal job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use thiserror::Error;
use uuid::Uuid;

const AVATAR_BASE_URL: &str = "https://avatars.example.com";
const DEFAULT_REJECTION_REASON: &str = "Content rejected by moderation";
const DEFAULT_FAILURE_MESSAGE: &str = "Moderation call failed";

/// Where a job is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Created, waiting on the moderation verdict
    Pending,
    /// Moderation approved the content
    Completed,
    /// The moderation call could not be completed
    Failed,
    /// Moderation explicitly rejected the content
    Rejected,
}

impl JobStatus {
    /// Terminal statuses never change again.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, JobStatus::Pending)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "pending"),
            JobStatus::Completed => write!(f, "completed"),
            JobStatus::Failed => write!(f, "failed"),
            JobStatus::Rejected => write!(f, "rejected"),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum JobError {
    #[error("Job {id} is already {status}")]
    AlreadyTerminal { id: Uuid, status: JobStatus },
}

/// One avatar-generation request and its lifecycle record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvatarJob {
    pub id: Uuid,
    pub user_id: String,
    pub status: JobStatus,
    /// The user's avatar prompt
    pub input_data: String,
    pub output_url: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Set iff the job ended `Rejected` or `Failed`
    pub error_message: Option<String>,
}

impl AvatarJob {
    /// Create a pending job with a fresh id and its mock avatar URL.
    pub fn new(user_id: impl Into<String>, input_data: impl Into<String>) -> Self {
        let id = Uuid::new_v4();
        let input_data = input_data.into();
        let output_url = Some(mock_avatar_url(&input_data, id));

        Self {
            id,
            user_id: user_id.into(),
            status: JobStatus::Pending,
            input_data,
            output_url,
            created_at: Utc::now(),
            error_message: None,
        }
    }

    /// pending -> completed
    pub fn complete(&mut self) -> Result<(), JobError> {
        self.transition(JobStatus::Completed, None)
    }

    /// pending -> rejected, keeping the moderator's reason.
    pub fn reject(&mut self, reason: Option<String>) -> Result<(), JobError> {
        let reason = reason
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTION_REASON.to_string());
        self.transition(JobStatus::Rejected, Some(reason))
    }

    /// pending -> failed, keeping a description of what went wrong.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), JobError> {
        let mut message = message.into();
        if message.trim().is_empty() {
            message = DEFAULT_FAILURE_MESSAGE.to_string();
        }
        self.transition(JobStatus::Failed, Some(message))
    }

    fn transition(
        &mut self,
        status: JobStatus,
        error_message: Option<String>,
    ) -> Result<(), JobError> {
        if self.status.is_terminal() {
            return Err(JobError::AlreadyTerminal {
                id: self.id,
                status: self.status,
            });
        }

        self.status = status;
        self.error_message = error_message;
        Ok(())
    }
}

/// The moderator's verdict on a piece of content.
/// Only its effect on a job survives; it is never stored on its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationResult {
    pub approved: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

#[allow(dead_code)]
impl ModerationResult {
    pub fn approved() -> Self {
        Self {
            approved: true,
            reason: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            approved: false,
            reason: Some(reason.into()),
        }
    }
}

/// Build the mock avatar URL for a prompt.
///
/// The prompt hash only makes the URL look related to its prompt; uniqueness
/// comes from the job id, so identical prompts still get distinct URLs.
pub fn mock_avatar_url(prompt: &str, job_id: Uuid) -> String {
    let normalized = prompt.trim().to_lowercase();
    let mut hasher = DefaultHasher::new();
    normalized.hash(&mut hasher);

    format!(
        "{}/{:016x}_{}.png",
        AVATAR_BASE_URL,
        hasher.finish(),
        job_id.simple()
    )
}
