use super::avatar_models::ModerationResult;
use async_trait::async_trait;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

/// Everything that can stop a moderation call from producing a verdict.
/// The Display text ends up in a failed job's `error_message`.
#[derive(Debug, Error)]
pub enum ModerationError {
    #[error("Moderation API timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Moderation API unreachable: {0}")]
    Network(String),

    #[error("Moderation API returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Malformed moderation response: {0}")]
    MalformedResponse(String),
}

// ============================================================================
// CLIENT TRAIT (PORT)
// ============================================================================

/// Trait for the external content-moderation service.
#[async_trait]
pub trait ModerationClient: Send + Sync {
    /// Ask the moderator whether `content` submitted by `user_id` is acceptable.
    async fn moderate(
        &self,
        content: &str,
        user_id: &str,
    ) -> Result<ModerationResult, ModerationError>;
}

// Lets the service hold whichever client main picks at runtime.
#[async_trait]
impl ModerationClient for Box<dyn ModerationClient> {
    async fn moderate(
        &self,
        content: &str,
        user_id: &str,
    ) -> Result<ModerationResult, ModerationError> {
        (**self).moderate(content, user_id).await
    }
}
