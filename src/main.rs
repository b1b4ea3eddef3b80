// This is the entry point of the avatar processing service.
//
// **Architecture Overview:**
// - `core/` = Business logic (job lifecycle, store and moderation ports)
// - `infra/` = Implementations of core traits (in-memory store, HTTP moderation client)
//
// This file's job is to:
// 1. Load configuration
// 2. Initialize services (dependency injection)
// 3. Submit one job and look it up again

// These attrs point each module declaration at a more descriptive root file
// so we don't end up with several mod.rs files that all look the same.
#[path = "core/core_layer.rs"]
mod core;
#[path = "infra/infra_layer.rs"]
mod infra;

mod config;

use crate::config::ServiceConfig;
use crate::core::avatar::{AvatarProcessingService, ModerationClient};
use crate::infra::avatar::{HttpModerationClient, InMemoryJobStore};
use anyhow::Context;

const DEFAULT_USER_ID: &str = "user123";
const DEFAULT_PROMPT: &str = "A friendly robot avatar with blue eyes";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging so we can see what's happening
    tracing_subscriber::fmt::init();

    let config = ServiceConfig::from_env().context("Failed to load configuration")?;

    // Usage: avatar_processing_service [USER_ID] [PROMPT...]
    let mut args = std::env::args().skip(1);
    let user_id = args.next().unwrap_or_else(|| DEFAULT_USER_ID.to_string());
    let prompt = {
        let rest: Vec<String> = args.collect();
        if rest.is_empty() {
            DEFAULT_PROMPT.to_string()
        } else {
            rest.join(" ")
        }
    };

    // ========================================================================
    // DEPENDENCY INJECTION
    // ========================================================================

    let moderation: Box<dyn ModerationClient> = Box::new(
        HttpModerationClient::new(
            config.moderation_api_url.clone(),
            config.api_token.clone(),
            config.moderation_timeout,
        )
        .context("Failed to build moderation HTTP client")?,
    );
    let service = AvatarProcessingService::new(InMemoryJobStore::new(), moderation);

    tracing::info!(
        api_url = %config.moderation_api_url,
        timeout_secs = config.moderation_timeout.as_secs(),
        "Avatar processing service ready"
    );

    // ========================================================================
    // SUBMIT + LOOKUP
    // ========================================================================

    let job = service.submit_job(&user_id, &prompt).await?;
    println!("Job submitted: {}, Status: {}", job.id, job.status);
    println!("{}", serde_json::to_string_pretty(&job)?);

    match service.get_job_status(&job.id.to_string()).await? {
        Some(found) => println!("Retrieved job status: {}", found.status),
        None => println!("Retrieved job status: Not found"),
    }

    Ok(())
}
