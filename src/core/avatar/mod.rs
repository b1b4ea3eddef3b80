// Core avatar module - job lifecycle and the moderation boundary.
// Ports (JobStore, ModerationClient) live here; adapters live in infra.

pub mod avatar_models;
pub mod avatar_service;
pub mod job_store;
pub mod moderation;

pub use avatar_models::*;
pub use avatar_service::*;
pub use job_store::*;
pub use moderation::*;
