// Implementations for the avatar job system.

pub mod in_memory;
pub mod moderation_client;

// Re-export for convenience
pub use in_memory::InMemoryJobStore;
pub use moderation_client::HttpModerationClient;
