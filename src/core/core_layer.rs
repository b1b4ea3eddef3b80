// The core module contains all business logic.
// Each feature gets its own submodule.

#[path = "avatar/mod.rs"]
pub mod avatar;
