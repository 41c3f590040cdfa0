//! Orchestration layer for unfollow notifications
//!
//! Coordinates fetch, diff, notify, and persist for one synchronization
//! cycle, plus the environment configuration and entry-point plumbing
//! around it.

pub mod config;
pub mod handler;
pub mod providers;
pub mod secrets;
pub mod sinks;
pub mod synchronizer;

pub use config::{Config, ConfigError};
pub use handler::{handle, TriggerEvent};
pub use synchronizer::Synchronizer;
