//! Core domain logic for unfollow notifications
//!
//! Provides:
//! - Member and Snapshot models
//! - Pure snapshot diff engine
//! - Notification record construction
//! - Collaborator traits (SourceProvider, SnapshotStore, NotificationSink)
//! - Error and logging facilities

pub mod diff;
pub mod digest;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod notify;
pub mod provider;
pub mod store;
pub mod summary;

// Re-export key types
pub use diff::model::Delta;
pub use errors::{Result, UfnError, UfnErrorKind};
pub use model::{Member, Snapshot};
pub use notify::{NotificationRecord, NotificationSink, RemovedMember};
pub use provider::SourceProvider;
pub use store::{MemoryStore, SnapshotStore};
pub use summary::RunSummary;
