//! SQLite persistence for the cached member set
//!
//! Provides:
//! - SQLite connection management (WAL mode, foreign keys)
//! - Embedded, checksummed migrations
//! - `SqliteStore`, a `SnapshotStore` implementation with a transactional
//!   (atomic) batch update

pub mod db;
pub mod errors;
pub mod migrations;
pub mod repo;

// Re-export key types
pub use errors::Result;
pub use repo::SqliteStore;
