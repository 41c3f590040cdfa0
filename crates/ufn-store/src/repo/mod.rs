//! Repository layer bridging the domain model to SQLite

mod sqlite_store;

pub use sqlite_store::SqliteStore;
