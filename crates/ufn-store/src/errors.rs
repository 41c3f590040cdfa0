//! Error handling for ufn-store
//!
//! Wraps the ufn-core error facility with store-specific helpers

use ufn_core::errors::{UfnError, UfnErrorKind};

/// Result type alias using UfnError
pub type Result<T> = std::result::Result<T, UfnError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> UfnError {
    UfnError::new(UfnErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> UfnError {
    UfnError::new(UfnErrorKind::Persistence)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a cache-read error
pub fn store_read(reason: &str) -> UfnError {
    UfnError::new(UfnErrorKind::StoreRead)
        .with_op("get_all")
        .with_message(reason.to_string())
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> UfnError {
    UfnError::new(UfnErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}
