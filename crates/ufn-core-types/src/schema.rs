//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical event names carried in the `event` field of run-lifecycle logs
pub const EVENT_SYNC_START: &str = "sync_start";
pub const EVENT_SYNC_END: &str = "sync_end";
pub const EVENT_SYNC_END_ERROR: &str = "sync_end_error";
