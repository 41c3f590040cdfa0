//! Invocation entry point.
//!
//! The external scheduler hands over an opaque trigger event; the handler
//! runs one cycle, emits the summary line, and returns nothing on success.

use serde::{Deserialize, Serialize};

use crate::synchronizer::Synchronizer;
use ufn_core::errors::Result;
use ufn_core_types::schema::{EVENT_SYNC_END_ERROR, EVENT_SYNC_START};
use ufn_core_types::RunContext;

/// Opaque trigger payload from the invoking scheduler
///
/// Nothing in the pipeline depends on its contents; it is carried for
/// logging only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TriggerEvent {
    /// Identifier of the triggering source, if the scheduler provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Raw trigger payload
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// Run one synchronization cycle for a trigger
///
/// Logs the structured run summary on success. On failure the error is
/// logged and propagated; the hosting process treats it as a normal
/// failed invocation (no partial recovery is attempted).
pub fn handle(
    trigger: &TriggerEvent,
    ctx: &RunContext,
    sync: &mut Synchronizer<'_>,
) -> Result<()> {
    tracing::info!(
        event = EVENT_SYNC_START,
        run_id = %ctx.run_id,
        source = trigger.source.as_deref().unwrap_or("unknown"),
        "sync cycle triggered"
    );

    match sync.run(ctx) {
        Ok(summary) => {
            summary.emit();
            Ok(())
        }
        Err(err) => {
            tracing::error!(
                event = EVENT_SYNC_END_ERROR,
                run_id = %ctx.run_id,
                err.kind = ?err.kind(),
                err.code = err.code(),
                "sync cycle failed: {}",
                err
            );
            Err(err)
        }
    }
}
