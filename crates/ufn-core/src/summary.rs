//! Per-run observability record.

use serde::{Deserialize, Serialize};
use ufn_core_types::schema::EVENT_SYNC_END;
use ufn_core_types::RunId;

/// Structured record of one completed synchronization run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Identifier of the run this summary describes
    pub run_id: RunId,
    /// Size of the freshly fetched member set
    pub current: usize,
    /// Size of the previously cached member set
    pub cached: usize,
    /// Added count
    pub follows: usize,
    /// Removed count
    pub unfollows: usize,
}

impl RunSummary {
    /// Emit the summary as one structured log line
    pub fn emit(&self) {
        tracing::info!(
            event = EVENT_SYNC_END,
            run_id = %self.run_id,
            current = self.current,
            cached = self.cached,
            follows = self.follows,
            unfollows = self.unfollows,
            "sync cycle complete"
        );
    }
}
