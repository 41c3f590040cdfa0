//! Cache synchronization orchestration.
//!
//! ## Pipeline (in order):
//! 1. Fetch `current` from the source provider (fail-closed; an empty
//!    result is a fetch failure, never a zero-member snapshot)
//! 2. Load `cached` from the snapshot store (empty on first run)
//! 3. Compute the delta
//! 4. If removals exist: send the notification *before* any store mutation
//! 5. Persist the minimal batch (upsert added, delete removed)
//! 6. Return the run summary
//!
//! A run either completes all of this or aborts without advancing the
//! cache: a failed send leaves the cache behind `current`, so the next
//! scheduled run recomputes the identical delta and resends
//! (at-least-once delivery for unfollow events).

use ufn_core::diff::engine::diff;
use ufn_core::errors::{Result, UfnError, UfnErrorKind};
use ufn_core::model::Member;
use ufn_core::notify::{build_notification, NotificationSink};
use ufn_core::provider::SourceProvider;
use ufn_core::store::SnapshotStore;
use ufn_core::summary::RunSummary;
use ufn_core_types::RunContext;

/// Orchestrates one fetch → diff → notify → persist cycle.
///
/// Single-threaded and sequential; the caller (an external scheduler) is
/// responsible for serializing invocations. There is no cancellation
/// mid-cycle: a run is atomic-or-aborted.
pub struct Synchronizer<'a> {
    provider: &'a dyn SourceProvider,
    store: &'a mut dyn SnapshotStore,
    sink: &'a dyn NotificationSink,
}

impl<'a> Synchronizer<'a> {
    /// Create a synchronizer over injected collaborators
    pub fn new(
        provider: &'a dyn SourceProvider,
        store: &'a mut dyn SnapshotStore,
        sink: &'a dyn NotificationSink,
    ) -> Self {
        Self {
            provider,
            store,
            sink,
        }
    }

    /// Run one synchronization cycle
    ///
    /// # Errors
    ///
    /// - `Fetch` - provider unreachable, malformed, or empty result; no
    ///   mutation, no notification
    /// - `StoreRead` - cached snapshot unreadable; no mutation
    /// - `Delivery` - notification send failed; aborts before persistence
    /// - `Persistence` / `PartialWrite` - batch update failed
    pub fn run(&mut self, ctx: &RunContext) -> Result<RunSummary> {
        tracing::debug!(run_id = %ctx.run_id, "starting cycle");

        // 1. Fetch current state, fail-closed
        let current = self
            .provider
            .fetch()
            .map_err(|e| e.with_run_id(ctx.run_id.clone()))?;

        // Guard: an empty fetch is a provider failure. Feeding it into the
        // diff would read as a mass unfollow and trigger a notification
        // storm on the next non-empty fetch's consumer side.
        if current.is_empty() {
            return Err(UfnError::new(UfnErrorKind::Fetch)
                .with_op("fetch_current")
                .with_run_id(ctx.run_id.clone())
                .with_message("provider returned an empty member set"));
        }

        // 2. Load cached state (empty snapshot on first run)
        let cached = self
            .store
            .get_all()
            .map_err(|e| e.with_run_id(ctx.run_id.clone()))?;

        // 3. Diff
        let delta = diff(&cached, &current);

        // 4. Notify before persisting, so a failed delivery is retried
        //    against the same cache on the next run
        if delta.has_removals() {
            let record = build_notification(&cached, &delta)?;
            tracing::debug!(
                run_id = %ctx.run_id,
                count = record.count,
                delta_digest = %record.delta_digest,
                "sending unfollow notification"
            );
            self.sink
                .send(&record)
                .map_err(|e| e.with_run_id(ctx.run_id.clone()))?;
        }

        // 5. Persist the minimal batch: upsert added, delete removed,
        //    leave surviving ids untouched
        let puts: Vec<Member> = delta
            .added
            .iter()
            .filter_map(|&id| current.get(id).cloned())
            .collect();
        let deletes: Vec<u64> = delta.removed.iter().copied().collect();

        if !puts.is_empty() || !deletes.is_empty() {
            self.store
                .apply_batch(&puts, &deletes)
                .map_err(|e| e.with_run_id(ctx.run_id.clone()))?;
        }

        // 6. Summarize
        Ok(RunSummary {
            run_id: ctx.run_id.clone(),
            current: current.len(),
            cached: cached.len(),
            follows: delta.added.len(),
            unfollows: delta.removed.len(),
        })
    }
}
