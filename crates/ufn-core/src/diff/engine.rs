//! Snapshot diff computation engine.
//!
//! The core entry point is [`diff`], which accepts the cached and current
//! snapshots and produces a [`Delta`].

use crate::diff::model::Delta;
use crate::model::Snapshot;
use std::collections::BTreeSet;

/// Compute the delta between a cached and a freshly fetched snapshot.
///
/// Pure function: no side effects, deterministic for a given pair of
/// snapshots. Plain set difference over the id sets, O(n) in total
/// distinct ids.
///
/// Edge cases:
/// - empty `cached` is the bootstrap case: every current id is `added`,
///   `removed` is empty (a first run never reports unfollows)
/// - an empty `current` is diffed as-is; the engine is oblivious to the
///   fetch-failure hazard, which is guarded upstream by the synchronizer
pub fn diff(cached: &Snapshot, current: &Snapshot) -> Delta {
    let cached_ids = cached.ids();
    let current_ids = current.ids();

    let added: BTreeSet<u64> = current_ids.difference(&cached_ids).copied().collect();
    let removed: BTreeSet<u64> = cached_ids.difference(&current_ids).copied().collect();

    Delta { added, removed }
}
