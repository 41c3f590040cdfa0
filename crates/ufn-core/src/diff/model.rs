//! Diff result model

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Delta - the set-difference result between two snapshots
///
/// Invariants (upheld by [`crate::diff::engine::diff`]):
/// - `added ∩ removed = ∅`
/// - `added ∪ (cached ∩ current) = current`
/// - `removed ∪ (cached ∩ current) = cached`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delta {
    /// Ids present in `current` but not in `cached` (new arrivals)
    pub added: BTreeSet<u64>,
    /// Ids present in `cached` but not in `current` (departures)
    pub removed: BTreeSet<u64>,
}

impl Delta {
    /// Create an empty Delta
    pub fn new() -> Self {
        Self::default()
    }

    /// True when neither side changed
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// True when at least one member departed
    pub fn has_removals(&self) -> bool {
        !self.removed.is_empty()
    }
}
