//! Snapshot store seam and the in-memory reference implementation.

use std::collections::BTreeMap;

use crate::errors::Result;
use crate::model::{Member, Snapshot};

/// Persistent key-value store holding the last known member set.
///
/// Single logical writer assumed: the design does not support concurrent
/// synchronizers against the same store, so no locking or versioning is
/// part of this contract.
pub trait SnapshotStore {
    /// Load the full cached snapshot (empty on first run)
    ///
    /// # Errors
    ///
    /// - `StoreRead` - the cache could not be read
    fn get_all(&self) -> Result<Snapshot>;

    /// Apply a minimal-write batch: upsert `puts`, delete `deletes`.
    ///
    /// Ids untouched by either list must not be rewritten. The batch must
    /// be applied atomically; an implementation without transactional
    /// batches must retry individual failures to completion or report
    /// `PartialWrite`.
    ///
    /// # Errors
    ///
    /// - `Persistence` - the batch failed and was not applied
    /// - `PartialWrite` - the batch was applied in part (non-transactional
    ///   stores only)
    fn apply_batch(&mut self, puts: &[Member], deletes: &[u64]) -> Result<()>;
}

/// In-memory store for tests and bootstrap experiments
///
/// Not thread-safe (no Arc/RwLock) - designed for the single-threaded,
/// single-invocation execution model.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    members: BTreeMap<u64, Member>,
}

impl MemoryStore {
    /// Create a new empty MemoryStore
    pub fn new() -> Self {
        Self {
            members: BTreeMap::new(),
        }
    }

    /// Create a store pre-seeded with members
    pub fn with_members(members: impl IntoIterator<Item = Member>) -> Self {
        Self {
            members: members.into_iter().map(|m| (m.id, m)).collect(),
        }
    }

    /// Number of cached members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn get_all(&self) -> Result<Snapshot> {
        Ok(Snapshot::from_members(self.members.values().cloned()))
    }

    fn apply_batch(&mut self, puts: &[Member], deletes: &[u64]) -> Result<()> {
        for member in puts {
            self.members.insert(member.id, member.clone());
        }
        for id in deletes {
            self.members.remove(id);
        }
        Ok(())
    }
}
