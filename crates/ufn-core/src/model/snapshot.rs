use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::member::Member;

/// Snapshot - a point-in-time mapping from member id to member
///
/// Two snapshots exist concurrently during a sync cycle: `cached` (last
/// persisted) and `current` (freshly fetched). A snapshot is constructed
/// fresh each cycle and discarded after use; only the store's copy survives.
///
/// Backed by a BTreeMap so iteration is deterministic, which keeps
/// notification ordering and test output stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot(BTreeMap<u64, Member>);

impl Snapshot {
    /// Create a new empty Snapshot
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Build a Snapshot from an iterator of members, keyed by id
    ///
    /// Later duplicates overwrite earlier ones; callers that must reject
    /// duplicates (e.g. the fetch path) check before constructing.
    pub fn from_members(members: impl IntoIterator<Item = Member>) -> Self {
        Self(members.into_iter().map(|m| (m.id, m)).collect())
    }

    /// Insert a member, returning the previous entry for that id if any
    pub fn insert(&mut self, member: Member) -> Option<Member> {
        self.0.insert(member.id, member)
    }

    /// Get a member by id
    pub fn get(&self, id: u64) -> Option<&Member> {
        self.0.get(&id)
    }

    /// Check whether an id is present
    pub fn contains(&self, id: u64) -> bool {
        self.0.contains_key(&id)
    }

    /// Number of members in the snapshot
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The id set of this snapshot
    pub fn ids(&self) -> BTreeSet<u64> {
        self.0.keys().copied().collect()
    }

    /// Iterate members in ascending id order
    pub fn members(&self) -> impl Iterator<Item = &Member> {
        self.0.values()
    }
}

impl FromIterator<Member> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Member>>(iter: I) -> Self {
        Self::from_members(iter)
    }
}
