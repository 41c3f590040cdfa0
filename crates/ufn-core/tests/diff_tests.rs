//! Pure diff unit tests - no I/O, no store.

use std::collections::BTreeSet;

use ufn_core::diff::engine::diff;
use ufn_core::model::{Member, Snapshot};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn snapshot_of(ids: &[u64]) -> Snapshot {
    ids.iter()
        .map(|&id| Member::new(id, format!("member-{}", id), format!("handle_{}", id)))
        .collect()
}

/// Apply a delta's added/removed id sets to the cached id set.
fn apply_delta(cached: &Snapshot, added: &BTreeSet<u64>, removed: &BTreeSet<u64>) -> BTreeSet<u64> {
    let mut ids = cached.ids();
    ids.extend(added.iter().copied());
    ids.retain(|id| !removed.contains(id));
    ids
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn test_added_and_removed_are_disjoint() {
    let cached = snapshot_of(&[1, 2, 3, 4]);
    let current = snapshot_of(&[3, 4, 5, 6]);

    let delta = diff(&cached, &current);
    assert!(delta.added.is_disjoint(&delta.removed));
}

#[test]
fn test_applying_delta_reconstructs_current_id_set() {
    let cached = snapshot_of(&[10, 20, 30]);
    let current = snapshot_of(&[20, 40]);

    let delta = diff(&cached, &current);
    let reconstructed = apply_delta(&cached, &delta.added, &delta.removed);
    assert_eq!(reconstructed, current.ids());
}

#[test]
fn test_bootstrap_empty_cache_reports_no_removals() {
    let current = snapshot_of(&[1, 2, 3]);

    let delta = diff(&Snapshot::new(), &current);
    assert_eq!(delta.added, current.ids());
    assert!(delta.removed.is_empty());
}

#[test]
fn test_no_op_diff_of_snapshot_with_itself() {
    let snapshot = snapshot_of(&[7, 8, 9]);

    let delta = diff(&snapshot, &snapshot);
    assert!(delta.added.is_empty());
    assert!(delta.removed.is_empty());
}

#[test]
fn test_diff_twice_yields_identical_sets() {
    let cached = snapshot_of(&[1, 2, 3]);
    let current = snapshot_of(&[2, 3, 4]);

    let first = diff(&cached, &current);
    let second = diff(&cached, &current);
    assert_eq!(first, second);
}

#[test]
fn test_attributes_do_not_affect_diff() {
    // Same id on both sides with different attributes: not a delta entry
    let cached = Snapshot::from_members(vec![Member::new(1, "Old Name", "handle")]);
    let current = Snapshot::from_members(vec![Member::new(1, "New Name", "handle")]);

    let delta = diff(&cached, &current);
    assert!(delta.is_empty());
}

#[test]
fn test_full_turnover() {
    let cached = snapshot_of(&[1, 2]);
    let current = snapshot_of(&[3, 4]);

    let delta = diff(&cached, &current);
    assert_eq!(delta.added, BTreeSet::from([3, 4]));
    assert_eq!(delta.removed, BTreeSet::from([1, 2]));
}
