//! SQLite store round-trip and batch-atomicity tests

use tempfile::TempDir;
use ufn_core::errors::UfnErrorKind;
use ufn_core::model::Member;
use ufn_core::store::SnapshotStore;
use ufn_store::SqliteStore;

fn open_temp_store(temp_dir: &TempDir) -> SqliteStore {
    let db_path = temp_dir.path().join("followers.db");
    SqliteStore::open(&db_path).unwrap()
}

#[test]
fn test_get_all_on_fresh_store_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = open_temp_store(&temp_dir);

    let snapshot = store.get_all().unwrap();
    assert!(snapshot.is_empty());
}

#[test]
fn test_round_trip_members() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_temp_store(&temp_dir);

    let alice = Member::new(1, "Alice", "alice_a")
        .with_extra("verified", serde_json::json!(true));
    let bob = Member::new(2, "Bob", "bob_b");

    store.apply_batch(&[alice.clone(), bob.clone()], &[]).unwrap();

    let snapshot = store.get_all().unwrap();
    assert_eq!(snapshot.len(), 2);
    assert_eq!(snapshot.get(1), Some(&alice));
    assert_eq!(snapshot.get(2), Some(&bob));
}

#[test]
fn test_batch_deletes_and_upserts_together() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_temp_store(&temp_dir);

    store
        .apply_batch(
            &[Member::new(1, "Alice", "alice_a"), Member::new(2, "Bob", "bob_b")],
            &[],
        )
        .unwrap();

    store
        .apply_batch(&[Member::new(3, "Carol", "carol_c")], &[1])
        .unwrap();

    let snapshot = store.get_all().unwrap();
    assert!(!snapshot.contains(1));
    assert!(snapshot.contains(2));
    assert!(snapshot.contains(3));
}

#[test]
fn test_failed_batch_rolls_back_completely() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_temp_store(&temp_dir);

    store
        .apply_batch(&[Member::new(1, "Alice", "alice_a")], &[])
        .unwrap();

    // u64::MAX does not fit in a SQLite INTEGER column, so the second put
    // fails after the first put has executed inside the same transaction
    let err = store
        .apply_batch(
            &[
                Member::new(2, "Bob", "bob_b"),
                Member::new(u64::MAX, "Overflow", "overflow_o"),
            ],
            &[1],
        )
        .unwrap_err();
    assert_eq!(err.kind(), UfnErrorKind::Persistence);

    // Nothing from the failed batch may survive: Bob's put is rolled back
    // and Alice's delete never ran
    let snapshot = store.get_all().unwrap();
    assert!(snapshot.contains(1));
    assert!(!snapshot.contains(2));
    assert_eq!(snapshot.len(), 1);
}

#[test]
fn test_apply_batch_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_temp_store(&temp_dir);

    let puts = [Member::new(1, "Alice", "alice_a")];
    store.apply_batch(&puts, &[99]).unwrap();
    store.apply_batch(&puts, &[99]).unwrap();

    assert_eq!(store.get_all().unwrap().len(), 1);
}

#[test]
fn test_untouched_rows_keep_first_seen_at() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = open_temp_store(&temp_dir);

    store
        .apply_batch(&[Member::new(1, "Alice", "alice_a")], &[])
        .unwrap();

    let conn = store.into_connection();
    let original: i64 = conn
        .query_row("SELECT first_seen_at FROM followers WHERE id = 1", [], |row| {
            row.get(0)
        })
        .unwrap();

    // Backdate the row, then re-upsert: first_seen_at must survive
    conn.execute(
        "UPDATE followers SET first_seen_at = ?1, updated_at = ?1 WHERE id = 1",
        [original - 1000],
    )
    .unwrap();

    let mut store = SqliteStore::new(conn);
    store
        .apply_batch(&[Member::new(1, "Alice Renamed", "alice_a")], &[])
        .unwrap();

    let conn = store.into_connection();
    let (first_seen, name): (i64, String) = conn
        .query_row(
            "SELECT first_seen_at, name FROM followers WHERE id = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();

    assert_eq!(first_seen, original - 1000);
    assert_eq!(name, "Alice Renamed");
}

#[test]
fn test_store_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("followers.db");

    {
        let mut store = SqliteStore::open(&db_path).unwrap();
        store
            .apply_batch(&[Member::new(1, "Alice", "alice_a")], &[])
            .unwrap();
    }

    let store = SqliteStore::open(&db_path).unwrap();
    let snapshot = store.get_all().unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot.get(1).unwrap().name, "Alice");
}
