//! SQLite-backed SnapshotStore implementation
//!
//! One row per tracked member. `get_all` is a full-table scan, acceptable
//! at single-writer, single-tenant scale. `apply_batch` runs inside one
//! transaction, so the batch is applied atomically: a failed batch rolls
//! back completely and no half-applied state can reach the next cycle.

use crate::errors::{from_rusqlite, store_read, Result};
use rusqlite::{Connection, Transaction};
use ufn_core::model::{Member, Snapshot};
use ufn_core::store::SnapshotStore;

/// SQLite repository for the cached member set
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Wrap an open, migrated connection
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open, configure, and migrate a store at the given path
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let mut conn = crate::db::open(path)?;
        crate::db::configure(&conn)?;
        crate::migrations::apply_migrations(&mut conn)?;
        Ok(Self::new(conn))
    }

    /// Consume the store and return the underlying connection
    pub fn into_connection(self) -> Connection {
        self.conn
    }

    fn upsert_member_tx(tx: &Transaction, member: &Member, now: i64) -> Result<()> {
        let extra_json =
            serde_json::to_string(&member.extra).unwrap_or_else(|_| "{}".to_string());

        tx.execute(
            "INSERT INTO followers (id, name, screen_name, extra, first_seen_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                screen_name = excluded.screen_name,
                extra = excluded.extra,
                updated_at = excluded.updated_at",
            rusqlite::params![
                member.id,
                member.name,
                member.screen_name,
                extra_json,
                now,
                now,
            ],
        )
        .map_err(from_rusqlite)?;

        Ok(())
    }

    fn delete_member_tx(tx: &Transaction, id: u64) -> Result<()> {
        tx.execute("DELETE FROM followers WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;
        Ok(())
    }
}

impl SnapshotStore for SqliteStore {
    fn get_all(&self) -> Result<Snapshot> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, screen_name, extra FROM followers")
            .map_err(|e| store_read(&e.to_string()))?;

        let members = stmt
            .query_map([], |row| {
                let id: u64 = row.get(0)?;
                let name: String = row.get(1)?;
                let screen_name: String = row.get(2)?;
                let extra_json: String = row.get(3)?;

                let mut member = Member::new(id, name, screen_name);
                member.extra = serde_json::from_str(&extra_json).unwrap_or_default();

                Ok(member)
            })
            .map_err(|e| store_read(&e.to_string()))?
            .collect::<std::result::Result<Vec<Member>, _>>()
            .map_err(|e| store_read(&e.to_string()))?;

        Ok(Snapshot::from_members(members))
    }

    fn apply_batch(&mut self, puts: &[Member], deletes: &[u64]) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let tx = self.conn.transaction().map_err(from_rusqlite)?;
        for member in puts {
            Self::upsert_member_tx(&tx, member, now)?;
        }
        for &id in deletes {
            Self::delete_member_tx(&tx, id)?;
        }
        tx.commit().map_err(from_rusqlite)?;

        tracing::debug!(
            puts = puts.len(),
            deletes = deletes.len(),
            "Applied snapshot batch"
        );

        Ok(())
    }
}
