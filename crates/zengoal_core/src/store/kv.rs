//! SQLite-backed key-value storage.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections.
//! - Bootstrap the single `kv` table before returning usable storage.
//! - Provide plain get/put over serialized text values.
//!
//! # Invariants
//! - Returned storage has the `kv` table created.
//! - Keys are unique; `put` overwrites the previous value for a key.

use crate::store::StoreResult;
use log::{error, info};
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

const KV_SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL
);";

/// Durable key-value storage over a single SQLite table.
///
/// The storage model mirrors a browser's local storage: one text value per
/// key, replaced wholesale on every write. There is no schema version and
/// no migration path; readers that cannot interpret a stored value fall
/// back to a default at a higher layer.
pub struct KvStorage {
    conn: Connection,
}

impl KvStorage {
    /// Opens key-value storage backed by a database file.
    ///
    /// # Side effects
    /// - Bootstraps the `kv` schema.
    /// - Emits `storage_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=storage_open module=store status=start mode=file");

        let result = Connection::open(path)
            .map_err(Into::into)
            .and_then(Self::bootstrap);
        Self::log_open_outcome("file", started_at, &result);
        result
    }

    /// Opens in-memory key-value storage, used by tests and dry runs.
    pub fn open_in_memory() -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=storage_open module=store status=start mode=memory");

        let result = Connection::open_in_memory()
            .map_err(Into::into)
            .and_then(Self::bootstrap);
        Self::log_open_outcome("memory", started_at, &result);
        result
    }

    /// Reads the stored value for `key`, if any.
    pub fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Writes `value` under `key`, replacing any previous value.
    pub fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            [key, value],
        )?;
        Ok(())
    }

    fn bootstrap(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.busy_timeout(Duration::from_secs(5))?;
        conn.execute_batch(KV_SCHEMA_SQL)?;
        Ok(Self { conn })
    }

    fn log_open_outcome(mode: &str, started_at: Instant, result: &StoreResult<Self>) {
        match result {
            Ok(_) => info!(
                "event=storage_open module=store status=ok mode={mode} duration_ms={}",
                started_at.elapsed().as_millis()
            ),
            Err(err) => error!(
                "event=storage_open module=store status=error mode={mode} duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::KvStorage;

    #[test]
    fn get_on_fresh_storage_returns_none() {
        let storage = KvStorage::open_in_memory().unwrap();
        assert_eq!(storage.get("zen-goals").unwrap(), None);
    }

    #[test]
    fn put_then_get_roundtrips() {
        let storage = KvStorage::open_in_memory().unwrap();
        storage.put("zen-goals", "[]").unwrap();
        assert_eq!(storage.get("zen-goals").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn put_overwrites_existing_value() {
        let storage = KvStorage::open_in_memory().unwrap();
        storage.put("k", "old").unwrap();
        storage.put("k", "new").unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("new"));
    }

    #[test]
    fn keys_are_independent() {
        let storage = KvStorage::open_in_memory().unwrap();
        storage.put("a", "1").unwrap();
        storage.put("b", "2").unwrap();
        assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
        assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
    }
}
