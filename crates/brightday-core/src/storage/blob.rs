//! Blob store boundary.
//!
//! The core persists whole JSON documents under string keys and assumes
//! nothing else of its storage: `get`/`set`/`remove`/`clear` is the
//! entire contract, and no transactionality across keys is expected.
//! Two backends ship here; hosts that bring their own persistence
//! implement the trait themselves.

use std::collections::HashMap;
use std::path::Path;

use rusqlite::{params, Connection};

use crate::error::StoreError;
use crate::storage::data_dir;

/// String-keyed blob storage, the library's only I/O boundary.
pub trait BlobStore: Send {
    /// Fetch the value under `key`, if present.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Insert or replace the value under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove the value under `key`; absent keys are not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// Remove every key in the store.
    fn clear(&mut self) -> Result<(), StoreError>;
}

/// SQLite-backed blob store: a single `kv` table in a database file
/// inside the data directory.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open the store at `<data dir>/brightday.db`, creating the file
    /// and schema if they don't exist.
    pub fn open() -> Result<Self, StoreError> {
        let dir = data_dir().map_err(|e| StoreError::Unavailable(Box::new(e)))?;
        Self::open_at(dir.join("brightday.db"))
    }

    /// Open the store at an explicit path.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }
}

impl BlobStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.conn
            .execute("DELETE FROM kv WHERE key = ?1", params![key])?;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.conn.execute("DELETE FROM kv", [])?;
        Ok(())
    }
}

/// In-memory blob store for tests and hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.map.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StoreError> {
        self.map.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_kv_roundtrip() {
        let mut store = SqliteStore::open_memory().unwrap();
        assert!(store.get("entries").unwrap().is_none());
        store.set("entries", "[]").unwrap();
        assert_eq!(store.get("entries").unwrap().unwrap(), "[]");
        store.set("entries", "[1]").unwrap();
        assert_eq!(store.get("entries").unwrap().unwrap(), "[1]");
    }

    #[test]
    fn sqlite_clear_removes_every_key() {
        let mut store = SqliteStore::open_memory().unwrap();
        store.set("entries", "[]").unwrap();
        store.set("streak", "{}").unwrap();
        store.clear().unwrap();
        assert!(store.get("entries").unwrap().is_none());
        assert!(store.get("streak").unwrap().is_none());
    }

    #[test]
    fn sqlite_remove_is_idempotent() {
        let mut store = SqliteStore::open_memory().unwrap();
        store.set("streak", "{}").unwrap();
        store.remove("streak").unwrap();
        store.remove("streak").unwrap();
        assert!(store.get("streak").unwrap().is_none());
    }

    #[test]
    fn memory_store_matches_contract() {
        let mut store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());
        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().unwrap(), "v");
        store.clear().unwrap();
        assert!(store.get("k").unwrap().is_none());
    }
}
