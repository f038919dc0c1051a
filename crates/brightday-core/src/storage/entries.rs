//! Durable, keyed storage of daily entries with derived streak state.
//!
//! The whole entry collection is the unit of persistence: every write
//! re-serializes it under one key and recomputes the streak cache under
//! another, within the same mutation. Reads are served from an in-memory
//! copy refreshed after each confirmed write.
//!
//! Failure policy: an unreadable blob store surfaces as
//! [`StoreError::Unavailable`]; stored bytes that no longer parse are
//! logged and replaced with an empty/default value, so a corrupt store
//! degrades to "no entries yet" instead of an unusable app.

use std::sync::{Mutex, MutexGuard};

use crate::entry::{today_local, DailyEntry};
use crate::error::{CoreError, StoreError};
use crate::storage::{BlobStore, SqliteStore};
use crate::streak::{derive_streaks, StreakState};

/// Blob key holding the serialized entry collection.
pub const ENTRIES_KEY: &str = "entries";
/// Blob key holding the serialized streak cache.
pub const STREAK_KEY: &str = "streak";

struct Inner {
    blob: Box<dyn BlobStore>,
    /// Sorted descending by date; at most one entry per date.
    entries: Vec<DailyEntry>,
    /// Derived cache, recomputed on every write.
    streak: StreakState,
}

/// Entry store over a [`BlobStore`].
///
/// Writes are serialized through an internal lock around the whole
/// read-modify-write cycle, so overlapping "log status" and "save
/// gratitude" calls cannot lose updates to each other.
pub struct EntryStore {
    inner: Mutex<Inner>,
}

impl EntryStore {
    /// Open the store over the default SQLite backend in the data
    /// directory.
    pub fn open() -> Result<Self, CoreError> {
        Self::with_store(Box::new(SqliteStore::open()?))
    }

    /// Build the store over any blob backend.
    ///
    /// Loads the entry collection and the streak cache. A missing streak
    /// cache is recomputed from the entries and persisted best-effort,
    /// so cold starts after an upgrade still see correct numbers.
    pub fn with_store(mut blob: Box<dyn BlobStore>) -> Result<Self, CoreError> {
        let mut entries: Vec<DailyEntry> = load_json(&*blob, ENTRIES_KEY)?.unwrap_or_default();
        sort_descending(&mut entries);

        let streak = match load_json(&*blob, STREAK_KEY)? {
            Some(cached) => cached,
            None => {
                let derived = derive_streaks(&entries, today_local());
                persist_streak_best_effort(&mut *blob, &derived);
                derived
            }
        };

        Ok(Self {
            inner: Mutex::new(Inner {
                blob,
                entries,
                streak,
            }),
        })
    }

    /// All entries, most recent first. Returns copies.
    pub fn list_entries(&self) -> Result<Vec<DailyEntry>, CoreError> {
        Ok(self.lock()?.entries.clone())
    }

    /// Exact-match lookup by date.
    pub fn get_entry(&self, date: chrono::NaiveDate) -> Result<Option<DailyEntry>, CoreError> {
        Ok(self
            .lock()?
            .entries
            .iter()
            .find(|e| e.date == date)
            .cloned())
    }

    /// Today's entry, if one was logged.
    pub fn today_entry(&self) -> Result<Option<DailyEntry>, CoreError> {
        self.get_entry(today_local())
    }

    /// Insert or replace the entry for its date, then recompute and
    /// persist the streak cache in the same mutation. Returns the fresh
    /// streak state.
    ///
    /// The in-memory view is only updated once both blobs are written,
    /// so no caller observes a half-applied mutation. On failure the
    /// in-memory view may lag the persisted one until the next
    /// successful write.
    pub fn upsert_entry(&self, entry: DailyEntry) -> Result<StreakState, CoreError> {
        let mut inner = self.lock()?;

        let mut working = inner.entries.clone();
        match working.iter_mut().find(|e| e.date == entry.date) {
            Some(existing) => *existing = entry,
            None => working.push(entry),
        }
        sort_descending(&mut working);

        let payload = serde_json::to_string(&working)?;
        inner.blob.set(ENTRIES_KEY, &payload)?;

        let streak = derive_streaks(&working, today_local());
        let streak_payload = serde_json::to_string(&streak)?;
        inner.blob.set(STREAK_KEY, &streak_payload)?;

        inner.entries = working;
        inner.streak = streak;
        Ok(streak)
    }

    /// Rewrite today's entry with a new gratitude note, preserving its
    /// status. Fails if nothing was logged today.
    pub fn set_gratitude(&self, text: impl Into<String>) -> Result<DailyEntry, CoreError> {
        let today = today_local();
        let entry = self
            .get_entry(today)?
            .ok_or(CoreError::NoEntry { date: today })?
            .with_gratitude(text);
        self.upsert_entry(entry.clone())?;
        Ok(entry)
    }

    /// The cached streak state.
    pub fn streak_state(&self) -> Result<StreakState, CoreError> {
        Ok(self.lock()?.streak)
    }

    /// Erase all entries and derived state. Irreversible.
    pub fn clear_all(&self) -> Result<(), CoreError> {
        let mut inner = self.lock()?;
        inner.blob.clear()?;
        inner.entries.clear();
        inner.streak = StreakState::default();
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

fn sort_descending(entries: &mut [DailyEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Read and parse a stored JSON value. An unreadable store propagates;
/// bytes that fail to parse are logged and masked as absent.
fn load_json<T: serde::de::DeserializeOwned>(
    blob: &dyn BlobStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    let Some(raw) = blob.get(key)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(source) => {
            let err = StoreError::Corrupt {
                key: key.to_string(),
                source,
            };
            tracing::warn!(error = %err, "discarding unreadable stored value");
            Ok(None)
        }
    }
}

fn persist_streak_best_effort(blob: &mut dyn BlobStore, streak: &StreakState) {
    let result = serde_json::to_string(streak)
        .map_err(CoreError::from)
        .and_then(|payload| Ok(blob.set(STREAK_KEY, &payload)?));
    if let Err(err) = result {
        tracing::warn!(error = %err, "could not persist recomputed streak cache");
    }
}
