use crate::{KeyValueStore, OptimizationMode};
use chrono::{Local, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};

/// Storage key the history list is persisted under.
pub const HISTORY_STORAGE_KEY: &str = "promptHistory";

/// Maximum number of entries kept in the log.
pub const HISTORY_LIMIT: usize = 20;

/// A persisted record of one successful prompt-optimization transaction.
/// Never mutated after creation; deletion removes by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    /// Timestamp-derived unique id (epoch milliseconds).
    pub id: String,
    /// Human-readable local timestamp.
    pub created_at: String,
    pub input_prompt: String,
    pub output_prompt: String,
    pub model: String,
    pub mode: OptimizationMode,
}

impl HistoryEntry {
    /// Stamp a new entry for a just-completed optimization.
    #[must_use]
    pub fn record(
        input_prompt: impl Into<String>,
        output_prompt: impl Into<String>,
        model: impl Into<String>,
        mode: OptimizationMode,
    ) -> Self {
        Self {
            id: next_id_millis().to_string(),
            created_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_prompt: input_prompt.into(),
            output_prompt: output_prompt.into(),
            model: model.into(),
            mode,
        }
    }
}

static LAST_ID_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Epoch milliseconds, bumped monotonically so that two entries recorded in
/// the same millisecond still get distinct ids.
fn next_id_millis() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut candidate = now;
    let _ = LAST_ID_MILLIS.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
        candidate = if now > last { now } else { last + 1 };
        Some(candidate)
    });
    candidate
}

/// Ordered list of past optimization transactions, newest first, bounded to
/// [`HISTORY_LIMIT`] entries, persisted as a whole on every mutation.
///
/// Reads and writes against the underlying store are not transactional:
/// concurrent writers (e.g. two app instances sharing one store) can lose
/// updates, last writer wins.
pub struct HistoryLog {
    store: Arc<dyn KeyValueStore>,
}

impl HistoryLog {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Read the current list. A missing key yields an empty list; malformed
    /// stored JSON is recovered as an empty list with a diagnostic, never an
    /// error.
    #[must_use]
    pub fn list(&self) -> Vec<HistoryEntry> {
        let Some(json) = self.store.get(HISTORY_STORAGE_KEY) else {
            return Vec::new();
        };
        match serde_json::from_str(&json) {
            Ok(entries) => entries,
            Err(error) => {
                tracing::warn!(%error, "stored history is malformed, resetting to empty");
                Vec::new()
            }
        }
    }

    /// Prepend `entry`, truncate to the most recent [`HISTORY_LIMIT`] entries,
    /// and write the whole list back.
    pub fn append(&self, entry: HistoryEntry) {
        let mut entries = self.list();
        entries.insert(0, entry);
        entries.truncate(HISTORY_LIMIT);
        self.write(&entries);
    }

    /// Remove the entry whose id equals `id`, leaving the rest in order.
    pub fn remove(&self, id: &str) {
        let mut entries = self.list();
        entries.retain(|entry| entry.id != id);
        self.write(&entries);
    }

    /// Delete the underlying storage key entirely.
    pub fn clear(&self) {
        self.store.remove(HISTORY_STORAGE_KEY);
    }

    fn write(&self, entries: &[HistoryEntry]) {
        match serde_json::to_string(entries) {
            Ok(json) => self.store.set(HISTORY_STORAGE_KEY, &json),
            Err(error) => {
                tracing::warn!(%error, "failed to serialize history, keeping previous state");
            }
        }
    }
}
