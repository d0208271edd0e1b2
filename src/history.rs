//! Persisted search history.
//!
//! A small most-recent-first list of past queries, unique by value and
//! capped at ten entries. The backing store is pluggable so tests can
//! simulate an unavailable store; every storage failure degrades to a no-op
//! or an empty list instead of propagating.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::warn;

pub const MAX_HISTORY_ITEMS: usize = 10;

/// Durable key-value slot holding the serialized history.
pub trait HistoryStorage: Send + Sync {
    fn read(&self) -> Result<Option<String>>;
    fn write(&self, payload: &str) -> Result<()>;
    fn remove(&self) -> Result<()>;
}

/// History persisted as a JSON file in the data directory.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HistoryStorage for FileStorage {
    fn read(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context("failed to read search history"),
        }
    }

    fn write(&self, payload: &str) -> Result<()> {
        std::fs::write(&self.path, payload).context("failed to write search history")
    }

    fn remove(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context("failed to clear search history"),
        }
    }
}

pub struct SearchHistory {
    storage: Box<dyn HistoryStorage>,
}

impl SearchHistory {
    pub fn new(storage: Box<dyn HistoryStorage>) -> Self {
        Self { storage }
    }

    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self::new(Box::new(FileStorage::new(path)))
    }

    /// Record a submitted query: dedup, move to front, cap, persist.
    /// Blank queries are ignored.
    pub fn save(&self, query: &str) {
        if query.trim().is_empty() {
            return;
        }

        let mut history = self.get_all();
        history.retain(|item| item != query);
        history.insert(0, query.to_string());
        history.truncate(MAX_HISTORY_ITEMS);

        let payload = match serde_json::to_string(&history) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to serialize search history: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.write(&payload) {
            warn!("Failed to save search history: {e:#}");
        }
    }

    /// Most-recent-first history. Missing, corrupt, or unreadable storage
    /// all come back as an empty list.
    pub fn get_all(&self) -> Vec<String> {
        match self.storage.read() {
            Ok(Some(payload)) => serde_json::from_str(&payload).unwrap_or_default(),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to load search history: {e:#}");
                Vec::new()
            }
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.storage.remove() {
            warn!("Failed to clear search history: {e:#}");
        }
    }
}
