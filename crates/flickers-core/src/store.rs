//! Key-value persistence
//!
//! The engines never touch a storage medium. They serialize their state to
//! strings and hand them to a [`KeyValueStore`]. Two stores ship with the
//! crate: [`MemoryStore`] for tests and embedding, [`FileStore`] for a JSON
//! file on disk.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Store key holding the serialized history ledger
pub const HISTORY_KEY: &str = "calculator-history";

/// Store key holding the selected theme name
pub const THEME_KEY: &str = "calculator-theme";

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a store backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backing file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data is not valid JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// String key-value store contract: `get`, `set`, `remove`
pub trait KeyValueStore: fmt::Debug {
    /// Returns the value stored under `key`, if any
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a JSON object file, rewritten on every change
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "opened file store");
        Ok(Self { path, entries })
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}
