//! Persistent key-value storage.
//!
//! Every store is string-keyed and string-valued with synchronous semantics.
//! Each call acquires the store, performs one read or write and releases it.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::errors::StorageError;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Key holding the JSON array of recent queries, oldest first.
pub const SEARCH_HISTORY_KEY: &str = "searchHistory";
/// Key holding the literal `"true"`/`"false"` theme flag.
pub const DARK_MODE_KEY: &str = "darkMode";
/// Key holding the JSON array of `{name, url}` shortcut links.
pub const CUSTOM_LINKS_KEY: &str = "customLinks";
/// Key holding the raw id of the active search engine.
pub const SEARCH_ENGINE_KEY: &str = "searchEngine";

/// A string-keyed, string-valued persistent store.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Shared handle to the store used by every manager.
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Reads a JSON array stored under `key`.
///
/// A missing key and malformed JSON both yield an empty list; the latter is
/// logged and otherwise ignored so one corrupted value never blocks startup.
pub fn load_json_list<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Vec<T>, StorageError> {
    let raw = match store.get(key)? {
        Some(raw) => raw,
        None => return Ok(Vec::new()),
    };
    match serde_json::from_str::<Option<Vec<T>>>(&raw) {
        Ok(items) => Ok(items.unwrap_or_default()),
        Err(e) => {
            log::warn!("Ignoring malformed value under '{}': {}", key, e);
            Ok(Vec::new())
        }
    }
}

/// Serializes `items` as a JSON array and writes it under `key`.
pub fn save_json_list<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    items: &[T],
) -> Result<(), StorageError> {
    let json = serde_json::to_string(items)
        .map_err(|e| StorageError::SerializationError(e.to_string()))?;
    store.set(key, &json)
}
