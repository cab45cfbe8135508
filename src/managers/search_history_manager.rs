//! Search History Manager for the start page.
//!
//! Keeps the most recent distinct queries, oldest first, under `searchHistory`.

use crate::storage::{self, SharedStore, SEARCH_HISTORY_KEY};
use crate::types::errors::{HistoryError, StorageError};

/// How many queries are kept unless configured otherwise.
pub const MAX_HISTORY_ENTRIES: usize = 5;

/// Trait defining recent-search operations.
pub trait SearchHistoryManagerTrait {
    fn record(&mut self, query: &str) -> Result<(), HistoryError>;
    fn clear(&mut self) -> Result<(), HistoryError>;
    /// Entries oldest to newest, as stored.
    fn entries(&self) -> &[String];
    /// Entries in display order, most recent first.
    fn recent_first(&self) -> Vec<String>;
}

pub struct SearchHistoryManager {
    store: SharedStore,
    entries: Vec<String>,
    max_entries: usize,
}

impl SearchHistoryManager {
    /// Creates a manager keeping [`MAX_HISTORY_ENTRIES`] queries.
    pub fn new(store: SharedStore) -> Result<Self, StorageError> {
        Self::with_limit(store, MAX_HISTORY_ENTRIES)
    }

    /// Creates a manager keeping at most `max_entries` queries (at least one).
    ///
    /// A stored list longer than the limit is trimmed in memory; storage is
    /// rewritten on the next `record`.
    pub fn with_limit(store: SharedStore, max_entries: usize) -> Result<Self, StorageError> {
        let max_entries = max_entries.max(1);
        let mut entries: Vec<String> = storage::load_json_list(store.as_ref(), SEARCH_HISTORY_KEY)?;
        if entries.len() > max_entries {
            entries.drain(..entries.len() - max_entries);
        }
        Ok(Self {
            store,
            entries,
            max_entries,
        })
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Returns the query shown at `position` in display order.
    pub fn get_recent(&self, position: usize) -> Option<&str> {
        self.entries.iter().rev().nth(position).map(String::as_str)
    }
}

impl SearchHistoryManagerTrait for SearchHistoryManager {
    /// Moves `query` to the newest position, evicting the oldest entries
    /// beyond the limit.
    ///
    /// The in-memory list only changes once the new list is stored.
    fn record(&mut self, query: &str) -> Result<(), HistoryError> {
        let mut next: Vec<String> = self
            .entries
            .iter()
            .filter(|entry| entry.as_str() != query)
            .cloned()
            .collect();
        next.push(query.to_string());
        if next.len() > self.max_entries {
            let excess = next.len() - self.max_entries;
            next.drain(..excess);
        }
        storage::save_json_list(self.store.as_ref(), SEARCH_HISTORY_KEY, &next)?;
        self.entries = next;
        log::debug!("Recorded search, {} entries kept", self.entries.len());
        Ok(())
    }

    /// Empties the history and deletes the stored key entirely.
    fn clear(&mut self) -> Result<(), HistoryError> {
        self.store.remove(SEARCH_HISTORY_KEY)?;
        self.entries.clear();
        log::info!("Cleared search history");
        Ok(())
    }

    fn entries(&self) -> &[String] {
        &self.entries
    }

    fn recent_first(&self) -> Vec<String> {
        self.entries.iter().rev().cloned().collect()
    }
}
