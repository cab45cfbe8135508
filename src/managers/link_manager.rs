//! Link Manager for the start page.
//!
//! Implements `LinkManagerTrait`, the ordered list of shortcut links with
//! add, update-by-position and remove-by-position. Every mutation writes the
//! whole list back to the key-value store under `customLinks`.

use crate::storage::{self, SharedStore, CUSTOM_LINKS_KEY};
use crate::types::errors::{LinkError, StorageError};
use crate::types::link::ShortcutLink;

/// Trait defining shortcut link operations.
pub trait LinkManagerTrait {
    fn add_link(&mut self, name: &str, url: &str) -> Result<(), LinkError>;
    /// Returns `false` without touching storage when `index` is out of range.
    fn update_link(&mut self, index: usize, name: &str, url: &str) -> Result<bool, LinkError>;
    /// Returns the removed link, or `None` when `index` is out of range.
    fn remove_link(&mut self, index: usize) -> Result<Option<ShortcutLink>, LinkError>;
    fn get_link(&self, index: usize) -> Option<&ShortcutLink>;
    fn list_links(&self) -> &[ShortcutLink];
}

/// Link manager holding the list in memory and persisting on every change.
pub struct LinkManager {
    store: SharedStore,
    links: Vec<ShortcutLink>,
}

impl LinkManager {
    /// Creates a manager and loads any previously stored links.
    pub fn new(store: SharedStore) -> Result<Self, StorageError> {
        let links = storage::load_json_list(store.as_ref(), CUSTOM_LINKS_KEY)?;
        log::debug!("Loaded {} shortcut links", links.len());
        Ok(Self { store, links })
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Stores `next` and only then makes it the current list.
    fn commit(&mut self, next: Vec<ShortcutLink>) -> Result<(), StorageError> {
        storage::save_json_list(self.store.as_ref(), CUSTOM_LINKS_KEY, &next)?;
        self.links = next;
        Ok(())
    }
}

impl LinkManagerTrait for LinkManager {
    fn add_link(&mut self, name: &str, url: &str) -> Result<(), LinkError> {
        let mut next = self.links.clone();
        next.push(ShortcutLink::new(name, url));
        self.commit(next)?;
        log::info!("Added shortcut link '{}'", name);
        Ok(())
    }

    fn update_link(&mut self, index: usize, name: &str, url: &str) -> Result<bool, LinkError> {
        if index >= self.links.len() {
            log::debug!("Ignoring update of missing link #{}", index);
            return Ok(false);
        }
        let mut next = self.links.clone();
        next[index] = ShortcutLink::new(name, url);
        self.commit(next)?;
        log::info!("Updated shortcut link #{}", index);
        Ok(true)
    }

    fn remove_link(&mut self, index: usize) -> Result<Option<ShortcutLink>, LinkError> {
        if index >= self.links.len() {
            log::debug!("Ignoring removal of missing link #{}", index);
            return Ok(None);
        }
        let mut next = self.links.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        log::info!("Removed shortcut link '{}'", removed.name);
        Ok(Some(removed))
    }

    fn get_link(&self, index: usize) -> Option<&ShortcutLink> {
        self.links.get(index)
    }

    fn list_links(&self) -> &[ShortcutLink] {
        &self.links
    }
}

/// Prefixes `https://` unless the URL already starts with `http://` or
/// `https://` (compared case-insensitively).
pub fn normalize_url(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}
