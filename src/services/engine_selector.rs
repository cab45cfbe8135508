//! Engine Selector: tracks the active search engine and builds search URLs.
//!
//! The active id is kept verbatim, even when it is not one of the known
//! engines. Such an id has no display name and builds Bing URLs.

use crate::storage::{SharedStore, SEARCH_ENGINE_KEY};
use crate::types::engine::SearchEngine;
use crate::types::errors::StorageError;
use crate::types::event::EngineInfo;
use crate::types::settings::Locale;

/// Trait defining the engine selector interface.
pub trait EngineSelectorTrait {
    fn select(&mut self, id: &str) -> Result<EngineSelection, StorageError>;
    fn active_id(&self) -> &str;
    fn display_name(&self) -> Option<&'static str>;
    fn placeholder(&self) -> String;
    fn build_url(&self, query: &str) -> String;
    fn list_engines(&self) -> Vec<EngineInfo>;
}

/// Result of switching engines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSelection {
    pub id: String,
    pub display_name: Option<String>,
    pub placeholder: String,
}

pub struct EngineSelector {
    store: SharedStore,
    active: String,
    locale: Locale,
}

impl EngineSelector {
    /// Restores the stored engine id, or uses `default_id` when none is stored.
    pub fn new(store: SharedStore, default_id: &str, locale: Locale) -> Result<Self, StorageError> {
        let active = store
            .get(SEARCH_ENGINE_KEY)?
            .unwrap_or_else(|| default_id.to_string());
        Ok(Self {
            store,
            active,
            locale,
        })
    }

    /// The engine used for URL building.
    pub fn engine(&self) -> SearchEngine {
        SearchEngine::resolve(&self.active)
    }

    fn placeholder_for(name: Option<&str>, locale: Locale) -> String {
        match (name, locale) {
            (Some(name), Locale::En) => format!("Search with {}...", name),
            (None, Locale::En) => "Search the web...".to_string(),
            (Some(name), Locale::ZhCn) => format!("在{}中搜索...", name),
            (None, Locale::ZhCn) => "在搜索引擎中搜索...".to_string(),
        }
    }
}

impl EngineSelectorTrait for EngineSelector {
    fn select(&mut self, id: &str) -> Result<EngineSelection, StorageError> {
        self.store.set(SEARCH_ENGINE_KEY, id)?;
        self.active = id.to_string();

        let display_name = self.display_name();
        if display_name.is_none() {
            log::warn!("Selected unknown search engine '{}', searches use Bing", id);
        } else {
            log::info!("Switched search engine to '{}'", id);
        }

        Ok(EngineSelection {
            id: self.active.clone(),
            display_name: display_name.map(str::to_string),
            placeholder: self.placeholder(),
        })
    }

    fn active_id(&self) -> &str {
        &self.active
    }

    fn display_name(&self) -> Option<&'static str> {
        SearchEngine::from_id(&self.active).map(|engine| engine.display_name(self.locale))
    }

    fn placeholder(&self) -> String {
        Self::placeholder_for(self.display_name(), self.locale)
    }

    fn build_url(&self, query: &str) -> String {
        self.engine().search_url(query)
    }

    fn list_engines(&self) -> Vec<EngineInfo> {
        SearchEngine::ALL
            .iter()
            .map(|engine| EngineInfo {
                id: engine.id().to_string(),
                display_name: engine.display_name(self.locale).to_string(),
                active: engine.id() == self.active,
            })
            .collect()
    }
}
