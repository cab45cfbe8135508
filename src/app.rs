//! App Core for the start page.
//!
//! Owns every store, constructed once per session, and is the boundary the
//! presentation layer calls into. Each operation mutates one store, persists,
//! and queues the events the presentation layer needs to re-render.

use std::sync::Arc;

use crate::managers::link_manager::{self, LinkManager, LinkManagerTrait};
use crate::managers::search_history_manager::{SearchHistoryManager, SearchHistoryManagerTrait};
use crate::services::clock::Clock;
use crate::services::engine_selector::{EngineSelector, EngineSelectorTrait};
use crate::services::notifier::{EventQueue, EventSink, Notifier};
use crate::services::query_dispatcher::{self, SearchOutcome};
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::services::theme_engine::{ThemeEngine, ThemeEngineTrait};
use crate::storage::{SharedStore, SqliteStore};
use crate::types::errors::{HistoryError, LinkError, StorageError};
use crate::types::event::{EngineInfo, Notice, PageSnapshot, UiEvent};
use crate::types::link::{LinkFormTarget, ShortcutLink};
use crate::types::settings::{Locale, StartPageSettings, ThemeMode};

/// Central struct holding all stores and services.
pub struct App {
    pub settings: StartPageSettings,
    pub links: LinkManager,
    pub history: SearchHistoryManager,
    pub engines: EngineSelector,
    pub theme: ThemeEngine,
    pub clock: Clock,
    notifier: Notifier,
    events: EventQueue,
}

impl App {
    /// Opens the SQLite store at `db_path` with default settings.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let store: SharedStore = Arc::new(SqliteStore::open(db_path)?);
        Ok(Self::with_store(store, StartPageSettings::default())?)
    }

    /// Opens the database named by the loaded settings, creating its
    /// directory if needed.
    pub fn open(settings_engine: &SettingsEngine) -> Result<Self, Box<dyn std::error::Error>> {
        let db_path = settings_engine.database_path();
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let store: SharedStore = Arc::new(SqliteStore::open(&db_path)?);
        Ok(Self::with_store(store, settings_engine.get_settings().clone())?)
    }

    /// Builds the app on top of an existing store.
    pub fn with_store(store: SharedStore, settings: StartPageSettings) -> Result<Self, StorageError> {
        let locale = settings.general.language;
        let links = LinkManager::new(store.clone())?;
        let history = SearchHistoryManager::with_limit(store.clone(), settings.history.max_entries)?;
        let engines = EngineSelector::new(
            store.clone(),
            &settings.general.default_search_engine,
            locale,
        )?;
        let theme = ThemeEngine::new(store)?;

        log::info!(
            "Start page ready: {} links, {}/{} recent searches, engine '{}', {:?} theme",
            links.len(),
            history.entries().len(),
            history.max_entries(),
            engines.active_id(),
            theme.get_theme()
        );

        Ok(Self {
            clock: Clock::new(settings.clock.utc_offset_minutes),
            notifier: Notifier::new(locale, settings.notices.duration_ms),
            events: EventQueue::new(),
            settings,
            links,
            history,
            engines,
            theme,
        })
    }

    pub fn locale(&self) -> Locale {
        self.settings.general.language
    }

    /// Hands every queued event to the caller, oldest first.
    pub fn drain_events(&mut self) -> Vec<UiEvent> {
        self.events.drain()
    }

    fn notify(&mut self, notice: Notice) {
        self.notifier.notify(&mut self.events, notice);
    }

    fn emit_links(&mut self) {
        let links = self.links.list_links().to_vec();
        self.events.emit(UiEvent::LinksChanged { links });
    }

    fn emit_history(&mut self) {
        let entries = self.history.recent_first();
        self.events.emit(UiEvent::HistoryChanged { entries });
    }

    // ─── Links ───

    pub fn add_link(&mut self, name: &str, url: &str) -> Result<(), LinkError> {
        self.links.add_link(name, url)?;
        self.emit_links();
        self.notify(Notice::LinkAdded);
        Ok(())
    }

    /// Returns `false` when `index` is out of range; nothing is emitted then.
    pub fn update_link(&mut self, index: usize, name: &str, url: &str) -> Result<bool, LinkError> {
        let applied = self.links.update_link(index, name, url)?;
        if applied {
            self.emit_links();
            self.notify(Notice::LinkUpdated);
        }
        Ok(applied)
    }

    /// Returns `false` when `index` is out of range; nothing is emitted then.
    pub fn remove_link(&mut self, index: usize) -> Result<bool, LinkError> {
        let removed = self.links.remove_link(index)?;
        if removed.is_some() {
            self.emit_links();
            self.notify(Notice::LinkDeleted);
        }
        Ok(removed.is_some())
    }

    /// The link to prefill the edit form with.
    pub fn link_for_edit(&self, index: usize) -> Option<&ShortcutLink> {
        self.links.get_link(index)
    }

    /// Saves the add/edit form: trims both fields, requires them to be
    /// non-empty and prefixes `https://` to scheme-less URLs.
    ///
    /// Returns whether a link was added or replaced.
    pub fn save_link_form(
        &mut self,
        target: LinkFormTarget,
        name: &str,
        url: &str,
    ) -> Result<bool, LinkError> {
        let name = name.trim();
        let url = url.trim();
        if name.is_empty() {
            return Err(LinkError::EmptyName);
        }
        if url.is_empty() {
            return Err(LinkError::EmptyUrl);
        }
        let full_url = link_manager::normalize_url(url);

        match target {
            LinkFormTarget::Create => {
                self.add_link(name, &full_url)?;
                Ok(true)
            }
            LinkFormTarget::Edit(index) => self.update_link(index, name, &full_url),
        }
    }

    pub fn links(&self) -> &[ShortcutLink] {
        self.links.list_links()
    }

    // ─── Search ───

    /// Submits the search box. Returns the navigation URL, or `None` for
    /// blank input (a notice is queued instead).
    pub fn search(&mut self, raw: &str) -> Result<Option<String>, HistoryError> {
        let outcome = query_dispatcher::submit(raw, &self.engines, &mut self.history)?;
        match outcome {
            SearchOutcome::EmptyQuery => {
                self.notify(Notice::EmptyQuery);
                Ok(None)
            }
            SearchOutcome::Navigate(url) => {
                self.emit_history();
                self.events.emit(UiEvent::Navigate { url: url.clone() });
                Ok(Some(url))
            }
        }
    }

    /// Searches again with the history entry shown at `position`
    /// (most recent first). Out-of-range positions do nothing.
    pub fn search_history_entry(&mut self, position: usize) -> Result<Option<String>, HistoryError> {
        let query = match self.history.get_recent(position) {
            Some(query) => query.to_string(),
            None => return Ok(None),
        };
        self.search(&query)
    }

    pub fn clear_history(&mut self) -> Result<(), HistoryError> {
        self.history.clear()?;
        self.emit_history();
        self.notify(Notice::HistoryCleared);
        Ok(())
    }

    /// Recent searches, most recent first.
    pub fn history(&self) -> Vec<String> {
        self.history.recent_first()
    }

    // ─── Engine ───

    pub fn set_search_engine(&mut self, id: &str) -> Result<(), StorageError> {
        let selection = self.engines.select(id)?;
        self.events.emit(UiEvent::EngineChanged {
            engine: selection.id.clone(),
            placeholder: selection.placeholder,
        });
        self.notify(Notice::EngineSwitched {
            engine: selection.id,
            display_name: selection.display_name,
        });
        Ok(())
    }

    pub fn active_engine(&self) -> &str {
        self.engines.active_id()
    }

    pub fn engine_list(&self) -> Vec<EngineInfo> {
        self.engines.list_engines()
    }

    // ─── Theme ───

    pub fn toggle_theme(&mut self) -> Result<ThemeMode, StorageError> {
        let mode = self.theme.toggle()?;
        self.events.emit(UiEvent::ThemeChanged {
            mode,
            icon: mode.icon(),
        });
        Ok(mode)
    }

    pub fn is_dark_mode(&self) -> bool {
        self.theme.is_dark_mode()
    }

    // ─── Snapshot ───

    /// Everything the presentation layer needs for a full render.
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            links: self.links().to_vec(),
            history: self.history(),
            engines: self.engine_list(),
            active_engine: self.active_engine().to_string(),
            placeholder: self.engines.placeholder(),
            theme: self.theme.get_theme(),
            theme_icon: self.theme.icon(),
            clock: self.clock.now(),
        }
    }
}
