//! Theme Engine: the persisted light/dark preference.

use crate::storage::{SharedStore, DARK_MODE_KEY};
use crate::types::errors::StorageError;
use crate::types::settings::{ThemeIcon, ThemeMode};

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn toggle(&mut self) -> Result<ThemeMode, StorageError>;
    fn get_theme(&self) -> ThemeMode;
    fn is_dark_mode(&self) -> bool;
    fn icon(&self) -> ThemeIcon;
    /// CSS class applied to the page body, if any.
    fn body_class(&self) -> Option<&'static str>;
}

pub struct ThemeEngine {
    store: SharedStore,
    current_theme: ThemeMode,
}

impl ThemeEngine {
    /// Reads the stored flag once. A missing flag means light mode.
    pub fn new(store: SharedStore) -> Result<Self, StorageError> {
        let current_theme = ThemeMode::from_stored(store.get(DARK_MODE_KEY)?.as_deref());
        Ok(Self {
            store,
            current_theme,
        })
    }
}

impl ThemeEngineTrait for ThemeEngine {
    /// Flips the mode and persists it as `"true"`/`"false"`.
    fn toggle(&mut self) -> Result<ThemeMode, StorageError> {
        let next = self.current_theme.toggled();
        self.store.set(DARK_MODE_KEY, next.as_stored())?;
        self.current_theme = next;
        log::info!("Theme switched to {:?}", next);
        Ok(next)
    }

    fn get_theme(&self) -> ThemeMode {
        self.current_theme
    }

    fn is_dark_mode(&self) -> bool {
        self.current_theme.is_dark()
    }

    fn icon(&self) -> ThemeIcon {
        self.current_theme.icon()
    }

    fn body_class(&self) -> Option<&'static str> {
        if self.is_dark_mode() {
            Some("dark-mode")
        } else {
            None
        }
    }
}
