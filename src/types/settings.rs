use serde::{Deserialize, Serialize};

/// Top-level start page settings container.
///
/// Sections missing from a settings file take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct StartPageSettings {
    pub general: GeneralSettings,
    pub storage: StorageSettings,
    pub history: HistorySettings,
    pub notices: NoticeSettings,
    pub clock: ClockSettings,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralSettings {
    pub language: Locale,
    pub default_search_engine: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            language: Locale::En,
            default_search_engine: "bing".to_string(),
        }
    }
}

/// Where the key-value database lives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StorageSettings {
    /// Overrides the platform data directory when set.
    pub database_path: Option<String>,
}

/// Recent-search history settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct HistorySettings {
    pub max_entries: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            max_entries: crate::managers::search_history_manager::MAX_HISTORY_ENTRIES,
        }
    }
}

/// Transient notice settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NoticeSettings {
    pub duration_ms: u64,
}

impl Default for NoticeSettings {
    fn default() -> Self {
        Self { duration_ms: 2000 }
    }
}

/// Live clock settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ClockSettings {
    /// Fixed offset from UTC. `None` shows the system's local time.
    pub utc_offset_minutes: Option<i32>,
    pub tick_interval_ms: u64,
}

impl Default for ClockSettings {
    fn default() -> Self {
        Self {
            utc_offset_minutes: None,
            tick_interval_ms: 1000,
        }
    }
}

/// Language used for notices, engine names and placeholder text.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "zh-CN")]
    ZhCn,
}

/// Light or dark page theme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Reads the persisted flag. Only the literal `"true"` means dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("true") => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// The persisted representation of the flag.
    pub fn as_stored(self) -> &'static str {
        if self.is_dark() {
            "true"
        } else {
            "false"
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// The icon shown on the toggle button: a sun switches back to light.
    pub fn icon(self) -> ThemeIcon {
        match self {
            ThemeMode::Light => ThemeIcon::Moon,
            ThemeMode::Dark => ThemeIcon::Sun,
        }
    }
}

/// Icon displayed on the theme toggle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeIcon {
    Moon,
    Sun,
}
