use serde::Serialize;

use super::link::ShortcutLink;
use super::settings::{Locale, ThemeIcon, ThemeMode};

/// Transient status messages shown to the user.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    EmptyQuery,
    LinkAdded,
    LinkUpdated,
    LinkDeleted,
    HistoryCleared,
    EngineSwitched {
        engine: String,
        /// `None` when the id is not one of the known engines.
        display_name: Option<String>,
    },
}

impl Notice {
    pub fn message(&self, locale: Locale) -> String {
        match (self, locale) {
            (Notice::EmptyQuery, Locale::En) => "Please enter a search query".to_string(),
            (Notice::EmptyQuery, Locale::ZhCn) => "请输入搜索内容".to_string(),
            (Notice::LinkAdded, Locale::En) => "Link added".to_string(),
            (Notice::LinkAdded, Locale::ZhCn) => "链接已添加".to_string(),
            (Notice::LinkUpdated, Locale::En) => "Link updated".to_string(),
            (Notice::LinkUpdated, Locale::ZhCn) => "链接已更新".to_string(),
            (Notice::LinkDeleted, Locale::En) => "Link deleted".to_string(),
            (Notice::LinkDeleted, Locale::ZhCn) => "链接已删除".to_string(),
            (Notice::HistoryCleared, Locale::En) => "Search history cleared".to_string(),
            (Notice::HistoryCleared, Locale::ZhCn) => "搜索历史已清空".to_string(),
            (Notice::EngineSwitched { display_name, .. }, Locale::En) => format!(
                "Switched to {} search",
                display_name.as_deref().unwrap_or("unknown engine")
            ),
            (Notice::EngineSwitched { display_name, .. }, Locale::ZhCn) => format!(
                "已切换到{}搜索",
                display_name.as_deref().unwrap_or("未知引擎")
            ),
        }
    }
}

/// Everything the core asks the presentation layer to do.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    Notice {
        notice: Notice,
        message: String,
        duration_ms: u64,
    },
    LinksChanged {
        links: Vec<ShortcutLink>,
    },
    /// History in display order, most recent first.
    HistoryChanged {
        entries: Vec<String>,
    },
    EngineChanged {
        engine: String,
        placeholder: String,
    },
    ThemeChanged {
        mode: ThemeMode,
        icon: ThemeIcon,
    },
    Navigate {
        url: String,
    },
}

/// One entry of the engine picker.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EngineInfo {
    pub id: String,
    pub display_name: String,
    pub active: bool,
}

/// Full state pulled by the presentation layer on first render.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PageSnapshot {
    pub links: Vec<ShortcutLink>,
    pub history: Vec<String>,
    pub engines: Vec<EngineInfo>,
    pub active_engine: String,
    pub placeholder: String,
    pub theme: ThemeMode,
    pub theme_icon: ThemeIcon,
    pub clock: String,
}
