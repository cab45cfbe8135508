use serde::{Deserialize, Serialize};

use super::settings::Locale;

/// The fixed set of search providers a query can be sent to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SearchEngine {
    Bing,
    Baidu,
    Google,
    #[serde(rename = "duckduckgo")]
    DuckDuckGo,
    #[serde(rename = "github")]
    GitHub,
}

impl SearchEngine {
    /// All engines in the order the selector shows them.
    pub const ALL: [SearchEngine; 5] = [
        SearchEngine::Bing,
        SearchEngine::Baidu,
        SearchEngine::Google,
        SearchEngine::DuckDuckGo,
        SearchEngine::GitHub,
    ];

    /// Looks up an engine by its exact id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|engine| engine.id() == id)
    }

    /// Resolves an id for URL building. Unrecognized ids use Bing.
    pub fn resolve(id: &str) -> Self {
        Self::from_id(id).unwrap_or_default()
    }

    pub fn id(self) -> &'static str {
        match self {
            SearchEngine::Bing => "bing",
            SearchEngine::Baidu => "baidu",
            SearchEngine::Google => "google",
            SearchEngine::DuckDuckGo => "duckduckgo",
            SearchEngine::GitHub => "github",
        }
    }

    pub fn display_name(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (SearchEngine::Bing, Locale::ZhCn) => "必应",
            (SearchEngine::Bing, Locale::En) => "Bing",
            (SearchEngine::Baidu, Locale::ZhCn) => "百度",
            (SearchEngine::Baidu, Locale::En) => "Baidu",
            (SearchEngine::Google, _) => "Google",
            (SearchEngine::DuckDuckGo, _) => "DuckDuckGo",
            (SearchEngine::GitHub, _) => "GitHub",
        }
    }

    /// The URL prefix the percent-encoded query is appended to.
    pub fn url_prefix(self) -> &'static str {
        match self {
            SearchEngine::Bing => "https://cn.bing.com/search?q=",
            SearchEngine::Baidu => "https://www.baidu.com/s?wd=",
            SearchEngine::Google => "https://www.google.com/search?q=",
            SearchEngine::DuckDuckGo => "https://duckduckgo.com/?q=",
            SearchEngine::GitHub => "https://github.com/search?q=",
        }
    }

    /// Builds the destination URL for a raw (unencoded) query.
    pub fn search_url(self, query: &str) -> String {
        format!("{}{}", self.url_prefix(), urlencoding::encode(query))
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine::Bing
    }
}
