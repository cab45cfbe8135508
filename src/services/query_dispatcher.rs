//! Query Dispatcher: turns the search box contents into a navigation target.

use crate::managers::search_history_manager::SearchHistoryManagerTrait;
use crate::services::engine_selector::EngineSelectorTrait;
use crate::types::errors::HistoryError;

/// What a submission resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Input was blank; nothing was recorded.
    EmptyQuery,
    /// The query was recorded and the page should navigate here.
    Navigate(String),
}

impl SearchOutcome {
    pub fn url(&self) -> Option<&str> {
        match self {
            SearchOutcome::Navigate(url) => Some(url),
            SearchOutcome::EmptyQuery => None,
        }
    }
}

/// Trims `raw`, records it in `history` and builds the URL for the active engine.
///
/// Blank input returns [`SearchOutcome::EmptyQuery`] with no side effects.
pub fn submit<E, H>(raw: &str, engines: &E, history: &mut H) -> Result<SearchOutcome, HistoryError>
where
    E: EngineSelectorTrait + ?Sized,
    H: SearchHistoryManagerTrait + ?Sized,
{
    let query = raw.trim();
    if query.is_empty() {
        log::debug!("Ignoring blank search submission");
        return Ok(SearchOutcome::EmptyQuery);
    }

    history.record(query)?;
    let url = engines.build_url(query);
    log::info!("Dispatching search via '{}'", engines.active_id());
    Ok(SearchOutcome::Navigate(url))
}
