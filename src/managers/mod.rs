// Start page state managers
// Managers own persisted lists: shortcut links and recent searches.

pub mod link_manager;
pub mod search_history_manager;
