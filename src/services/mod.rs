// Start page services
// Services implement engine selection, query dispatch, theme, settings,
// the live clock and event delivery.

pub mod clock;
pub mod engine_selector;
pub mod notifier;
pub mod query_dispatcher;
pub mod settings_engine;
pub mod theme_engine;
