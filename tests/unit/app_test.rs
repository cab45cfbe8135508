//! Unit tests for the App core: each operation's persistence and the events
//! it queues for the presentation layer.

use std::sync::Arc;

use startpage::app::App;
use startpage::services::clock::Clock;
use startpage::storage::{
    KeyValueStore, MemoryStore, SharedStore, CUSTOM_LINKS_KEY, DARK_MODE_KEY, SEARCH_ENGINE_KEY,
    SEARCH_HISTORY_KEY,
};
use startpage::types::errors::LinkError;
use startpage::types::event::{Notice, UiEvent};
use startpage::types::link::{LinkFormTarget, ShortcutLink};
use startpage::types::settings::{Locale, StartPageSettings, ThemeIcon, ThemeMode};

fn setup() -> (SharedStore, App) {
    let store: SharedStore = Arc::new(MemoryStore::new());
    let app = App::with_store(store.clone(), StartPageSettings::default()).unwrap();
    (store, app)
}

fn notices(events: &[UiEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            UiEvent::Notice { message, .. } => Some(message.clone()),
            _ => None,
        })
        .collect()
}

// ─── Links ───

#[test]
fn test_form_adds_normalized_link() {
    let (store, mut app) = setup();
    let added = app
        .save_link_form(LinkFormTarget::Create, "  Rust ", " www.rust-lang.org ")
        .unwrap();

    assert!(added);
    assert_eq!(
        app.links(),
        &[ShortcutLink::new("Rust", "https://www.rust-lang.org")]
    );
    assert!(store.get(CUSTOM_LINKS_KEY).unwrap().is_some());

    let events = app.drain_events();
    assert_eq!(events.len(), 2);
    assert!(matches!(&events[0], UiEvent::LinksChanged { links } if links.len() == 1));
    assert_eq!(notices(&events), vec!["Link added".to_string()]);
}

#[test]
fn test_form_keeps_existing_scheme() {
    let (_store, mut app) = setup();
    app.save_link_form(LinkFormTarget::Create, "A", "HTTP://example.com")
        .unwrap();
    app.save_link_form(LinkFormTarget::Create, "B", "http://example.org")
        .unwrap();
    app.save_link_form(LinkFormTarget::Create, "C", "ftp://example.net")
        .unwrap();

    let urls: Vec<&str> = app.links().iter().map(|l| l.url.as_str()).collect();
    assert_eq!(
        urls,
        vec![
            "HTTP://example.com",
            "http://example.org",
            "https://ftp://example.net"
        ]
    );
}

#[test]
fn test_form_rejects_blank_fields() {
    let (_store, mut app) = setup();

    let err = app
        .save_link_form(LinkFormTarget::Create, "   ", "example.com")
        .unwrap_err();
    assert!(matches!(err, LinkError::EmptyName));

    let err = app
        .save_link_form(LinkFormTarget::Create, "Example", "  ")
        .unwrap_err();
    assert!(matches!(err, LinkError::EmptyUrl));

    assert!(app.links().is_empty());
    assert!(app.drain_events().is_empty());
}

#[test]
fn test_form_edits_existing_link() {
    let (_store, mut app) = setup();
    app.save_link_form(LinkFormTarget::Create, "Old", "old.example")
        .unwrap();
    app.drain_events();

    let prefill = app.link_for_edit(0).cloned().unwrap();
    assert_eq!(prefill.name, "Old");

    let applied = app
        .save_link_form(LinkFormTarget::Edit(0), "New", "new.example")
        .unwrap();
    assert!(applied);
    assert_eq!(app.links(), &[ShortcutLink::new("New", "https://new.example")]);
    assert_eq!(notices(&app.drain_events()), vec!["Link updated".to_string()]);
}

#[test]
fn test_edit_out_of_range_is_silent() {
    let (_store, mut app) = setup();
    let applied = app
        .save_link_form(LinkFormTarget::Edit(3), "X", "x.example")
        .unwrap();
    assert!(!applied);
    assert!(app.links().is_empty());
    assert!(app.drain_events().is_empty());
}

#[test]
fn test_remove_link() {
    let (_store, mut app) = setup();
    app.add_link("A", "https://a.example").unwrap();
    app.add_link("B", "https://b.example").unwrap();
    app.drain_events();

    assert!(app.remove_link(0).unwrap());
    assert_eq!(app.links(), &[ShortcutLink::new("B", "https://b.example")]);
    assert_eq!(notices(&app.drain_events()), vec!["Link deleted".to_string()]);

    assert!(!app.remove_link(9).unwrap());
    assert!(app.drain_events().is_empty());
}

// ─── Search ───

#[test]
fn test_search_records_and_navigates() {
    let (store, mut app) = setup();
    let url = app.search("  rust ").unwrap();
    assert_eq!(url.as_deref(), Some("https://cn.bing.com/search?q=rust"));
    assert_eq!(app.history(), vec!["rust".to_string()]);
    assert!(store.get(SEARCH_HISTORY_KEY).unwrap().is_some());

    let events = app.drain_events();
    assert_eq!(
        events,
        vec![
            UiEvent::HistoryChanged {
                entries: vec!["rust".to_string()]
            },
            UiEvent::Navigate {
                url: "https://cn.bing.com/search?q=rust".to_string()
            },
        ]
    );
}

#[test]
fn test_blank_search_shows_notice() {
    let (store, mut app) = setup();
    assert_eq!(app.search("   ").unwrap(), None);
    assert!(app.history().is_empty());
    assert_eq!(store.get(SEARCH_HISTORY_KEY).unwrap(), None);

    let events = app.drain_events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        UiEvent::Notice {
            notice,
            message,
            duration_ms,
        } => {
            assert_eq!(notice, &Notice::EmptyQuery);
            assert_eq!(message, "Please enter a search query");
            assert_eq!(*duration_ms, 2000);
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn test_history_keeps_five_most_recent() {
    let (_store, mut app) = setup();
    for q in ["a", "b", "c", "d", "e", "f"] {
        app.search(q).unwrap();
    }
    assert_eq!(
        app.history(),
        vec!["f", "e", "d", "c", "b"]
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>()
    );
}

#[test]
fn test_select_history_entry_searches_again() {
    let (_store, mut app) = setup();
    app.search("first").unwrap();
    app.search("second").unwrap();

    let url = app.search_history_entry(1).unwrap();
    assert_eq!(url.as_deref(), Some("https://cn.bing.com/search?q=first"));
    assert_eq!(app.history()[0], "first");

    assert_eq!(app.search_history_entry(10).unwrap(), None);
}

#[test]
fn test_clear_history_removes_key() {
    let (store, mut app) = setup();
    app.search("rust").unwrap();
    app.drain_events();

    app.clear_history().unwrap();
    assert!(app.history().is_empty());
    assert_eq!(store.get(SEARCH_HISTORY_KEY).unwrap(), None);

    let events = app.drain_events();
    assert_eq!(events[0], UiEvent::HistoryChanged { entries: vec![] });
    assert_eq!(notices(&events), vec!["Search history cleared".to_string()]);
}

// ─── Engine ───

#[test]
fn test_switch_engine_updates_placeholder() {
    let (store, mut app) = setup();
    app.set_search_engine("github").unwrap();

    assert_eq!(app.active_engine(), "github");
    assert_eq!(
        store.get(SEARCH_ENGINE_KEY).unwrap().as_deref(),
        Some("github")
    );
    let events = app.drain_events();
    assert_eq!(
        events[0],
        UiEvent::EngineChanged {
            engine: "github".to_string(),
            placeholder: "Search with GitHub...".to_string()
        }
    );
    assert_eq!(notices(&events), vec!["Switched to GitHub search".to_string()]);
}

#[test]
fn test_unknown_engine_notice() {
    let (_store, mut app) = setup();
    app.set_search_engine("altavista").unwrap();
    assert_eq!(
        notices(&app.drain_events()),
        vec!["Switched to unknown engine search".to_string()]
    );
    assert_eq!(
        app.search("x").unwrap().as_deref(),
        Some("https://cn.bing.com/search?q=x")
    );
}

#[test]
fn test_chinese_notices() {
    let store: SharedStore = Arc::new(MemoryStore::new());
    let mut settings = StartPageSettings::default();
    settings.general.language = Locale::ZhCn;
    let mut app = App::with_store(store, settings).unwrap();

    app.set_search_engine("baidu").unwrap();
    app.set_search_engine("nope").unwrap();
    app.search("").unwrap();
    assert_eq!(
        notices(&app.drain_events()),
        vec![
            "已切换到百度搜索".to_string(),
            "已切换到未知引擎搜索".to_string(),
            "请输入搜索内容".to_string(),
        ]
    );
}

// ─── Theme ───

#[test]
fn test_toggle_theme_emits_icon() {
    let (store, mut app) = setup();
    assert_eq!(app.toggle_theme().unwrap(), ThemeMode::Dark);
    assert!(app.is_dark_mode());
    assert_eq!(store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("true"));
    assert_eq!(
        app.drain_events(),
        vec![UiEvent::ThemeChanged {
            mode: ThemeMode::Dark,
            icon: ThemeIcon::Sun
        }]
    );
}

// ─── Startup ───

#[test]
fn test_state_restored_from_store() {
    let (store, mut app) = setup();
    app.add_link("Docs", "https://docs.rs").unwrap();
    app.search("serde").unwrap();
    app.set_search_engine("duckduckgo").unwrap();
    app.toggle_theme().unwrap();
    drop(app);

    let app = App::with_store(store, StartPageSettings::default()).unwrap();
    let snapshot = app.snapshot();
    assert_eq!(snapshot.links, vec![ShortcutLink::new("Docs", "https://docs.rs")]);
    assert_eq!(snapshot.history, vec!["serde".to_string()]);
    assert_eq!(snapshot.active_engine, "duckduckgo");
    assert_eq!(snapshot.placeholder, "Search with DuckDuckGo...");
    assert_eq!(snapshot.theme, ThemeMode::Dark);
    assert_eq!(snapshot.theme_icon, ThemeIcon::Sun);
    assert_eq!(snapshot.clock.len(), 8);
}

#[test]
fn test_corrupted_values_load_empty() {
    let store: SharedStore = Arc::new(MemoryStore::new());
    store.set(CUSTOM_LINKS_KEY, "{not json").unwrap();
    store.set(SEARCH_HISTORY_KEY, "null").unwrap();

    let app = App::with_store(store, StartPageSettings::default()).unwrap();
    assert!(app.links().is_empty());
    assert!(app.history().is_empty());
}

#[test]
fn test_clock_uses_local_time_unless_offset_configured() {
    let (_store, app) = setup();
    assert_eq!(app.clock, Clock::default());

    let mut settings = StartPageSettings::default();
    settings.clock.utc_offset_minutes = Some(480);
    let app = App::with_store(Arc::new(MemoryStore::new()), settings).unwrap();
    assert_eq!(app.clock, Clock::new(Some(480)));
}
