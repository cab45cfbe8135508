//! Start page console demo.
//!
//! Drives every component against an in-memory store and prints the events the
//! presentation layer would receive. The real frontend talks to `startpage-rpc`.

use std::sync::Arc;

use startpage::app::App;
use startpage::storage::{MemoryStore, SharedStore};
use startpage::types::event::UiEvent;
use startpage::types::link::LinkFormTarget;
use startpage::types::settings::StartPageSettings;

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn print_events(app: &mut App) {
    for event in app.drain_events() {
        match event {
            UiEvent::Notice { message, .. } => println!("  [notice] {}", message),
            UiEvent::LinksChanged { links } => {
                if links.is_empty() {
                    println!("  [links] (no shortcuts yet)");
                }
                for (i, link) in links.iter().enumerate() {
                    println!("  [links] {}. {} -> {}", i, link.name, link.url);
                }
            }
            UiEvent::HistoryChanged { entries } => {
                println!("  [history] {}", entries.join(" | "))
            }
            UiEvent::EngineChanged { engine, placeholder } => {
                println!("  [engine] {} (\"{}\")", engine, placeholder)
            }
            UiEvent::ThemeChanged { mode, icon } => {
                println!("  [theme] {:?}, icon {:?}", mode, icon)
            }
            UiEvent::Navigate { url } => println!("  [navigate] {}", url),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let store: SharedStore = Arc::new(MemoryStore::new());
    let mut app = App::with_store(store, StartPageSettings::default())?;

    println!();
    println!("  StartPage v{} (demo mode)", env!("CARGO_PKG_VERSION"));
    println!("  Time: {}", app.clock.now());
    println!();

    section("Shortcut links");
    app.save_link_form(LinkFormTarget::Create, "Rust", "www.rust-lang.org")?;
    app.save_link_form(LinkFormTarget::Create, "Crates", "https://crates.io")?;
    app.save_link_form(LinkFormTarget::Edit(1), "crates.io", "crates.io")?;
    app.remove_link(0)?;
    print_events(&mut app);
    println!();

    section("Search engines");
    app.set_search_engine("google")?;
    app.set_search_engine("altavista")?;
    app.set_search_engine("duckduckgo")?;
    print_events(&mut app);
    println!();

    section("Search");
    app.search("   ")?;
    for query in ["rust", "c++ vs rust", "tokio", "serde", "rust"] {
        app.search(query)?;
    }
    print_events(&mut app);
    app.clear_history()?;
    print_events(&mut app);
    println!();

    section("Theme");
    app.toggle_theme()?;
    app.toggle_theme()?;
    print_events(&mut app);
    println!();

    Ok(())
}
