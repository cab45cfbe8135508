//! Start page RPC server: JSON-RPC over stdin/stdout for the page frontend.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"link.add", "params":{"name":"...","url":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//! Events queued by a request follow its response as {"event":"...", ...} lines.
//! A {"event":"clock","time":"HH:MM:SS"} line is written on every clock tick.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, BufReader};

use startpage::app::App;
use startpage::rpc_handler::handle_method;
use startpage::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

/// Writes one protocol line. Clock ticks and responses share stdout.
fn write_line(value: &Value) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if writeln!(out, "{}", value).and_then(|_| out.flush()).is_err() {
        log::error!("Failed to write to stdout");
    }
}

fn flush_events(app: &Mutex<App>) {
    let events = match app.lock() {
        Ok(mut a) => a.drain_events(),
        Err(e) => {
            log::error!("App lock poisoned: {}", e);
            return;
        }
    };
    for event in events {
        match serde_json::to_value(&event) {
            Ok(value) => write_line(&value),
            Err(e) => log::error!("Failed to serialize event: {}", e),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let mut settings_engine = SettingsEngine::new(std::env::var("STARTPAGE_CONFIG").ok());
    if let Err(e) = settings_engine.load() {
        log::warn!("Using default settings: {}", e);
    }
    let tick = Duration::from_millis(settings_engine.get_settings().clock.tick_interval_ms.max(1));

    let app = Arc::new(Mutex::new(App::open(&settings_engine)?));
    let clock = app.lock().map_err(|e| e.to_string())?.clock;

    write_line(&json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}));

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(tick);
        loop {
            ticker.tick().await;
            write_line(&json!({"event": "clock", "time": clock.now()}));
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                write_line(&json!({"id": null, "error": format!("parse error: {}", e)}));
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));
        log::debug!("RPC {}", method);

        let response = match handle_method(&app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        write_line(&response);
        flush_events(&app);
    }

    log::info!("stdin closed, shutting down");
    Ok(())
}
