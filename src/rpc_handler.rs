//! RPC method handler for the start page JSON-RPC protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches calls to the `App`; events queued by a call are
//! collected separately with `App::drain_events`.

use std::sync::Mutex;

use serde_json::{json, Value};

use crate::app::App;
use crate::types::link::LinkFormTarget;

fn str_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, String> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("missing {}", name))
}

fn index_param(params: &Value, name: &str) -> Result<usize, String> {
    params
        .get(name)
        .and_then(|v| v.as_u64())
        .map(|n| n as usize)
        .ok_or_else(|| format!("missing {}", name))
}

/// Dispatch a JSON-RPC method call.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub fn handle_method(app: &Mutex<App>, method: &str, params: &Value) -> Result<Value, String> {
    match method {
        "ping" => Ok(json!({"pong": true})),

        "page.snapshot" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            serde_json::to_value(a.snapshot()).map_err(|e| e.to_string())
        }

        // ─── Links ───
        "link.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"items": a.links()}))
        }
        "link.get" => {
            let index = index_param(params, "index")?;
            let a = app.lock().map_err(|e| e.to_string())?;
            match a.link_for_edit(index) {
                Some(link) => Ok(json!({"index": index, "name": link.name, "url": link.url})),
                None => Ok(Value::Null),
            }
        }
        "link.add" => {
            let name = str_param(params, "name")?;
            let url = str_param(params, "url")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.save_link_form(LinkFormTarget::Create, name, url)
                .map_err(|e| e.to_string())?;
            let added = a.links().last().cloned();
            Ok(json!({"ok": true, "link": added}))
        }
        "link.update" => {
            let index = index_param(params, "index")?;
            let name = str_param(params, "name")?;
            let url = str_param(params, "url")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let applied = a
                .save_link_form(LinkFormTarget::Edit(index), name, url)
                .map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "applied": applied}))
        }
        "link.remove" => {
            let index = index_param(params, "index")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let removed = a.remove_link(index).map_err(|e| e.to_string())?;
            Ok(json!({"ok": true, "applied": removed}))
        }

        // ─── History ───
        "history.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"items": a.history()}))
        }
        "history.clear" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.clear_history().map_err(|e| e.to_string())?;
            Ok(json!({"ok": true}))
        }
        "history.select" => {
            let position = index_param(params, "position")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let url = a.search_history_entry(position).map_err(|e| e.to_string())?;
            Ok(json!({"navigate": url}))
        }

        // ─── Search ───
        "search" => {
            let query = str_param(params, "query")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let url = a.search(query).map_err(|e| e.to_string())?;
            Ok(json!({"navigate": url}))
        }

        // ─── Engines ───
        "engine.list" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"items": a.engine_list()}))
        }
        "engine.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"id": a.active_engine()}))
        }
        "engine.set" => {
            let id = str_param(params, "id")?;
            let mut a = app.lock().map_err(|e| e.to_string())?;
            a.set_search_engine(id).map_err(|e| e.to_string())?;
            Ok(json!({"id": a.active_engine()}))
        }

        // ─── Theme ───
        "theme.get" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"dark": a.is_dark_mode()}))
        }
        "theme.toggle" => {
            let mut a = app.lock().map_err(|e| e.to_string())?;
            let mode = a.toggle_theme().map_err(|e| e.to_string())?;
            Ok(json!({"dark": mode.is_dark(), "icon": mode.icon()}))
        }

        // ─── Clock ───
        "clock.now" => {
            let a = app.lock().map_err(|e| e.to_string())?;
            Ok(json!({"time": a.clock.now()}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
