//! Integration-level unit tests for the SettingsEngine public API.
//!
//! Exercises default loading, value persistence, reset behavior and the
//! database path resolution the binaries rely on.

use std::fs;

use startpage::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use startpage::types::settings::{Locale, StartPageSettings};
use tempfile::TempDir;

/// Helper: create a SettingsEngine backed by a temp directory that lives for the
/// duration of the test (the caller holds the `TempDir` handle).
fn engine_in_temp(dir: &TempDir) -> SettingsEngine {
    let path = dir
        .path()
        .join("settings.json")
        .to_string_lossy()
        .to_string();
    SettingsEngine::new(Some(path))
}

#[test]
fn test_load_defaults_when_no_config_file_exists() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);

    let settings = engine.load().unwrap();

    assert_eq!(settings, StartPageSettings::default());
    assert_eq!(settings.general.language, Locale::En);
    assert_eq!(settings.general.default_search_engine, "bing");
    assert_eq!(settings.history.max_entries, 5);
    assert_eq!(settings.notices.duration_ms, 2000);
    assert_eq!(settings.clock.tick_interval_ms, 1000);
    assert_eq!(settings.clock.utc_offset_minutes, None);
    assert!(settings.storage.database_path.is_none());
}

#[test]
fn test_set_value_persists_changes() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("general.default_search_engine", serde_json::json!("google"))
            .unwrap();
    }

    let mut engine2 = engine_in_temp(&dir);
    let loaded = engine2.load().unwrap();
    assert_eq!(
        loaded.general.default_search_engine, "google",
        "set_value must persist the change so a new engine instance reads it back"
    );
}

#[test]
fn test_reset_restores_defaults() {
    let dir = TempDir::new().unwrap();

    {
        let mut engine = engine_in_temp(&dir);
        engine.load().unwrap();
        engine
            .set_value("history.max_entries", serde_json::json!(8))
            .unwrap();
        assert_eq!(engine.get_settings().history.max_entries, 8);

        engine.reset().unwrap();
        assert_eq!(*engine.get_settings(), StartPageSettings::default());
    }

    let mut engine2 = engine_in_temp(&dir);
    assert_eq!(engine2.load().unwrap(), StartPageSettings::default());
}

#[test]
fn test_set_value_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    assert!(engine
        .set_value("general.homepage", serde_json::json!("about:blank"))
        .is_err());
    assert!(engine.set_value("", serde_json::json!(true)).is_err());
}

#[test]
fn test_set_value_rejects_wrong_type() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    let result = engine.set_value("notices.duration_ms", serde_json::json!("soon"));
    assert!(result.is_err());
    assert_eq!(engine.get_settings().notices.duration_ms, 2000);
}

#[test]
fn test_set_value_rejects_unknown_language() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    assert!(engine
        .set_value("general.language", serde_json::json!("ru"))
        .is_err());
}

#[test]
fn test_load_malformed_json_is_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("settings.json"), "{ invalid json }").unwrap();

    let mut engine = engine_in_temp(&dir);
    assert!(engine.load().is_err());
}

#[test]
fn test_partial_file_fills_missing_sections() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("settings.json"),
        r#"{"general": {"language": "zh-CN", "default_search_engine": "baidu"}}"#,
    )
    .unwrap();

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    assert_eq!(settings.general.language, Locale::ZhCn);
    assert_eq!(settings.general.default_search_engine, "baidu");
    assert_eq!(settings.history.max_entries, 5);
}

#[test]
fn test_partial_section_keeps_its_other_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("settings.json"),
        r#"{"general": {"language": "zh-CN"}, "clock": {"tick_interval_ms": 500}, "history": {"max_entries": 3}}"#,
    )
    .unwrap();

    let mut engine = engine_in_temp(&dir);
    let settings = engine.load().unwrap();
    assert_eq!(settings.general.language, Locale::ZhCn);
    assert_eq!(settings.general.default_search_engine, "bing");
    assert_eq!(settings.clock.tick_interval_ms, 500);
    assert_eq!(settings.clock.utc_offset_minutes, None);
    assert_eq!(settings.history.max_entries, 3);
    assert_eq!(settings.notices.duration_ms, 2000);
}

#[test]
fn test_clock_offset_accepts_null() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    engine
        .set_value("clock.utc_offset_minutes", serde_json::json!(-300))
        .unwrap();
    assert_eq!(engine.get_settings().clock.utc_offset_minutes, Some(-300));

    engine
        .set_value("clock.utc_offset_minutes", serde_json::Value::Null)
        .unwrap();
    assert_eq!(engine.get_settings().clock.utc_offset_minutes, None);
}

#[test]
fn test_database_path_defaults_to_startpage_db() {
    let dir = TempDir::new().unwrap();
    let mut engine = engine_in_temp(&dir);
    engine.load().unwrap();

    let path = engine.database_path();
    assert_eq!(path.file_name().unwrap(), "startpage.db");
}
