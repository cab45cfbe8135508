//! StartPage, the core of a minimal browser start page.
//!
//! Search engine selection, a short recent-search history, personal shortcut
//! links and a light/dark preference, all persisted in a key-value store.
//! This library crate exposes all modules for use by the binaries and
//! integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod platform;
pub mod rpc_handler;
pub mod services;
pub mod storage;
pub mod types;
