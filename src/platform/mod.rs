// Start page platform abstraction
// Resolves where settings and the key-value database live on each OS.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as imp;
#[cfg(target_os = "macos")]
use macos as imp;
#[cfg(target_os = "windows")]
use windows as imp;

/// Directory holding `settings.json`.
///
/// - **Linux**: `$XDG_CONFIG_HOME/startpage` or `~/.config/startpage`
/// - **macOS**: `~/Library/Application Support/StartPage`
/// - **Windows**: `%APPDATA%/StartPage`
pub fn get_config_dir() -> PathBuf {
    imp::get_config_dir()
}

/// Directory holding the key-value database.
///
/// - **Linux**: `$XDG_DATA_HOME/startpage` or `~/.local/share/startpage`
/// - **macOS**: `~/Library/Application Support/StartPage`
/// - **Windows**: `%APPDATA%/StartPage`
pub fn get_data_dir() -> PathBuf {
    imp::get_data_dir()
}
