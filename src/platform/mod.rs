// tagmark platform abstraction
// Provides the platform-specific data directory for the bookmark file.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific data directory for tagmark.
///
/// - **Linux**: `~/.local/share/tagmark` (or `$XDG_DATA_HOME/tagmark`)
/// - **macOS**: `~/Library/Application Support/tagmark`
/// - **Windows**: `%APPDATA%/tagmark`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Default path of the bookmark data file: `<data-dir>/data.json`.
pub fn default_data_file() -> PathBuf {
    get_data_dir().join("data.json")
}
