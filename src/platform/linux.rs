// tagmark platform paths for Linux
// Data: ~/.local/share/tagmark

use std::env;
use std::path::PathBuf;

/// Returns the data directory for tagmark on Linux.
/// Uses `$XDG_DATA_HOME/tagmark` if set, otherwise `~/.local/share/tagmark`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("tagmark")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("tagmark")
    }
}
