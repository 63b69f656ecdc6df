// tagmark platform paths for Windows
// Data: %APPDATA%/tagmark

use std::env;
use std::path::PathBuf;

/// Returns the data directory for tagmark on Windows.
/// `%APPDATA%/tagmark`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("tagmark")
}
