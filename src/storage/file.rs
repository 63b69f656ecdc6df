//! File primitives for the bookmark data file.
//!
//! Every operation is fallible and reports failures as [`FileSystemError`]
//! with the underlying I/O error attached; nothing here panics or retries.
//! Writes are atomic: content goes to a temp file in the same directory and
//! is renamed over the target, so a crashed write leaves the previous
//! content intact rather than a truncated file.

use std::path::{Path, PathBuf};
use tokio::fs;

use crate::types::errors::FileSystemError;

/// Initial content for a freshly created data file: an empty collection.
const EMPTY_COLLECTION: &str = "[]";

/// Ensures the data file exists, creating parent directories and writing an
/// empty JSON array if it is absent. Existing content is never altered.
/// Idempotent.
pub async fn ensure_exists(path: &Path) -> Result<(), FileSystemError> {
    match fs::try_exists(path).await {
        Ok(true) => Ok(()),
        Ok(false) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| FileSystemError::new(parent, e))?;
            }
            write_all(path, EMPTY_COLLECTION).await
        }
        Err(e) => Err(FileSystemError::new(path, e)),
    }
}

/// Reads the entire file as UTF-8 text.
pub async fn read_all(path: &Path) -> Result<String, FileSystemError> {
    fs::read_to_string(path)
        .await
        .map_err(|e| FileSystemError::new(path, e))
}

/// Replaces the entire file content atomically (write temp, then rename).
pub async fn write_all(path: &Path, contents: &str) -> Result<(), FileSystemError> {
    let tmp = temp_path(path);
    fs::write(&tmp, contents)
        .await
        .map_err(|e| FileSystemError::new(&tmp, e))?;
    fs::rename(&tmp, path)
        .await
        .map_err(|e| FileSystemError::new(path, e))
}

/// Sibling temp path for the atomic-replace write. Same directory as the
/// target so the rename never crosses a filesystem boundary.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
