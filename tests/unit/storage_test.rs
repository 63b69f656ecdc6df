//! Unit tests for the file storage primitives: ensure_exists, read_all,
//! write_all, and the atomic-replace guarantee.

use std::path::PathBuf;

use tagmark::storage;

fn temp_file_path(name: &str) -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join(name);
    (dir, path)
}

#[tokio::test]
async fn test_ensure_exists_creates_file_with_empty_collection() {
    let (_dir, path) = temp_file_path("data.json");

    storage::ensure_exists(&path).await.unwrap();

    let content = storage::read_all(&path).await.unwrap();
    assert_eq!(content, "[]");
}

#[tokio::test]
async fn test_ensure_exists_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("data.json");

    storage::ensure_exists(&path).await.unwrap();

    assert_eq!(storage::read_all(&path).await.unwrap(), "[]");
}

#[tokio::test]
async fn test_ensure_exists_leaves_existing_content_untouched() {
    let (_dir, path) = temp_file_path("data.json");
    storage::write_all(&path, r#"[{"existing":true}]"#).await.unwrap();

    storage::ensure_exists(&path).await.unwrap();

    let content = storage::read_all(&path).await.unwrap();
    assert_eq!(content, r#"[{"existing":true}]"#);
}

#[tokio::test]
async fn test_ensure_exists_is_idempotent() {
    let (_dir, path) = temp_file_path("data.json");

    storage::ensure_exists(&path).await.unwrap();
    storage::ensure_exists(&path).await.unwrap();

    assert_eq!(storage::read_all(&path).await.unwrap(), "[]");
}

#[tokio::test]
async fn test_read_all_missing_file_fails_with_cause() {
    let (_dir, path) = temp_file_path("absent.json");

    let error = storage::read_all(&path).await.expect_err("file is absent");
    let message = error.to_string();
    assert!(message.contains("absent.json"), "{}", message);
    assert!(std::error::Error::source(&error).is_some());
}

#[tokio::test]
async fn test_write_all_replaces_content() {
    let (_dir, path) = temp_file_path("data.json");

    storage::write_all(&path, "first").await.unwrap();
    storage::write_all(&path, "second").await.unwrap();

    assert_eq!(storage::read_all(&path).await.unwrap(), "second");
}

#[tokio::test]
async fn test_write_all_leaves_no_temp_file_behind() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");

    storage::write_all(&path, "content").await.unwrap();

    let entries: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(entries, vec!["data.json".to_string()], "{:?}", entries);
}

#[tokio::test]
async fn test_write_all_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("data.json");

    let result = storage::write_all(&path, "content").await;
    assert!(result.is_err());
}
