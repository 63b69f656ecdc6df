//! JSON-file-backed bookmark repository.
//!
//! The collection is one pretty-printed JSON array of bookmark DTOs. The
//! DTO is the plain wire shape; validated [`Bookmark`] entities exist only
//! in memory. Any record failing validation on read fails the whole load —
//! bad records are never silently dropped or repaired.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::repository::BookmarkRepository;
use crate::storage;
use crate::types::bookmark::{Bookmark, BookmarkId};
use crate::types::errors::{
    BookmarkParseError, RepositoryError, ValidationError, ValidationIssue,
};

/// Serializable shape of one bookmark in the data file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BookmarkDto {
    id: String,
    title: String,
    url: String,
    tags: Vec<String>,
    created_at: String,
    updated_at: String,
}

impl BookmarkDto {
    fn from_entity(bookmark: &Bookmark) -> Self {
        Self {
            id: bookmark.id().to_string(),
            title: bookmark.title().to_string(),
            url: bookmark.url().to_string(),
            tags: bookmark.tags().iter().map(|t| t.to_string()).collect(),
            created_at: format_timestamp(bookmark.created_at()),
            updated_at: format_timestamp(bookmark.updated_at()),
        }
    }

    /// Validates the DTO into an entity, aggregating timestamp and field
    /// issues into one error.
    fn into_entity(self) -> Result<Bookmark, ValidationError> {
        let mut issues: Vec<ValidationIssue> = Vec::new();

        let created_at = parse_timestamp(&self.created_at).unwrap_or_else(|| {
            issues.push(ValidationIssue::new(
                "createdAt",
                "must be an ISO-8601 timestamp",
            ));
            DateTime::UNIX_EPOCH
        });
        let updated_at = parse_timestamp(&self.updated_at).unwrap_or_else(|| {
            issues.push(ValidationIssue::new(
                "updatedAt",
                "must be an ISO-8601 timestamp",
            ));
            DateTime::UNIX_EPOCH
        });

        match Bookmark::validate(
            &self.id, &self.title, &self.url, &self.tags, created_at, updated_at,
        ) {
            Ok(bookmark) if issues.is_empty() => Ok(bookmark),
            Ok(_) => Err(ValidationError::new(issues)),
            Err(e) => {
                let mut all = e.issues().to_vec();
                all.extend(issues);
                Err(ValidationError::new(all))
            }
        }
    }
}

fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Tolerant ISO-8601 parse: full RFC 3339, then a naive datetime, then a
/// bare date (midnight UTC). Anything else is rejected.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Bookmark repository persisting the collection to one JSON file.
pub struct JsonBookmarkRepository {
    path: PathBuf,
}

impl JsonBookmarkRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Serializes the collection as pretty-printed JSON and writes it
    /// atomically.
    async fn write_collection(&self, bookmarks: &[Bookmark]) -> Result<(), RepositoryError> {
        let dtos: Vec<BookmarkDto> = bookmarks.iter().map(BookmarkDto::from_entity).collect();
        let json = serde_json::to_string_pretty(&dtos)
            .map_err(|e| RepositoryError::Parse(BookmarkParseError::Json(e)))?;
        storage::write_all(&self.path, &json).await?;
        Ok(())
    }
}

impl BookmarkRepository for JsonBookmarkRepository {
    async fn find_all(&self) -> Result<Vec<Bookmark>, RepositoryError> {
        let text = storage::read_all(&self.path).await?;
        let dtos: Vec<BookmarkDto> = serde_json::from_str(&text)
            .map_err(|e| RepositoryError::Parse(BookmarkParseError::Json(e)))?;

        let mut bookmarks = Vec::with_capacity(dtos.len());
        let mut issues: Vec<ValidationIssue> = Vec::new();
        for (i, dto) in dtos.into_iter().enumerate() {
            match dto.into_entity() {
                Ok(bookmark) => bookmarks.push(bookmark),
                Err(e) => {
                    for issue in e.issues() {
                        issues.push(ValidationIssue::new(
                            format!("[{}].{}", i, issue.field),
                            issue.message.clone(),
                        ));
                    }
                }
            }
        }
        if !issues.is_empty() {
            return Err(RepositoryError::Parse(BookmarkParseError::Invalid(
                ValidationError::new(issues),
            )));
        }
        Ok(bookmarks)
    }

    async fn find_by_id(&self, id: &BookmarkId) -> Result<Bookmark, RepositoryError> {
        let bookmarks = self.find_all().await?;
        bookmarks
            .into_iter()
            .find(|b| b.id() == id)
            .ok_or_else(|| RepositoryError::NotFound(id.to_string()))
    }

    async fn insert(&self, bookmark: &Bookmark) -> Result<(), RepositoryError> {
        storage::ensure_exists(&self.path).await?;
        let mut bookmarks = self.find_all().await?;
        bookmarks.push(bookmark.clone());
        self.write_collection(&bookmarks).await
    }

    async fn update(&self, bookmark: &Bookmark) -> Result<(), RepositoryError> {
        storage::ensure_exists(&self.path).await?;
        let mut bookmarks = self.find_all().await?;
        let mut replaced = false;
        for existing in bookmarks.iter_mut() {
            if existing.id() == bookmark.id() {
                *existing = bookmark.clone();
                replaced = true;
            }
        }
        if !replaced {
            return Err(RepositoryError::NotFound(bookmark.id().to_string()));
        }
        self.write_collection(&bookmarks).await
    }

    async fn delete(&self, id: &BookmarkId) -> Result<(), RepositoryError> {
        storage::ensure_exists(&self.path).await?;
        let mut bookmarks = self.find_all().await?;
        bookmarks.retain(|b| b.id() != id);
        self.write_collection(&bookmarks).await
    }
}
