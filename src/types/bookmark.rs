//! Bookmark domain model: validated value types and the aggregate entity.
//!
//! Every type here is constructed only through a validating constructor.
//! There is no public path to an instance that skipped validation, so any
//! `Bookmark` reaching the repository is known to be well-formed.

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

use crate::types::errors::{ValidationError, ValidationIssue};

/// Maximum title length, in characters, after trimming.
pub const TITLE_MAX_LENGTH: usize = 50;

/// Maximum tag length, in characters, after trimming.
pub const TAG_MAX_LENGTH: usize = 50;

// === BookmarkId ===

/// A version-4 UUID identifying one bookmark within the collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BookmarkId(String);

impl BookmarkId {
    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Validates a raw string as a version-4 UUID.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let uuid = Uuid::parse_str(raw.trim())
            .map_err(|_| ValidationError::single("id", "must be a valid UUID"))?;
        if uuid.get_version_num() != 4 {
            return Err(ValidationError::single("id", "must be a version-4 UUID"));
        }
        Ok(Self(uuid.as_hyphenated().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// === BookmarkTitle ===

/// A non-empty, whitespace-trimmed title of at most [`TITLE_MAX_LENGTH`] characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkTitle(String);

impl BookmarkTitle {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::single("title", "must not be empty"));
        }
        if trimmed.chars().count() > TITLE_MAX_LENGTH {
            return Err(ValidationError::single(
                "title",
                format!("must be at most {} characters", TITLE_MAX_LENGTH),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookmarkTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// === BookmarkUrl ===

/// An `http`/`https` URL with a syntactically valid host.
///
/// Query parameters and fragments are permitted. The original string is
/// preserved as entered (no normalization), so round-tripping through the
/// data file is lossless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkUrl(String);

impl BookmarkUrl {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let parsed = url::Url::parse(raw)
            .map_err(|e| ValidationError::single("url", format!("invalid URL: {}", e)))?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ValidationError::single(
                    "url",
                    format!("scheme must be http or https, got {}", other),
                ));
            }
        }
        if parsed.host_str().map_or(true, str::is_empty) {
            return Err(ValidationError::single("url", "missing host"));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookmarkUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// === BookmarkTag ===

/// A non-empty, whitespace-trimmed tag of at most [`TAG_MAX_LENGTH`] characters.
///
/// A bookmark holds zero or more tags; the model does not deduplicate them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkTag(String);

impl BookmarkTag {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::single("tag", "must not be empty"));
        }
        if trimmed.chars().count() > TAG_MAX_LENGTH {
            return Err(ValidationError::single(
                "tag",
                format!("must be at most {} characters", TAG_MAX_LENGTH),
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookmarkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// === Bookmark ===

/// The bookmark aggregate. Only ever constructed through validation.
///
/// `id` and `created_at` are immutable after creation; `updated_at` is
/// bumped on every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Bookmark {
    id: BookmarkId,
    title: BookmarkTitle,
    url: BookmarkUrl,
    tags: Vec<BookmarkTag>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Bookmark {
    /// Assembles a bookmark from already-validated parts.
    pub fn new(
        id: BookmarkId,
        title: BookmarkTitle,
        url: BookmarkUrl,
        tags: Vec<BookmarkTag>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            url,
            tags,
            created_at,
            updated_at,
        }
    }

    /// Creates a brand-new bookmark: fresh ID, `created_at == updated_at == now`.
    pub fn create(title: BookmarkTitle, url: BookmarkUrl, tags: Vec<BookmarkTag>) -> Self {
        let now = Utc::now();
        Self::new(BookmarkId::generate(), title, url, tags, now, now)
    }

    /// Validates raw field values and assembles a bookmark only on full success.
    ///
    /// Partial validity is not possible: every failing field is reported
    /// together in one [`ValidationError`], not just the first.
    pub fn validate(
        id: &str,
        title: &str,
        url: &str,
        tags: &[String],
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        let mut issues: Vec<ValidationIssue> = Vec::new();

        let id = BookmarkId::parse(id).map_err(|e| issues.extend_from_slice(e.issues()));
        let title = BookmarkTitle::parse(title).map_err(|e| issues.extend_from_slice(e.issues()));
        let url = BookmarkUrl::parse(url).map_err(|e| issues.extend_from_slice(e.issues()));

        let mut parsed_tags = Vec::with_capacity(tags.len());
        for (i, tag) in tags.iter().enumerate() {
            match BookmarkTag::parse(tag) {
                Ok(tag) => parsed_tags.push(tag),
                Err(e) => {
                    for issue in e.issues() {
                        issues.push(ValidationIssue::new(
                            format!("tags[{}]", i),
                            issue.message.clone(),
                        ));
                    }
                }
            }
        }

        match (id, title, url) {
            (Ok(id), Ok(title), Ok(url)) if issues.is_empty() => Ok(Self::new(
                id,
                title,
                url,
                parsed_tags,
                created_at,
                updated_at,
            )),
            _ => Err(ValidationError::new(issues)),
        }
    }

    /// Returns a copy with the supplied fields replaced and `updated_at`
    /// bumped to now. `id` and `created_at` are preserved.
    pub fn with_updates(
        &self,
        title: Option<BookmarkTitle>,
        url: Option<BookmarkUrl>,
        tags: Option<Vec<BookmarkTag>>,
    ) -> Self {
        Self {
            id: self.id.clone(),
            title: title.unwrap_or_else(|| self.title.clone()),
            url: url.unwrap_or_else(|| self.url.clone()),
            tags: tags.unwrap_or_else(|| self.tags.clone()),
            created_at: self.created_at,
            updated_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &BookmarkId {
        &self.id
    }

    pub fn title(&self) -> &BookmarkTitle {
        &self.title
    }

    pub fn url(&self) -> &BookmarkUrl {
        &self.url
    }

    pub fn tags(&self) -> &[BookmarkTag] {
        &self.tags
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
