use std::fmt;
use std::io;
use std::path::PathBuf;

// === ValidationError ===

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Name of the offending field, e.g. `"title"` or `"[2].url"`.
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// One or more field-level validation failures, reported together.
///
/// Raised by value-type and entity construction. Always carries at least
/// one issue; aggregate validation reports every failing field, not just
/// the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    /// Convenience constructor for a single-issue error.
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issues: vec![ValidationIssue::new(field, message)],
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// === FileSystemError ===

/// An I/O failure on the bookmark data file, with the causing error attached.
#[derive(Debug)]
pub struct FileSystemError {
    path: PathBuf,
    source: io::Error,
}

impl FileSystemError {
    pub fn new(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self {
            path: path.into(),
            source,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl fmt::Display for FileSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "file system error at {}: {}",
            self.path.display(),
            self.source
        )
    }
}

impl std::error::Error for FileSystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

// === BookmarkParseError ===

/// The persisted file's content failed to parse as a valid bookmark collection.
#[derive(Debug)]
pub enum BookmarkParseError {
    /// The file did not contain syntactically valid JSON.
    Json(serde_json::Error),
    /// One or more records failed bookmark validation.
    Invalid(ValidationError),
}

impl fmt::Display for BookmarkParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookmarkParseError::Json(e) => write!(f, "bookmark file is not valid JSON: {}", e),
            BookmarkParseError::Invalid(e) => {
                write!(f, "bookmark file contains invalid records: {}", e)
            }
        }
    }
}

impl std::error::Error for BookmarkParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BookmarkParseError::Json(e) => Some(e),
            BookmarkParseError::Invalid(e) => Some(e),
        }
    }
}

// === RepositoryError ===

/// Errors from bookmark repository operations.
#[derive(Debug)]
pub enum RepositoryError {
    /// Underlying file read/write failed.
    FileSystem(FileSystemError),
    /// The stored collection could not be parsed or validated.
    Parse(BookmarkParseError),
    /// No bookmark with the given ID exists in the collection.
    NotFound(String),
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::FileSystem(e) => write!(f, "{}", e),
            RepositoryError::Parse(e) => write!(f, "{}", e),
            RepositoryError::NotFound(id) => write!(f, "bookmark not found: {}", id),
        }
    }
}

impl std::error::Error for RepositoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RepositoryError::FileSystem(e) => Some(e),
            RepositoryError::Parse(e) => Some(e),
            RepositoryError::NotFound(_) => None,
        }
    }
}

impl From<FileSystemError> for RepositoryError {
    fn from(e: FileSystemError) -> Self {
        RepositoryError::FileSystem(e)
    }
}

impl From<BookmarkParseError> for RepositoryError {
    fn from(e: BookmarkParseError) -> Self {
        RepositoryError::Parse(e)
    }
}

// === UnexpectedError ===

/// Use-case-level wrapper carrying the underlying failure as its cause.
///
/// This is the only error type that crosses the use-case boundary outward.
#[derive(Debug)]
pub struct UnexpectedError {
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl UnexpectedError {
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }
}

impl fmt::Display for UnexpectedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unexpected error: {}", self.source)
    }
}

impl std::error::Error for UnexpectedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl From<RepositoryError> for UnexpectedError {
    fn from(e: RepositoryError) -> Self {
        UnexpectedError::new(e)
    }
}

impl From<ValidationError> for UnexpectedError {
    fn from(e: ValidationError) -> Self {
        UnexpectedError::new(e)
    }
}
