//! tagmark repository layer.
//!
//! The repository owns the on-disk representation of the bookmark
//! collection exclusively; use cases never touch the file directly. Every
//! operation is a whole-collection read-modify-write — there is no in-place
//! update of a single record on disk.
//!
//! Note: there is no file locking. Two processes racing on the same data
//! file can lose updates (last writer wins). Accepted for a single-user
//! local tool.

pub mod json;

pub use json::JsonBookmarkRepository;

use crate::types::bookmark::{Bookmark, BookmarkId};
use crate::types::errors::RepositoryError;

/// Persistence contract for the bookmark collection.
#[allow(async_fn_in_trait)]
pub trait BookmarkRepository {
    /// Loads and validates the full collection. Fails wholesale if any
    /// record is invalid — a partial collection is never returned.
    async fn find_all(&self) -> Result<Vec<Bookmark>, RepositoryError>;

    /// Returns the bookmark with the given ID, or `NotFound`.
    async fn find_by_id(&self, id: &BookmarkId) -> Result<Bookmark, RepositoryError>;

    /// Appends a bookmark to the collection and persists it.
    async fn insert(&self, bookmark: &Bookmark) -> Result<(), RepositoryError>;

    /// Replaces the record with the same ID in place. Fails with `NotFound`
    /// if no such record exists.
    async fn update(&self, bookmark: &Bookmark) -> Result<(), RepositoryError>;

    /// Removes every record with the given ID. Deleting an absent ID is a
    /// no-op success.
    async fn delete(&self, id: &BookmarkId) -> Result<(), RepositoryError>;
}
