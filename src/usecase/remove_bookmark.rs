//! Remove-bookmark use case: delete by ID.
//!
//! Deleting an ID that is not in the collection is a no-op success, so the
//! operation is idempotent.

use crate::repository::BookmarkRepository;
use crate::types::bookmark::BookmarkId;
use crate::types::errors::UnexpectedError;

pub struct RemoveBookmark<'a, R: BookmarkRepository> {
    repository: &'a R,
}

impl<'a, R: BookmarkRepository> RemoveBookmark<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> Result<(), UnexpectedError> {
        let id = BookmarkId::parse(id)?;
        self.repository.delete(&id).await?;
        Ok(())
    }
}
