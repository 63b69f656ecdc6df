//! Get-bookmarks use case: load the whole validated collection.

use crate::repository::BookmarkRepository;
use crate::types::bookmark::Bookmark;
use crate::types::errors::UnexpectedError;

pub struct GetBookmarks<'a, R: BookmarkRepository> {
    repository: &'a R,
}

impl<'a, R: BookmarkRepository> GetBookmarks<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<Vec<Bookmark>, UnexpectedError> {
        let bookmarks = self.repository.find_all().await?;
        Ok(bookmarks)
    }
}
