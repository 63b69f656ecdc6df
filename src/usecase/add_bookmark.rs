//! Add-bookmark use case: validate raw input, stamp identity and
//! timestamps, persist.

use crate::repository::BookmarkRepository;
use crate::types::bookmark::{Bookmark, BookmarkTag, BookmarkTitle, BookmarkUrl};
use crate::types::errors::{UnexpectedError, ValidationError, ValidationIssue};

pub struct AddBookmark<'a, R: BookmarkRepository> {
    repository: &'a R,
}

impl<'a, R: BookmarkRepository> AddBookmark<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    /// Validates the raw fields, creates a bookmark with a fresh ID and
    /// `created_at == updated_at == now`, and inserts it.
    pub async fn execute(
        &self,
        title: &str,
        url: &str,
        tags: &[String],
    ) -> Result<(), UnexpectedError> {
        let mut issues: Vec<ValidationIssue> = Vec::new();

        let title = BookmarkTitle::parse(title)
            .map_err(|e| issues.extend_from_slice(e.issues()))
            .ok();
        let url = BookmarkUrl::parse(url)
            .map_err(|e| issues.extend_from_slice(e.issues()))
            .ok();

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

        let bookmark = match (title, url) {
            (Some(title), Some(url)) if issues.is_empty() => {
                Bookmark::create(title, url, parsed_tags)
            }
            _ => return Err(ValidationError::new(issues).into()),
        };

        self.repository.insert(&bookmark).await?;
        Ok(())
    }
}
