//! Update-bookmark use case: merge supplied fields over the stored record.
//!
//! Fetches the current record first and fails without writing anything if
//! the ID does not exist. Unspecified fields keep their prior value; `id`
//! and `created_at` are preserved and `updated_at` is bumped.

use crate::repository::BookmarkRepository;
use crate::types::bookmark::{BookmarkId, BookmarkTag, BookmarkTitle, BookmarkUrl};
use crate::types::errors::{UnexpectedError, ValidationError, ValidationIssue};

pub struct UpdateBookmark<'a, R: BookmarkRepository> {
    repository: &'a R,
}

impl<'a, R: BookmarkRepository> UpdateBookmark<'a, R> {
    pub fn new(repository: &'a R) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        id: &str,
        title: Option<&str>,
        url: Option<&str>,
        tags: Option<&[String]>,
    ) -> Result<(), UnexpectedError> {
        let id = BookmarkId::parse(id)?;
        let current = self.repository.find_by_id(&id).await?;

        let mut issues: Vec<ValidationIssue> = Vec::new();

        let title = match title {
            Some(raw) => BookmarkTitle::parse(raw)
                .map_err(|e| issues.extend_from_slice(e.issues()))
                .ok(),
            None => None,
        };
        let url = match url {
            Some(raw) => BookmarkUrl::parse(raw)
                .map_err(|e| issues.extend_from_slice(e.issues()))
                .ok(),
            None => None,
        };
        let tags = match tags {
            Some(raw_tags) => {
                let mut parsed = Vec::with_capacity(raw_tags.len());
                for (i, tag) in raw_tags.iter().enumerate() {
                    match BookmarkTag::parse(tag) {
                        Ok(tag) => parsed.push(tag),
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
                Some(parsed)
            }
            None => None,
        };

        if !issues.is_empty() {
            return Err(ValidationError::new(issues).into());
        }

        let updated = current.with_updates(title, url, tags);
        self.repository.update(&updated).await?;
        Ok(())
    }
}
