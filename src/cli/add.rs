//! `tagmark add` — add a bookmark from flags or interactive prompts.

use tracing::info;

use crate::cli::{prompt, CliError};
use crate::repository::BookmarkRepository;
use crate::types::bookmark::{BookmarkTag, BookmarkTitle, BookmarkUrl};
use crate::types::errors::{ValidationError, ValidationIssue};
use crate::usecase::AddBookmark;

pub async fn run<R: BookmarkRepository>(
    repository: &R,
    title: Option<String>,
    url: Option<String>,
    tags: Option<Vec<String>>,
) -> Result<(), CliError> {
    // Flags win; anything missing is prompted for with a retry loop.
    let title = match title {
        Some(title) => title,
        None => {
            let Some(title) = prompt::read_valid("Title: ", |raw| {
                BookmarkTitle::parse(raw).map(|t| t.as_str().to_string())
            })?
            else {
                return Ok(());
            };
            title
        }
    };
    let url = match url {
        Some(url) => url,
        None => {
            let Some(url) = prompt::read_valid("URL: ", |raw| {
                BookmarkUrl::parse(raw).map(|u| u.as_str().to_string())
            })?
            else {
                return Ok(());
            };
            url
        }
    };
    let tags = match tags {
        Some(tags) => tags,
        None => {
            let Some(tags) = prompt::read_valid("Tags (comma separated): ", parse_tag_list)? else {
                return Ok(());
            };
            tags
        }
    };

    AddBookmark::new(repository).execute(&title, &url, &tags).await?;
    info!(%title, %url, "bookmark added");
    println!("Bookmark added: {}", title);
    Ok(())
}

/// Splits a comma-separated tag list and validates each entry. An empty
/// input means no tags.
fn parse_tag_list(raw: &str) -> Result<Vec<String>, ValidationError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let mut tags = Vec::new();
    let mut issues: Vec<ValidationIssue> = Vec::new();
    for (i, part) in raw.split(',').enumerate() {
        match BookmarkTag::parse(part) {
            Ok(tag) => tags.push(tag.as_str().to_string()),
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
    if issues.is_empty() {
        Ok(tags)
    } else {
        Err(ValidationError::new(issues))
    }
}
