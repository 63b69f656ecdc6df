//! `tagmark remove` — fuzzy-pick a bookmark, confirm, delete.

use tracing::info;

use crate::cli::{fzf, prompt, CliError};
use crate::repository::BookmarkRepository;
use crate::usecase::{GetBookmarks, RemoveBookmark};

pub async fn run<R: BookmarkRepository>(repository: &R) -> Result<(), CliError> {
    let bookmarks = GetBookmarks::new(repository).execute().await?;
    if bookmarks.is_empty() {
        println!("No bookmarks found");
        return Ok(());
    }

    let lines: Vec<String> = bookmarks.iter().map(fzf::format_line).collect();
    let Some(selected) = fzf::select(&lines, "Select bookmark to remove: ").await? else {
        return Ok(());
    };

    let Some(id) = fzf::parse_id(&selected) else {
        return Err("failed to parse bookmark ID from selection".into());
    };
    let Some(bookmark) = bookmarks.iter().find(|b| b.id().as_str() == id) else {
        return Err("selected bookmark not found".into());
    };

    let tags: Vec<&str> = bookmark.tags().iter().map(|t| t.as_str()).collect();
    println!("You are about to delete:");
    println!("  Title: {}", bookmark.title());
    println!("  URL: {}", bookmark.url());
    println!(
        "  Tags: {}",
        if tags.is_empty() {
            "None".to_string()
        } else {
            tags.join(", ")
        }
    );

    if !prompt::confirm("Are you sure you want to delete this bookmark?")? {
        println!("Deletion cancelled");
        return Ok(());
    }

    RemoveBookmark::new(repository).execute(id).await?;
    info!(%id, "bookmark deleted");
    println!("Bookmark deleted successfully");
    Ok(())
}
