//! `tagmark search` — fuzzy-pick a bookmark and open it in the browser.

use tracing::info;

use crate::cli::{fzf, opener, CliError};
use crate::repository::BookmarkRepository;
use crate::usecase::GetBookmarks;

pub async fn run<R: BookmarkRepository>(repository: &R) -> Result<(), CliError> {
    let bookmarks = GetBookmarks::new(repository).execute().await?;
    if bookmarks.is_empty() {
        println!("No bookmarks found");
        return Ok(());
    }

    let lines: Vec<String> = bookmarks.iter().map(fzf::format_line).collect();
    let Some(selected) = fzf::select(&lines, "Select bookmark: ").await? else {
        return Ok(());
    };

    let Some(id) = fzf::parse_id(&selected) else {
        return Err("failed to parse bookmark ID from selection".into());
    };
    let Some(bookmark) = bookmarks.iter().find(|b| b.id().as_str() == id) else {
        return Err("selected bookmark not found".into());
    };

    info!(url = %bookmark.url(), "opening bookmark");
    println!("Opening: {}", bookmark.url());
    opener::open_in_browser(bookmark.url().as_str())?;
    Ok(())
}
