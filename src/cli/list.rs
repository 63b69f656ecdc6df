//! `tagmark list` — print every bookmark.

use crate::cli::CliError;
use crate::repository::BookmarkRepository;
use crate::usecase::GetBookmarks;

pub async fn run<R: BookmarkRepository>(repository: &R) -> Result<(), CliError> {
    let bookmarks = GetBookmarks::new(repository).execute().await?;
    if bookmarks.is_empty() {
        println!("No bookmarks found");
        return Ok(());
    }
    for bookmark in &bookmarks {
        let tags: Vec<&str> = bookmark.tags().iter().map(|t| t.as_str()).collect();
        if tags.is_empty() {
            println!("{} - {}", bookmark.title(), bookmark.url());
        } else {
            println!(
                "{} [{}] - {}",
                bookmark.title(),
                tags.join(", "),
                bookmark.url()
            );
        }
    }
    Ok(())
}
