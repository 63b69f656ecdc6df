//! tagmark command-line layer.
//!
//! A thin shell around the use cases: it gathers raw strings from flags,
//! interactive prompts, and fzf selections, and hands them to the core for
//! validation. No validation happens here beyond basic presence checks.

pub mod add;
pub mod fzf;
pub mod list;
pub mod opener;
pub mod prompt;
pub mod remove;
pub mod search;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::platform;
use crate::repository::JsonBookmarkRepository;

#[derive(Debug, Parser)]
#[command(name = "tagmark", version, about = "Tag-based bookmark manager with fzf-powered search")]
pub struct Cli {
    /// Override the bookmark data file path.
    #[arg(long, value_name = "FILE", global = true)]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new bookmark
    Add {
        /// Title of the bookmark
        #[arg(short, long)]
        title: Option<String>,
        /// URL of the bookmark
        #[arg(short, long)]
        url: Option<String>,
        /// Tags for the bookmark (comma separated)
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,
    },
    /// List all bookmarks
    List,
    /// Search bookmarks with fzf and open the selection in the browser
    Search,
    /// Remove a bookmark by selecting it with fzf
    Remove,
}

pub type CliError = Box<dyn std::error::Error + Send + Sync>;

/// Dispatches a parsed command against the JSON repository.
pub async fn run(cli: Cli) -> Result<(), CliError> {
    let path = cli
        .data_file
        .unwrap_or_else(platform::default_data_file);
    debug!(path = %path.display(), "using bookmark data file");
    let repository = JsonBookmarkRepository::new(path);

    match cli.command {
        Command::Add { title, url, tags } => add::run(&repository, title, url, tags).await,
        Command::List => list::run(&repository).await,
        Command::Search => search::run(&repository).await,
        Command::Remove => remove::run(&repository).await,
    }
}
