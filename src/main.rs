//! tagmark — a tag-based personal bookmark manager backed by a single JSON file.
//!
//! Entry point: initializes logging, parses the command line, and dispatches
//! to the CLI layer.

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use tagmark::cli::{self, Cli};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = cli::run(cli).await {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
