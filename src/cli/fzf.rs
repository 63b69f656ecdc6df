//! Selection via an external `fzf` subprocess.
//!
//! Bookmarks are piped to fzf's stdin one per line; the selected line comes
//! back on stdout. Exit code 130 means the user cancelled, which is not an
//! error.

use std::fmt;
use std::io;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::types::bookmark::Bookmark;

/// Errors from running the fzf subprocess.
#[derive(Debug)]
pub enum FzfError {
    /// The fzf binary is not on PATH.
    NotInstalled,
    /// Spawning or talking to the subprocess failed.
    Io(io::Error),
    /// fzf exited with an unexpected status.
    ExitStatus(Option<i32>),
}

impl fmt::Display for FzfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FzfError::NotInstalled => {
                write!(f, "fzf is not installed; install fzf to use this command")
            }
            FzfError::Io(e) => write!(f, "failed to run fzf: {}", e),
            FzfError::ExitStatus(code) => match code {
                Some(code) => write!(f, "fzf exited with code {}", code),
                None => write!(f, "fzf was terminated by a signal"),
            },
        }
    }
}

impl std::error::Error for FzfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FzfError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// One line per bookmark, with the ID in a trailing marker so the selection
/// can be resolved back to a record.
pub fn format_line(bookmark: &Bookmark) -> String {
    let tags = if bookmark.tags().is_empty() {
        String::new()
    } else {
        let joined: Vec<&str> = bookmark.tags().iter().map(|t| t.as_str()).collect();
        format!("[{}] ", joined.join(", "))
    };
    format!(
        "{} {}- {} (ID: {})",
        bookmark.title(),
        tags,
        bookmark.url(),
        bookmark.id()
    )
}

/// Extracts the ID from a line produced by [`format_line`].
pub fn parse_id(line: &str) -> Option<&str> {
    let start = line.rfind("(ID: ")? + "(ID: ".len();
    let rest = &line[start..];
    rest.strip_suffix(')')
}

/// Runs fzf over the given lines. Returns `None` when the user cancels or
/// selects nothing.
pub async fn select(lines: &[String], prompt: &str) -> Result<Option<String>, FzfError> {
    let mut child = Command::new("fzf")
        .arg(format!("--prompt={}", prompt))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                FzfError::NotInstalled
            } else {
                FzfError::Io(e)
            }
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        let input = lines.join("\n");
        stdin.write_all(input.as_bytes()).await.map_err(FzfError::Io)?;
        // Closing stdin lets fzf present the list.
    }

    let output = child.wait_with_output().await.map_err(FzfError::Io)?;
    match output.status.code() {
        Some(0) | Some(130) => {
            let selected = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if selected.is_empty() {
                Ok(None)
            } else {
                Ok(Some(selected))
            }
        }
        code => Err(FzfError::ExitStatus(code)),
    }
}
