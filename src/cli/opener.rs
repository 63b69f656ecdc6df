//! Opens a URL in the default browser via the OS opener, detached.

use std::io;
use std::process::{Command, Stdio};

/// Spawns the platform opener and returns without waiting for it.
pub fn open_in_browser(url: &str) -> io::Result<()> {
    let mut command = base_command();
    command
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}

#[cfg(target_os = "macos")]
fn base_command() -> Command {
    Command::new("open")
}

#[cfg(target_os = "windows")]
fn base_command() -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn base_command() -> Command {
    Command::new("xdg-open")
}
