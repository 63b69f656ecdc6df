//! Interactive stdin prompts for missing command arguments.

use std::io::{self, BufRead, Write};

use crate::types::errors::ValidationError;

/// Prints a prompt and reads one line. Returns `None` on EOF.
pub fn read_line(message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompts until `parse` accepts the input, reporting each validation
/// failure. Returns `None` if the user hits EOF.
pub fn read_valid<T>(
    message: &str,
    parse: impl Fn(&str) -> Result<T, ValidationError>,
) -> io::Result<Option<T>> {
    loop {
        let Some(line) = read_line(message)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) => eprintln!("{}", e),
        }
    }
}

/// Yes/no confirmation, defaulting to no.
pub fn confirm(message: &str) -> io::Result<bool> {
    let Some(line) = read_line(&format!("{} [y/N]: ", message))? else {
        return Ok(false);
    };
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "Yes"))
}
