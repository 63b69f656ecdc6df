// tagmark storage layer
// Fallible, atomic file operations over the single JSON data file.

pub mod file;

pub use file::{ensure_exists, read_all, write_all};
