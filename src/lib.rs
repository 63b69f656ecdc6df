//! tagmark — a tag-based personal bookmark manager backed by a single JSON file.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod cli;
pub mod platform;
pub mod repository;
pub mod storage;
pub mod types;
pub mod usecase;
