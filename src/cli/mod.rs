//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `generate` - Artifact generation

pub mod args;

pub use args::{Cli, Commands};
