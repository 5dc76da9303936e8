//! Travel & Tour web - server-rendered site for a travel and tour SaaS
//!
//! Pages are built from a small set of UI primitives as element trees and
//! served by axum.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration, site record and constants
//! - **ui**: Element tree, primitives and accessibility queries
//! - **pages**: Page templates and the root layout
//! - **api**: HTTP handlers and routes
//! - **types**: Shared types (schema placeholder, value aliases)
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Write the placeholder schema artifact
//! cargo run -- generate schema
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod pages;
pub mod types;
pub mod ui;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::{Config, SiteConfig};
pub use errors::{AppError, AppResult};
