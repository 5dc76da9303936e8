//! Shared types.
//!
//! - **database**: generated schema placeholder and the `Json` value type
//! - `Nullable<T>` / `Optional<T>`: value-or-absence aliases

mod database;

pub use database::{Database, Json, Never, PublicSchema, SchemaArtifact};

/// A value that may be explicitly null
pub type Nullable<T> = Option<T>;

/// A value that may be left out entirely
pub type Optional<T> = Option<T>;
