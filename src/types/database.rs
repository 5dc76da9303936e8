//! Placeholder for generated database types.
//!
//! The schema is produced by an external introspection step and written as a
//! [`SchemaArtifact`]. Until that step has run, the artifact carries version
//! `PLACEHOLDER_SCHEMA_VERSION` and every schema group is empty.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::PLACEHOLDER_SCHEMA_VERSION;
use crate::errors::AppResult;

/// Arbitrary JSON value
pub type Json = serde_json::Value;

/// Uninhabited type: a map of `Never` values can only ever be empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Never {}

/// Named groups of the `public` schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublicSchema {
    pub tables: BTreeMap<String, Never>,
    pub views: BTreeMap<String, Never>,
    pub functions: BTreeMap<String, Never>,
    pub enums: BTreeMap<String, Never>,
    pub composite_types: BTreeMap<String, Never>,
}

impl PublicSchema {
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
            && self.views.is_empty()
            && self.functions.is_empty()
            && self.enums.is_empty()
            && self.composite_types.is_empty()
    }
}

/// Database schema description
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Database {
    pub public: PublicSchema,
}

/// Versioned, regenerable schema file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaArtifact {
    pub version: u32,
    pub database: Database,
}

impl SchemaArtifact {
    /// The "not generated yet" artifact
    pub fn placeholder() -> Self {
        Self {
            version: PLACEHOLDER_SCHEMA_VERSION,
            database: Database::default(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.version == PLACEHOLDER_SCHEMA_VERSION
    }

    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
