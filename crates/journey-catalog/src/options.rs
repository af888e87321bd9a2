//! # Catalog Options
//!
//! Load-time knobs, deserializable from a YAML options file:
//!
//! ```yaml
//! unknown_prerequisites: reject   # or: lock
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// How to treat a prerequisite that names a tool absent from the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownPrerequisitePolicy {
    /// Fail the load with a configuration error.
    #[default]
    Reject,
    /// Accept the catalog. The dependent tool can never be unlocked.
    Lock,
}

/// Options controlling catalog validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogOptions {
    pub unknown_prerequisites: UnknownPrerequisitePolicy,
}

impl CatalogOptions {
    /// Parse options from YAML. An empty document yields the defaults.
    pub fn from_yaml_str(source: &str) -> Result<Self, CatalogError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(source).map_err(|e| CatalogError::Options(e.to_string()))
    }

    /// Read options from a YAML file.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_yaml_str(&content)
    }
}
