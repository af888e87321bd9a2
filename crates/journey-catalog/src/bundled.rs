//! # Bundled Catalog
//!
//! The default privacy compliance catalog shipped with the application,
//! compiled into the binary.

use crate::catalog::ToolCatalog;
use crate::error::CatalogError;
use crate::options::CatalogOptions;

/// Raw YAML of the bundled catalog.
pub const BUNDLED_CATALOG_YAML: &str = include_str!("../catalog/privacy.yaml");

impl ToolCatalog {
    /// Load the bundled privacy catalog with default options.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_yaml_str(BUNDLED_CATALOG_YAML, &CatalogOptions::default())
    }
}
