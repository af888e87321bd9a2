//! # journey-catalog — Tool Catalog
//!
//! Turns catalog configuration into the frozen, validated model every other
//! component queries:
//!
//! - **Document** (`document.rs`): YAML/JSON catalog documents as written
//!   by operators.
//!
//! - **Validation** (`validation.rs`): load-time invariants. Unique ids and
//!   phase orders, resolvable references, acyclic prerequisites.
//!
//! - **Catalog** (`catalog.rs`): the immutable [`ToolCatalog`] and its query
//!   layer (by phase, criticality, persona, id).
//!
//! - **Persona** (`persona.rs`): persona journey lookups.
//!
//! - **Fingerprint** (`fingerprint.rs`): content digest of a catalog for
//!   cache keys.
//!
//! ## Crate Policy
//!
//! - Depends only on `journey-core` internally.
//! - A `ToolCatalog` value is always valid. There is no way to construct
//!   one that skips validation, and no way to mutate one afterwards.

pub mod bundled;
pub mod catalog;
pub mod document;
pub mod error;
pub mod fingerprint;
pub mod model;
pub mod options;
pub mod persona;
pub mod validation;

pub use bundled::BUNDLED_CATALOG_YAML;
pub use catalog::ToolCatalog;
pub use document::{CatalogDocument, ToolEntry};
pub use error::{CatalogError, ValidationViolations, Violation};
pub use fingerprint::CatalogFingerprint;
pub use model::{Phase, PersonaJourney, Tool, ToolMetadata};
pub use options::{CatalogOptions, UnknownPrerequisitePolicy};
pub use validation::{validate_document, CatalogValidationResult};
