//! # Error Types
//!
//! Errors raised while constructing core values: identifiers and registry
//! levels parsed from text. Catalog loading has its own `CatalogError`.
//!
//! Not-found outcomes (unknown tool, unknown persona, no successor) are
//! never errors. They are `Option`/empty results at the call site.

use thiserror::Error;

/// Error type for the journey core primitives.
#[derive(Error, Debug)]
pub enum JourneyError {
    /// An identifier failed validation.
    #[error("invalid {kind} identifier {value:?}: {reason}")]
    InvalidIdentifier {
        /// Identifier namespace (tool, phase, persona).
        kind: &'static str,
        /// The rejected raw value.
        value: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A registry value (criticality, position) could not be parsed.
    #[error("unknown {registry} value: {value:?}")]
    UnknownRegistryValue {
        /// Registry name.
        registry: &'static str,
        /// The rejected raw value.
        value: String,
    },
}
