//! # Identifier Newtypes
//!
//! Newtype wrappers for the three identifier namespaces of the catalog.
//! Identifiers are opaque strings: the engine never parses their content,
//! it only compares them for equality and ordering.
//!
//! Construction goes through [`ToolId::new`] (and siblings), which rejects
//! empty or whitespace-padded values. Deserialization uses the same
//! validation via `#[serde(try_from = "String")]`.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::JourneyError;

fn validate(kind: &'static str, value: String) -> Result<String, JourneyError> {
    let reason = if value.is_empty() {
        Some("must not be empty")
    } else if value.trim() != value {
        Some("must not have leading or trailing whitespace")
    } else if value.chars().any(char::is_control) {
        Some("must not contain control characters")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(JourneyError::InvalidIdentifier {
            kind,
            value,
            reason,
        }),
        None => Ok(value),
    }
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Create a validated identifier.
            pub fn new(value: impl Into<String>) -> Result<Self, JourneyError> {
                validate($kind, value.into()).map(Self)
            }

            /// Access the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = JourneyError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = JourneyError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = JourneyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Stable identifier of a compliance tool. Never reused across removed tools.
    ToolId,
    "tool"
);

string_id!(
    /// Identifier of a lifecycle phase (e.g. `discovery`).
    PhaseId,
    "phase"
);

string_id!(
    /// Identifier of a user persona (e.g. `privacy-officer`).
    PersonaId,
    "persona"
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_valid_identifiers() {
        assert_eq!(ToolId::new("privacy-gap-analyzer").unwrap().as_str(), "privacy-gap-analyzer");
        assert_eq!(PhaseId::new("discovery").unwrap().to_string(), "discovery");
        assert!(PersonaId::new("dpo").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        let err = ToolId::new("").unwrap_err();
        assert!(err.to_string().contains("tool"));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_rejects_padded_and_control() {
        assert!(PhaseId::new(" discovery").is_err());
        assert!(PhaseId::new("discovery\n").is_err());
        assert!(PersonaId::new("a\u{0007}b").is_err());
    }

    #[test]
    fn test_serde_is_transparent_string() {
        let id = ToolId::new("dpia-generator").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"dpia-generator\"");
        let parsed: ToolId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        assert!(serde_json::from_str::<ToolId>("\"\"").is_err());
    }

    #[test]
    fn test_borrow_str_lookup() {
        let set: BTreeSet<ToolId> = ["a", "b"].iter().map(|s| ToolId::new(*s).unwrap()).collect();
        assert!(set.contains("a"));
        assert!(!set.contains("c"));
    }
}
