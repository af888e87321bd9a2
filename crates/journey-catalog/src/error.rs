//! # Catalog Errors
//!
//! Load-time configuration errors. These are fatal: a catalog that fails
//! validation is never constructed, so the engine cannot operate on an
//! invalid model.
//!
//! Validation collects every violation before failing, so operators see
//! the full list in one pass instead of fixing one problem per run.

use std::fmt;

use journey_core::{PersonaId, PhaseId, ToolId};
use thiserror::Error;

/// Error while loading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog '{path}': {source}")]
    Io {
        /// Path that failed to load.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The catalog file has an extension we do not parse.
    #[error("unsupported catalog format for '{path}': expected .yaml, .yml or .json")]
    UnsupportedFormat {
        /// Offending path.
        path: String,
    },

    /// The document is not well-formed YAML/JSON or does not match the
    /// catalog structure.
    #[error("failed to parse catalog '{source_name}': {reason}")]
    Parse {
        /// File path or a format placeholder for in-memory sources.
        source_name: String,
        /// Parser message.
        reason: String,
    },

    /// The document parsed but violates catalog invariants.
    #[error("catalog validation failed with {count} violation(s):\n{0}", count = .0.len())]
    Validation(ValidationViolations),

    /// Options file could not be parsed.
    #[error("invalid catalog options: {0}")]
    Options(String),

    /// Fingerprint canonicalization failed.
    #[error("fingerprint error: {0}")]
    Fingerprint(#[from] serde_json::Error),
}

/// A single catalog invariant violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// Two phases share an id.
    DuplicatePhaseId(PhaseId),
    /// Two phases share an order value.
    DuplicatePhaseOrder {
        order: u32,
        first: PhaseId,
        second: PhaseId,
    },
    /// Two tools share an id.
    DuplicateToolId(ToolId),
    /// A tool references a phase that does not exist.
    UnknownPhase { tool: ToolId, phase: PhaseId },
    /// A prerequisite references a tool that does not exist.
    UnknownPrerequisite { tool: ToolId, prerequisite: ToolId },
    /// A tool lists itself as a prerequisite.
    SelfPrerequisite(ToolId),
    /// The prerequisite graph contains a cycle. The path starts and ends
    /// with the same tool.
    PrerequisiteCycle(Vec<ToolId>),
    /// Two persona journeys share an id.
    DuplicatePersona(PersonaId),
    /// A persona journey references a tool that does not exist.
    UnknownPersonaTool { persona: PersonaId, tool: ToolId },
    /// A tool appears more than once in one persona list.
    DuplicatePersonaStep {
        persona: PersonaId,
        list: &'static str,
        tool: ToolId,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicatePhaseId(id) => write!(f, "duplicate phase id '{id}'"),
            Self::DuplicatePhaseOrder {
                order,
                first,
                second,
            } => write!(f, "phases '{first}' and '{second}' share order {order}"),
            Self::DuplicateToolId(id) => write!(f, "duplicate tool id '{id}'"),
            Self::UnknownPhase { tool, phase } => {
                write!(f, "tool '{tool}' references unknown phase '{phase}'")
            }
            Self::UnknownPrerequisite { tool, prerequisite } => write!(
                f,
                "tool '{tool}' requires unknown tool '{prerequisite}'"
            ),
            Self::SelfPrerequisite(id) => write!(f, "tool '{id}' lists itself as a prerequisite"),
            Self::PrerequisiteCycle(path) => {
                let rendered: Vec<&str> = path.iter().map(|t| t.as_str()).collect();
                write!(f, "prerequisite cycle: {}", rendered.join(" -> "))
            }
            Self::DuplicatePersona(id) => write!(f, "duplicate persona '{id}'"),
            Self::UnknownPersonaTool { persona, tool } => {
                write!(f, "persona '{persona}' references unknown tool '{tool}'")
            }
            Self::DuplicatePersonaStep {
                persona,
                list,
                tool,
            } => write!(f, "persona '{persona}' lists tool '{tool}' more than once in {list}"),
        }
    }
}

/// Ordered collection of violations, rendered one per line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationViolations(pub Vec<Violation>);

impl ValidationViolations {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Violation> {
        self.0.iter()
    }
}

impl fmt::Display for ValidationViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "  - {v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tid(s: &str) -> ToolId {
        ToolId::new(s).unwrap()
    }

    #[test]
    fn test_cycle_rendering() {
        let v = Violation::PrerequisiteCycle(vec![tid("a"), tid("b"), tid("a")]);
        assert_eq!(v.to_string(), "prerequisite cycle: a -> b -> a");
    }

    #[test]
    fn test_validation_error_lists_every_violation() {
        let err = CatalogError::Validation(ValidationViolations(vec![
            Violation::DuplicateToolId(tid("x")),
            Violation::SelfPrerequisite(tid("y")),
        ]));
        let msg = err.to_string();
        assert!(msg.starts_with("catalog validation failed with 2 violation(s):"));
        assert!(msg.contains("duplicate tool id 'x'"));
        assert!(msg.contains("tool 'y' lists itself as a prerequisite"));
    }
}
