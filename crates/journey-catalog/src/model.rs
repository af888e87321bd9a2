//! # Catalog Model
//!
//! The frozen records of a loaded catalog: phases, tools, and persona
//! journeys. Descriptive metadata is carried through verbatim and never
//! interpreted by the engine.

use std::collections::BTreeSet;

use journey_core::{CriticalityLevel, PersonaId, PhaseId, ToolId, ToolPosition};
use serde::{Deserialize, Serialize};

/// A lifecycle phase.
///
/// `order` is the sole basis for sequencing phases. Load-time validation
/// guarantees it is unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Phase {
    /// Phase identifier.
    pub id: PhaseId,
    /// Display name.
    pub name: String,
    /// Position in the lifecycle. Unique within a catalog.
    pub order: u32,
    /// Criticality assigned to tools of this phase that declare none.
    pub default_criticality: CriticalityLevel,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

/// A compliance tool after load-time resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Stable identifier.
    pub id: ToolId,
    /// Display name.
    pub name: String,
    /// Phase the tool belongs to.
    pub phase: PhaseId,
    /// Resolved criticality (explicit, or inherited from the phase).
    pub criticality: CriticalityLevel,
    /// Intra-phase tie-break tag.
    pub position: ToolPosition,
    /// Tools that must be completed before this one is unlocked.
    #[serde(default)]
    pub prerequisites: Vec<ToolId>,
    /// Personas this tool is relevant to.
    #[serde(default)]
    pub personas: BTreeSet<PersonaId>,
    /// Descriptive metadata.
    #[serde(flatten)]
    pub metadata: ToolMetadata,
}

impl Tool {
    /// Whether this tool is relevant to the given persona.
    pub fn is_for_persona(&self, persona: &str) -> bool {
        self.personas.contains(persona)
    }

    /// Whether `tool_id` is one of this tool's prerequisites.
    pub fn requires(&self, tool_id: &str) -> bool {
        self.prerequisites.iter().any(|p| p.as_str() == tool_id)
    }
}

/// Descriptive fields of a tool, passed through to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolMetadata {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Human-readable effort estimate (e.g. "30-45 min").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,
    /// Artifacts the tool produces.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,
    /// Regulations the tool addresses (e.g. "GDPR", "CCPA").
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regulations: Vec<String>,
    /// Presentation route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// A persona's path through the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PersonaJourney {
    /// Persona identifier.
    pub persona_id: PersonaId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Suggested order in which the persona works through tools.
    #[serde(default)]
    pub journey_path: Vec<ToolId>,
    /// Tools highlighted for this persona.
    #[serde(default)]
    pub primary_tools: Vec<ToolId>,
}
