//! # Catalog Document
//!
//! The raw, unvalidated form of a catalog as written in configuration
//! files. A document becomes a [`ToolCatalog`](crate::ToolCatalog) only
//! after passing load-time validation.
//!
//! Documents are YAML or JSON. [`CatalogDocument::from_path`] picks the
//! parser from the file extension.

use std::collections::BTreeSet;
use std::path::Path;

use journey_core::{CriticalityLevel, PersonaId, PhaseId, ToolId, ToolPosition};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::model::{Phase, PersonaJourney, Tool, ToolMetadata};

/// A catalog as declared in configuration.
///
/// Unknown keys are rejected at every level, so a misspelled field fails
/// the parse instead of silently dropping data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogDocument {
    /// Lifecycle phases, in any order.
    pub phases: Vec<Phase>,
    /// Tools, in catalog order. Catalog order is the tie-break for every
    /// stable sort the engine performs.
    pub tools: Vec<ToolEntry>,
    /// Persona journeys.
    #[serde(default)]
    pub personas: Vec<PersonaJourney>,
}

/// A tool as declared in configuration.
///
/// Carries the same fields as [`Tool`], with the descriptive metadata
/// inline and `criticality` optional. An omitted criticality takes the
/// phase's `default_criticality`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolEntry {
    pub id: ToolId,
    pub name: String,
    pub phase: PhaseId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criticality: Option<CriticalityLevel>,
    pub position: ToolPosition,
    #[serde(default)]
    pub prerequisites: Vec<ToolId>,
    #[serde(default)]
    pub personas: BTreeSet<PersonaId>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complexity: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub regulations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ToolEntry {
    /// Resolve into a frozen [`Tool`], filling criticality from `phase`
    /// when the entry declares none.
    pub(crate) fn resolve(&self, phase: Option<&Phase>) -> Tool {
        let criticality = self
            .criticality
            .or_else(|| phase.map(|p| p.default_criticality))
            .unwrap_or(CriticalityLevel::Medium);
        Tool {
            id: self.id.clone(),
            name: self.name.clone(),
            phase: self.phase.clone(),
            criticality,
            position: self.position,
            prerequisites: self.prerequisites.clone(),
            personas: self.personas.clone(),
            metadata: ToolMetadata {
                description: self.description.clone(),
                time_estimate: self.time_estimate.clone(),
                complexity: self.complexity.clone(),
                outputs: self.outputs.clone(),
                regulations: self.regulations.clone(),
                path: self.path.clone(),
                category: self.category.clone(),
            },
        }
    }
}

impl CatalogDocument {
    /// Parse a YAML catalog document.
    pub fn from_yaml_str(source: &str) -> Result<Self, CatalogError> {
        serde_yaml::from_str(source).map_err(|e| CatalogError::Parse {
            source_name: "<yaml>".to_string(),
            reason: e.to_string(),
        })
    }

    /// Parse a JSON catalog document.
    pub fn from_json_str(source: &str) -> Result<Self, CatalogError> {
        serde_json::from_str(source).map_err(|e| CatalogError::Parse {
            source_name: "<json>".to_string(),
            reason: e.to_string(),
        })
    }

    /// Read and parse a catalog document from disk.
    ///
    /// `.yaml`/`.yml` files are parsed as YAML and `.json` files as JSON.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let source_name = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: source_name.clone(),
            source: e,
        })?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parsed = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
            Some("json") => serde_json::from_str(&content).map_err(|e| e.to_string()),
            _ => {
                return Err(CatalogError::UnsupportedFormat { path: source_name });
            }
        };
        parsed.map_err(|reason| CatalogError::Parse {
            source_name,
            reason,
        })
    }
}
