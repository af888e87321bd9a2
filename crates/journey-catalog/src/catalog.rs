//! # Tool Catalog & Query Layer
//!
//! The frozen, validated catalog. Constructed once by [`ToolCatalog::load`]
//! and shared read-only afterwards (by reference or `Arc`). There is no
//! mutation API: a catalog is either fully valid or never exists.
//!
//! All query operations are pure and total. Not-found is an ordinary
//! outcome (`None` or an empty sequence), never an error.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use journey_core::{CompletedSet, CriticalityLevel, PersonaId, PhaseId, ToolId};

use crate::document::CatalogDocument;
use crate::error::{CatalogError, ValidationViolations};
use crate::fingerprint::CatalogFingerprint;
use crate::model::{Phase, PersonaJourney, Tool};
use crate::options::CatalogOptions;
use crate::validation::validate_document;

/// An immutable, validated tool catalog.
#[derive(Debug, Clone)]
pub struct ToolCatalog {
    /// Phases sorted by ascending `order`.
    pub(crate) phases: Vec<Phase>,
    /// Tools in catalog (declaration) order.
    pub(crate) tools: Vec<Tool>,
    pub(crate) personas: Vec<PersonaJourney>,
    tool_index: HashMap<ToolId, usize>,
    phase_index: HashMap<PhaseId, usize>,
    pub(crate) persona_index: HashMap<PersonaId, usize>,
    fingerprint: CatalogFingerprint,
}

impl ToolCatalog {
    /// Validate a document and freeze it into a catalog.
    ///
    /// Fails with [`CatalogError::Validation`] listing every violation if
    /// the document breaks any catalog invariant.
    pub fn load(doc: CatalogDocument, options: &CatalogOptions) -> Result<Self, CatalogError> {
        let result = validate_document(&doc, options);
        if !result.is_valid() {
            tracing::error!(
                violations = result.violations.len(),
                "catalog validation failed"
            );
            return Err(CatalogError::Validation(ValidationViolations(
                result.violations,
            )));
        }
        for warning in &result.warnings {
            tracing::warn!(%warning, "tolerated catalog finding; affected tool stays locked");
        }

        let fingerprint = CatalogFingerprint::of(&doc)?;

        let mut phases = doc.phases;
        phases.sort_by_key(|p| p.order);
        let phase_index: HashMap<PhaseId, usize> = phases
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();

        let tools: Vec<Tool> = doc
            .tools
            .iter()
            .map(|entry| entry.resolve(phase_index.get(entry.phase.as_str()).map(|&i| &phases[i])))
            .collect();
        let tool_index = tools
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.clone(), i))
            .collect();

        let personas = doc.personas;
        let persona_index = personas
            .iter()
            .enumerate()
            .map(|(i, p)| (p.persona_id.clone(), i))
            .collect();

        tracing::info!(
            phases = phases.len(),
            tools = tools.len(),
            personas = personas.len(),
            %fingerprint,
            "tool catalog loaded"
        );

        Ok(Self {
            phases,
            tools,
            personas,
            tool_index,
            phase_index,
            persona_index,
            fingerprint,
        })
    }

    /// Parse and load a YAML catalog.
    pub fn from_yaml_str(source: &str, options: &CatalogOptions) -> Result<Self, CatalogError> {
        Self::load(CatalogDocument::from_yaml_str(source)?, options)
    }

    /// Read, parse, and load a catalog file (`.yaml`, `.yml` or `.json`).
    pub fn from_path(path: &Path, options: &CatalogOptions) -> Result<Self, CatalogError> {
        Self::load(CatalogDocument::from_path(path)?, options)
    }

    /// Content fingerprint of the source document.
    pub fn fingerprint(&self) -> CatalogFingerprint {
        self.fingerprint
    }

    /// All tools in catalog order.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// All phases in ascending `order`.
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    /// Number of tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Look up a tool.
    pub fn tool_by_id(&self, id: &str) -> Option<&Tool> {
        self.tool_index.get(id).map(|&i| &self.tools[i])
    }

    /// Whether `id` names a tool in this catalog.
    pub fn contains_tool(&self, id: &str) -> bool {
        self.tool_index.contains_key(id)
    }

    /// Look up a phase.
    pub fn phase_by_id(&self, id: &str) -> Option<&Phase> {
        self.phase_index.get(id).map(|&i| &self.phases[i])
    }

    /// The phase that follows `id` in lifecycle order.
    pub fn next_phase(&self, id: &str) -> Option<&Phase> {
        self.phase_index.get(id).and_then(|&i| self.phases.get(i + 1))
    }

    /// Tools of a phase, ordered by position precedence (`emergency` first,
    /// then primary → quaternary). Equal positions keep catalog order.
    pub fn tools_by_phase(&self, phase: &str) -> Vec<&Tool> {
        let mut tools: Vec<&Tool> = self
            .tools
            .iter()
            .filter(|t| t.phase.as_str() == phase)
            .collect();
        tools.sort_by_key(|t| t.position.precedence());
        tools
    }

    /// Tools of the given criticality, in catalog order.
    pub fn tools_by_criticality(&self, level: CriticalityLevel) -> Vec<&Tool> {
        self.tools.iter().filter(|t| t.criticality == level).collect()
    }

    /// Tools relevant to a persona, in catalog order.
    pub fn tools_by_persona(&self, persona: &str) -> Vec<&Tool> {
        self.tools.iter().filter(|t| t.is_for_persona(persona)).collect()
    }

    /// Tools that list `id` as a prerequisite, in catalog order.
    pub fn dependents_of(&self, id: &str) -> Vec<&Tool> {
        self.tools.iter().filter(|t| t.requires(id)).collect()
    }

    /// Every transitive prerequisite of `id`, ordered so that each tool
    /// appears after all of its own prerequisites. Excludes `id` itself.
    /// Unknown tools yield an empty list.
    pub fn prerequisite_closure(&self, id: &str) -> Vec<&Tool> {
        let Some(root) = self.tool_by_id(id) else {
            return Vec::new();
        };
        let mut visited: HashSet<&str> = HashSet::new();
        let mut ordered = Vec::new();
        // (tool, next prerequisite index); post-order emit.
        let mut stack: Vec<(&Tool, usize)> = vec![(root, 0)];
        visited.insert(root.id.as_str());

        while let Some(frame) = stack.last_mut() {
            let (tool, edge) = *frame;
            if edge == tool.prerequisites.len() {
                stack.pop();
                if tool.id != root.id {
                    ordered.push(tool);
                }
                continue;
            }
            frame.1 += 1;
            if let Some(prereq) = self.tool_by_id(tool.prerequisites[edge].as_str()) {
                if visited.insert(prereq.id.as_str()) {
                    stack.push((prereq, 0));
                }
            }
        }
        ordered
    }

    /// Whether every prerequisite of `tool` is a catalog tool present in
    /// `completed`. A prerequisite unknown to the catalog is never
    /// satisfied.
    pub fn is_unlocked(&self, tool: &Tool, completed: &CompletedSet) -> bool {
        tool.prerequisites
            .iter()
            .all(|p| self.contains_tool(p.as_str()) && completed.contains(p.as_str()))
    }
}
