//! # Persona Journey Index
//!
//! Static persona → journey lookups over the frozen catalog. Presentation
//! layers use `primary_tools` to pre-highlight tools; the recommendation
//! engine uses persona membership only as a narrowing/bias step.

use journey_core::ToolId;

use crate::catalog::ToolCatalog;
use crate::model::{PersonaJourney, Tool};

impl ToolCatalog {
    /// All persona journeys, in declaration order.
    pub fn personas(&self) -> &[PersonaJourney] {
        &self.personas
    }

    /// Look up a persona journey.
    pub fn persona_journey(&self, persona: &str) -> Option<&PersonaJourney> {
        self.persona_index.get(persona).map(|&i| &self.personas[i])
    }

    /// The persona's primary tools. Empty for an unknown persona.
    pub fn primary_tools(&self, persona: &str) -> &[ToolId] {
        self.persona_journey(persona)
            .map(|j| j.primary_tools.as_slice())
            .unwrap_or(&[])
    }

    /// The persona's journey path resolved to catalog tools.
    pub fn journey_tools(&self, persona: &str) -> Vec<&Tool> {
        self.persona_journey(persona)
            .map(|j| {
                j.journey_path
                    .iter()
                    .filter_map(|id| self.tool_by_id(id.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }
}
