//! # Persona Journey Progress
//!
//! Completion of a persona's journey path, and the next step along it.

use journey_catalog::ToolCatalog;
use journey_core::{CompletedSet, PersonaId, ToolId};
use serde::{Deserialize, Serialize};

use crate::progress::percentage;

/// Completion of one persona's journey path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaJourneyProgress {
    pub persona_id: PersonaId,
    /// Number of steps on the path.
    pub total: usize,
    /// Number of path steps in the completed-set.
    pub completed: usize,
    pub percentage: u8,
    /// First path step not yet completed.
    pub next_step: Option<ToolId>,
}

/// Progress along a persona's journey path, or `None` for an unknown
/// persona.
pub fn journey_progress(
    catalog: &ToolCatalog,
    persona: &str,
    completed: &CompletedSet,
) -> Option<PersonaJourneyProgress> {
    let journey = catalog.persona_journey(persona)?;
    let steps = catalog.journey_tools(persona);
    let done = steps
        .iter()
        .filter(|t| completed.contains(t.id.as_str()))
        .count();
    let next_step = steps
        .iter()
        .find(|t| !completed.contains(t.id.as_str()))
        .map(|t| t.id.clone());

    Some(PersonaJourneyProgress {
        persona_id: journey.persona_id.clone(),
        total: steps.len(),
        completed: done,
        percentage: percentage(done, steps.len()),
        next_step,
    })
}
