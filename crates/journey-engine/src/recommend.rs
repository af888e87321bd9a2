//! # Recommendation Engine
//!
//! Two related queries over the catalog:
//!
//! - [`recommend_next`]: the top-N tools a user can start now.
//! - [`recommended_next`]: the single tool to hand off to after finishing
//!   a given tool, used by guided flows.
//!
//! Both are deterministic functions of their inputs. Every sort here is
//! stable, so tools with equal keys keep catalog order.

use journey_catalog::{Tool, ToolCatalog};
use journey_core::{CompletedSet, ToolId};
use serde::{Deserialize, Serialize};

/// Default number of tools returned by [`recommend_next`].
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 3;

/// Whether a tool can be started given a completed-set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UnlockStatus {
    /// Already in the completed-set.
    Completed,
    /// Every prerequisite is completed.
    Unlocked,
    /// Some prerequisites are outstanding, listed in declaration order.
    Locked { missing: Vec<ToolId> },
}

/// Sort key of a tool's phase. Validation guarantees every tool's phase
/// exists; `u32::MAX` only guards the type.
fn phase_order(catalog: &ToolCatalog, tool: &Tool) -> u32 {
    catalog
        .phase_by_id(tool.phase.as_str())
        .map(|p| p.order)
        .unwrap_or(u32::MAX)
}

/// Tools that are not completed and whose prerequisites are all completed,
/// in catalog order.
fn eligible<'c>(catalog: &'c ToolCatalog, completed: &CompletedSet) -> Vec<&'c Tool> {
    catalog
        .tools()
        .iter()
        .filter(|t| !completed.contains(t.id.as_str()))
        .filter(|t| catalog.is_unlocked(t, completed))
        .collect()
}

/// The first `limit` eligible tools ordered by `(phase order, criticality
/// rank)`.
///
/// Returns an empty list once every reachable tool is completed.
pub fn recommend_next<'c>(
    catalog: &'c ToolCatalog,
    completed: &CompletedSet,
    limit: usize,
) -> Vec<&'c Tool> {
    let mut candidates = eligible(catalog, completed);
    candidates.sort_by_key(|t| (phase_order(catalog, t), t.criticality.rank()));
    candidates.truncate(limit);
    tracing::debug!(
        completed = completed.len(),
        returned = candidates.len(),
        "computed next recommendations"
    );
    candidates
}

/// Like [`recommend_next`], but tools relevant to `persona` sort ahead of
/// the rest. An unknown persona matches no tools, which reduces this to
/// plain [`recommend_next`] ordering.
pub fn recommend_next_for_persona<'c>(
    catalog: &'c ToolCatalog,
    completed: &CompletedSet,
    persona: &str,
    limit: usize,
) -> Vec<&'c Tool> {
    let mut candidates = eligible(catalog, completed);
    candidates.sort_by_key(|t| {
        (
            !t.is_for_persona(persona),
            phase_order(catalog, t),
            t.criticality.rank(),
        )
    });
    candidates.truncate(limit);
    tracing::debug!(
        completed = completed.len(),
        persona,
        returned = candidates.len(),
        "computed persona recommendations"
    );
    candidates
}

/// Resolve the single next tool after `current`.
///
/// 1. Unknown `current` → `None`.
/// 2. If some tools list `current` as a prerequisite, pick the one with
///    the lowest criticality rank, preferring tools for `persona` when any
///    dependent matches it.
/// 3. Otherwise the successor of `current` within its phase.
/// 4. Otherwise the first tool of the next phase, or `None`.
pub fn recommended_next<'c>(
    catalog: &'c ToolCatalog,
    current: &str,
    persona: Option<&str>,
) -> Option<&'c Tool> {
    let current_tool = catalog.tool_by_id(current)?;

    let dependents = catalog.dependents_of(current);
    if !dependents.is_empty() {
        if let Some(persona) = persona {
            let narrowed = dependents
                .iter()
                .copied()
                .filter(|t| t.is_for_persona(persona))
                .min_by_key(|t| t.criticality.rank());
            if narrowed.is_some() {
                return narrowed;
            }
        }
        return dependents.into_iter().min_by_key(|t| t.criticality.rank());
    }

    let siblings = catalog.tools_by_phase(current_tool.phase.as_str());
    if let Some(index) = siblings.iter().position(|t| t.id == current_tool.id) {
        if let Some(next) = siblings.get(index + 1) {
            return Some(*next);
        }
    }

    let next_phase = catalog.next_phase(current_tool.phase.as_str())?;
    tracing::debug!(from = %current_tool.phase, to = %next_phase.id, "advancing to next phase");
    catalog.tools_by_phase(next_phase.id.as_str()).first().copied()
}

/// Unlock status of a tool, or `None` for an unknown tool.
pub fn unlock_status(
    catalog: &ToolCatalog,
    tool_id: &str,
    completed: &CompletedSet,
) -> Option<UnlockStatus> {
    let tool = catalog.tool_by_id(tool_id)?;
    if completed.contains(tool_id) {
        return Some(UnlockStatus::Completed);
    }
    let missing: Vec<ToolId> = tool
        .prerequisites
        .iter()
        .filter(|p| !(catalog.contains_tool(p.as_str()) && completed.contains(p.as_str())))
        .cloned()
        .collect();
    Some(if missing.is_empty() {
        UnlockStatus::Unlocked
    } else {
        UnlockStatus::Locked { missing }
    })
}
