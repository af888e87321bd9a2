//! # Catalog Validation
//!
//! Load-time checks that a [`CatalogDocument`] forms a usable catalog.
//!
//! ## Validation Layers
//!
//! 1. **Phases**: ids unique, `order` values unique (a total order).
//! 2. **Tools**: ids unique, every tool references a declared phase.
//! 3. **Prerequisites**: every prerequisite names a declared tool (subject
//!    to [`UnknownPrerequisitePolicy`]), no tool requires itself.
//! 4. **Acyclicity**: the prerequisite relation restricted to declared
//!    tools is a DAG. Each cycle is reported with its full path.
//! 5. **Personas**: ids unique, journey paths and primary tools reference
//!    declared tools, and neither list repeats a tool.
//!
//! Every layer runs even when an earlier one fails, so a single pass
//! reports every problem in the document.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use crate::document::{CatalogDocument, ToolEntry};
use crate::error::Violation;
use crate::options::{CatalogOptions, UnknownPrerequisitePolicy};

/// Outcome of validating a catalog document.
#[derive(Debug, Default)]
pub struct CatalogValidationResult {
    /// Fatal violations. Non-empty means the catalog must not load.
    pub violations: Vec<Violation>,
    /// Tolerated findings (unknown prerequisites under the `lock` policy).
    pub warnings: Vec<Violation>,
}

impl CatalogValidationResult {
    /// Whether the document may be loaded.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    fn add_violation(&mut self, v: Violation) {
        self.violations.push(v);
    }

    fn add_warning(&mut self, v: Violation) {
        self.warnings.push(v);
    }
}

/// Validate a catalog document against every catalog invariant.
pub fn validate_document(doc: &CatalogDocument, options: &CatalogOptions) -> CatalogValidationResult {
    let mut result = CatalogValidationResult::default();

    // 1. Phases
    let mut phase_ids = HashSet::new();
    let mut orders: HashMap<u32, &journey_core::PhaseId> = HashMap::new();
    for phase in &doc.phases {
        if !phase_ids.insert(phase.id.as_str()) {
            result.add_violation(Violation::DuplicatePhaseId(phase.id.clone()));
        }
        match orders.entry(phase.order) {
            Entry::Occupied(first) => result.add_violation(Violation::DuplicatePhaseOrder {
                order: phase.order,
                first: (*first.get()).clone(),
                second: phase.id.clone(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(&phase.id);
            }
        }
    }

    // 2. Tools. The index keeps the first occurrence of each id.
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (i, tool) in doc.tools.iter().enumerate() {
        if index.contains_key(tool.id.as_str()) {
            result.add_violation(Violation::DuplicateToolId(tool.id.clone()));
        } else {
            index.insert(tool.id.as_str(), i);
        }
        if !phase_ids.contains(tool.phase.as_str()) {
            result.add_violation(Violation::UnknownPhase {
                tool: tool.id.clone(),
                phase: tool.phase.clone(),
            });
        }
    }

    // 3. Prerequisite references
    for tool in &doc.tools {
        for prereq in &tool.prerequisites {
            if prereq == &tool.id {
                result.add_violation(Violation::SelfPrerequisite(tool.id.clone()));
            } else if !index.contains_key(prereq.as_str()) {
                let v = Violation::UnknownPrerequisite {
                    tool: tool.id.clone(),
                    prerequisite: prereq.clone(),
                };
                match options.unknown_prerequisites {
                    UnknownPrerequisitePolicy::Reject => result.add_violation(v),
                    UnknownPrerequisitePolicy::Lock => result.add_warning(v),
                }
            }
        }
    }

    // 4. Acyclicity
    for cycle in find_cycles(&doc.tools, &index) {
        result.add_violation(Violation::PrerequisiteCycle(cycle));
    }

    // 5. Personas
    let mut persona_ids = HashSet::new();
    for journey in &doc.personas {
        if !persona_ids.insert(journey.persona_id.as_str()) {
            result.add_violation(Violation::DuplicatePersona(journey.persona_id.clone()));
        }
        let mut reported = HashSet::new();
        for tool in journey.journey_path.iter().chain(&journey.primary_tools) {
            if !index.contains_key(tool.as_str()) && reported.insert(tool.as_str()) {
                result.add_violation(Violation::UnknownPersonaTool {
                    persona: journey.persona_id.clone(),
                    tool: tool.clone(),
                });
            }
        }
        for (list, tools) in [
            ("journey_path", &journey.journey_path),
            ("primary_tools", &journey.primary_tools),
        ] {
            let mut seen = HashSet::new();
            let mut repeated = HashSet::new();
            for tool in tools {
                if !seen.insert(tool.as_str()) && repeated.insert(tool.as_str()) {
                    result.add_violation(Violation::DuplicatePersonaStep {
                        persona: journey.persona_id.clone(),
                        list,
                        tool: tool.clone(),
                    });
                }
            }
        }
    }

    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    OnStack,
    Done,
}

/// Iterative three-colour DFS over `tool -> prerequisite` edges.
///
/// Edges to unknown tools and self-edges are skipped; both are reported
/// by the reference checks instead.
fn find_cycles(tools: &[ToolEntry], index: &HashMap<&str, usize>) -> Vec<Vec<journey_core::ToolId>> {
    let mut marks = vec![Mark::Unvisited; tools.len()];
    let mut cycles = Vec::new();

    for start in 0..tools.len() {
        if marks[start] != Mark::Unvisited {
            continue;
        }
        marks[start] = Mark::OnStack;
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];

        while let Some(frame) = stack.last_mut() {
            let (node, edge) = *frame;
            let prereqs = &tools[node].prerequisites;
            if edge == prereqs.len() {
                marks[node] = Mark::Done;
                stack.pop();
                continue;
            }
            frame.1 += 1;

            let Some(&next) = index.get(prereqs[edge].as_str()) else {
                continue;
            };
            if next == node {
                continue;
            }
            match marks[next] {
                Mark::Unvisited => {
                    marks[next] = Mark::OnStack;
                    stack.push((next, 0));
                }
                Mark::OnStack => {
                    let from = stack.iter().position(|(n, _)| *n == next).unwrap_or(0);
                    let mut path: Vec<_> = stack[from..].iter().map(|(n, _)| tools[*n].id.clone()).collect();
                    path.push(tools[next].id.clone());
                    cycles.push(path);
                }
                Mark::Done => {}
            }
        }
    }

    cycles
}
