//! # Progress Calculator
//!
//! Computes per-phase and overall completion for one user's completed-set.
//!
//! ## Algorithm
//!
//! For every phase in lifecycle order, with `T = tools_by_phase(phase)`:
//!
//! ```text
//! completed  = |T ∩ done|
//! percentage = round_half_up(100 · completed / |T|)   if |T| > 0
//!            = 0                                       otherwise
//! overall    = round_half_up(100 · |catalog ∩ done| / |catalog|)
//! ```
//!
//! Ids in the completed-set that are not catalog tools contribute to
//! neither numerator nor denominator. The result depends only on the set
//! contents, never on insertion order.

use journey_catalog::ToolCatalog;
use journey_core::{CompletedSet, PhaseId};
use serde::{Deserialize, Serialize};

/// Completion of a single phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseProgress {
    pub phase_id: PhaseId,
    pub name: String,
    pub order: u32,
    /// Number of tools in the phase.
    pub total: usize,
    /// Number of those tools in the completed-set.
    pub completed: usize,
    /// `0..=100`.
    pub percentage: u8,
}

impl PhaseProgress {
    /// Whether the phase has tools and all of them are completed.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// Completion across the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressReport {
    /// One entry per phase, in ascending phase order.
    pub phases: Vec<PhaseProgress>,
    /// Number of tools in the catalog.
    pub total: usize,
    /// Number of catalog tools in the completed-set.
    pub completed: usize,
    /// `0..=100`.
    pub overall: u8,
}

impl ProgressReport {
    /// Progress of a single phase.
    pub fn phase(&self, id: &str) -> Option<&PhaseProgress> {
        self.phases.iter().find(|p| p.phase_id.as_str() == id)
    }

    /// The earliest phase that has tools and is not yet complete.
    pub fn current_phase(&self) -> Option<&PhaseProgress> {
        self.phases.iter().find(|p| p.total > 0 && !p.is_complete())
    }

    /// Whether every catalog tool is completed.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }
}

/// `round(100 · part / whole)` with half-up rounding; `0` when `whole == 0`.
pub fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    let part = part.min(whole) as u64;
    let whole = whole as u64;
    ((200 * part + whole) / (2 * whole)) as u8
}

/// Compute the progress report for a completed-set.
pub fn compute_progress(catalog: &ToolCatalog, completed: &CompletedSet) -> ProgressReport {
    let phases = catalog
        .phases()
        .iter()
        .map(|phase| {
            let tools = catalog.tools_by_phase(phase.id.as_str());
            let done = tools
                .iter()
                .filter(|t| completed.contains(t.id.as_str()))
                .count();
            PhaseProgress {
                phase_id: phase.id.clone(),
                name: phase.name.clone(),
                order: phase.order,
                total: tools.len(),
                completed: done,
                percentage: percentage(done, tools.len()),
            }
        })
        .collect();

    let total = catalog.len();
    let done = catalog
        .tools()
        .iter()
        .filter(|t| completed.contains(t.id.as_str()))
        .count();

    ProgressReport {
        phases,
        total,
        completed: done,
        overall: percentage(done, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journey_catalog::CatalogOptions;
    use journey_core::ToolId;

    const CATALOG: &str = r#"
phases:
  - { id: b, name: B, order: 2, default_criticality: high }
  - { id: a, name: A, order: 1, default_criticality: critical }
  - { id: empty, name: Empty, order: 3, default_criticality: low }
tools:
  - { id: a1, name: A1, phase: a, position: primary }
  - { id: a2, name: A2, phase: a, position: secondary }
  - { id: a3, name: A3, phase: a, position: tertiary }
  - { id: b1, name: B1, phase: b, position: primary, prerequisites: [a1] }
"#;

    fn catalog() -> ToolCatalog {
        ToolCatalog::from_yaml_str(CATALOG, &CatalogOptions::default()).unwrap()
    }

    fn done(ids: &[&str]) -> CompletedSet {
        ids.iter().map(|s| ToolId::new(*s).unwrap()).collect()
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(0, 3), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(3, 3), 100);
        assert_eq!(percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(percentage(1, 200), 1); // 0.5 rounds up
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn test_empty_completed_set() {
        let report = compute_progress(&catalog(), &CompletedSet::new());
        let a = report.phase("a").unwrap();
        assert_eq!((a.total, a.completed, a.percentage), (3, 0, 0));
        assert_eq!(report.overall, 0);
        assert_eq!(report.total, 4);
    }

    #[test]
    fn test_phases_reported_in_order() {
        let report = compute_progress(&catalog(), &CompletedSet::new());
        let order: Vec<&str> = report.phases.iter().map(|p| p.phase_id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "empty"]);
    }

    #[test]
    fn test_empty_phase_is_zero_percent() {
        let report = compute_progress(&catalog(), &done(&["a1", "a2", "a3", "b1"]));
        let empty = report.phase("empty").unwrap();
        assert_eq!((empty.total, empty.percentage), (0, 0));
        assert!(!empty.is_complete());
        assert_eq!(report.overall, 100);
        assert!(report.is_complete());
    }

    #[test]
    fn test_partial_progress() {
        let report = compute_progress(&catalog(), &done(&["a1", "a3"]));
        assert_eq!(report.phase("a").unwrap().percentage, 67);
        assert_eq!(report.phase("b").unwrap().percentage, 0);
        assert_eq!(report.overall, 50);
    }

    #[test]
    fn test_unknown_ids_ignored() {
        let report = compute_progress(&catalog(), &done(&["a1", "not-a-tool", "another"]));
        assert_eq!(report.total, 4);
        assert_eq!(report.completed, 1);
        assert_eq!(report.overall, 25);
    }

    #[test]
    fn test_current_phase() {
        let c = catalog();
        assert_eq!(
            compute_progress(&c, &CompletedSet::new()).current_phase().unwrap().phase_id.as_str(),
            "a"
        );
        assert_eq!(
            compute_progress(&c, &done(&["a1", "a2", "a3"])).current_phase().unwrap().phase_id.as_str(),
            "b"
        );
        // Empty trailing phase never becomes "current".
        assert!(compute_progress(&c, &done(&["a1", "a2", "a3", "b1"])).current_phase().is_none());
    }

    #[test]
    fn test_report_serializes() {
        let report = compute_progress(&catalog(), &done(&["a1"]));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["overall"], 25);
        assert_eq!(json["phases"][0]["phase_id"], "a");
    }
}
