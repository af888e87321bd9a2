//! # journey-engine — Compliance Journey Engine
//!
//! Pure computations over a frozen [`ToolCatalog`](journey_catalog::ToolCatalog)
//! and a caller-supplied [`CompletedSet`](journey_core::CompletedSet):
//!
//! - **Progress** (`progress.rs`): per-phase and overall completion.
//!
//! - **Recommendations** (`recommend.rs`): top-N next tools, guided
//!   single-step resolution, unlock status.
//!
//! - **Journeys** (`journey.rs`): progress along a persona's journey path.
//!
//! ## Concurrency
//!
//! Nothing here holds state between calls. The catalog is immutable and
//! the completed-set is only borrowed, so any number of callers may share
//! one catalog (by reference or `Arc`) without coordination.
//!
//! ## Crate Policy
//!
//! - Entitlement-agnostic: recommendations ignore subscription gating.
//! - Never mutates or retains the completed-set.

pub mod journey;
pub mod progress;
pub mod recommend;

pub use journey::{journey_progress, PersonaJourneyProgress};
pub use progress::{compute_progress, percentage, PhaseProgress, ProgressReport};
pub use recommend::{
    recommend_next, recommend_next_for_persona, recommended_next, unlock_status,
    UnlockStatus, DEFAULT_RECOMMENDATION_LIMIT,
};
