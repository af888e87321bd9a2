//! # journey-core — Foundational Types for the Compliance Journey Engine
//!
//! This crate is the leaf of the workspace DAG. It defines the primitives
//! shared by the catalog, the engine, and the CLI.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `ToolId`, `PhaseId`, `PersonaId`
//!    are validated newtypes. You cannot pass a `PhaseId` where a `ToolId`
//!    is expected.
//!
//! 2. **Explicit ordering.** `CriticalityLevel` and `ToolPosition` carry
//!    their sort keys as explicit ranks. Nothing relies on declaration or
//!    map iteration order.
//!
//! 3. **Caller-owned completion state.** `CompletedSet` is a plain value
//!    owned by the caller and only ever borrowed by the engine.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `journey-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod completed;
pub mod criticality;
pub mod error;
pub mod identity;
pub mod position;

pub use completed::CompletedSet;
pub use criticality::{CriticalityLevel, CRITICALITY_LEVEL_COUNT};
pub use error::JourneyError;
pub use identity::{PersonaId, PhaseId, ToolId};
pub use position::ToolPosition;
