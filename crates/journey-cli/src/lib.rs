//! # journey-cli — CLI for the Compliance Journey Engine
//!
//! Provides the `journey` command-line interface over a tool catalog: the
//! bundled privacy catalog by default, or any YAML/JSON catalog passed
//! with `--catalog`.
//!
//! ## Subcommands
//!
//! - `journey validate`: Load the catalog and report a summary.
//! - `journey tools`: List or filter tools, or show one tool's unlock status.
//! - `journey progress`: Per-phase and overall completion.
//! - `journey recommend`: Tools the user can start now.
//! - `journey next`: The hand-off after finishing a tool.
//! - `journey persona`: Persona journeys and progress along them.
//!
//! Every subcommand accepts `--json` for machine-readable output.
//! Completed tools come from `--completed a,b,c` or `--completed-file`:
//!
//! ```bash
//! journey progress --completed privacy-assessment,data-discovery
//! journey recommend --persona small-business --completed-file done.json
//! journey next data-mapping --persona legal-professional
//! ```

pub mod context;
pub mod persona;
pub mod progress;
pub mod recommend;
pub mod tools;
pub mod validate;

pub use context::CliContext;
