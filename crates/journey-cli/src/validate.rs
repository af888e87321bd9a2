//! # Validate Subcommand
//!
//! Loads the catalog (which runs every load-time check) and reports a
//! summary. A catalog that fails validation never reaches this handler:
//! the load error propagates to `main` and exits non-zero.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::context::CliContext;

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {}

#[derive(Debug, Serialize)]
struct ValidationSummary {
    valid: bool,
    fingerprint: String,
    phases: usize,
    tools: usize,
    personas: usize,
}

/// Execute the validate subcommand.
pub fn run_validate(_args: &ValidateArgs, ctx: &CliContext) -> Result<u8> {
    let catalog = &ctx.catalog;
    let summary = ValidationSummary {
        valid: true,
        fingerprint: catalog.fingerprint().to_string(),
        phases: catalog.phases().len(),
        tools: catalog.len(),
        personas: catalog.personas().len(),
    };

    if ctx.json {
        ctx.print_json(&summary)?;
        return Ok(0);
    }

    println!("Catalog OK");
    println!("  fingerprint: {}", summary.fingerprint);
    println!("  phases:      {}", summary.phases);
    println!("  tools:       {}", summary.tools);
    println!("  personas:    {}", summary.personas);
    for phase in catalog.phases() {
        println!(
            "    {:>2}. {:<16} {} tool(s)",
            phase.order,
            phase.id.as_str(),
            catalog.tools_by_phase(phase.id.as_str()).len()
        );
    }
    Ok(0)
}
