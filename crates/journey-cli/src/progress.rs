//! # Progress Subcommand
//!
//! Per-phase and overall completion for a completed-set.

use anyhow::Result;
use clap::Args;

use journey_engine::compute_progress;

use crate::context::{CliContext, CompletedArgs};

/// Arguments for the progress subcommand.
#[derive(Args, Debug)]
pub struct ProgressArgs {
    #[command(flatten)]
    pub completed: CompletedArgs,
}

/// Execute the progress subcommand.
pub fn run_progress(args: &ProgressArgs, ctx: &CliContext) -> Result<u8> {
    let completed = args.completed.resolve()?;
    let report = compute_progress(&ctx.catalog, &completed);

    if ctx.json {
        ctx.print_json(&report)?;
        return Ok(0);
    }

    for phase in &report.phases {
        let marker = if phase.is_complete() { "done" } else { "" };
        println!(
            "  {:>2}. {:<24} {:>3}%  ({}/{}) {}",
            phase.order, phase.name, phase.percentage, phase.completed, phase.total, marker
        );
    }
    println!();
    println!(
        "Overall: {}% ({}/{})",
        report.overall, report.completed, report.total
    );
    match report.current_phase() {
        Some(current) => println!("Current phase: {}", current.name),
        None if report.is_complete() => println!("Every tool is completed."),
        None => {}
    }
    Ok(0)
}
