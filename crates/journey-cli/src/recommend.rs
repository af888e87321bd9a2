//! # Recommend and Next Subcommands
//!
//! `recommend` lists the tools a user can start now. `next` resolves the
//! single hand-off after finishing a tool, as guided flows use it.

use anyhow::Result;
use clap::Args;

use journey_catalog::Tool;
use journey_engine::{
    recommend_next, recommend_next_for_persona, recommended_next, DEFAULT_RECOMMENDATION_LIMIT,
};

use crate::context::{print_tool_lines, CliContext, CompletedArgs, ToolSummary};

/// Arguments for the recommend subcommand.
#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Maximum number of recommendations.
    #[arg(long, default_value_t = DEFAULT_RECOMMENDATION_LIMIT)]
    pub limit: usize,

    /// Rank tools for this persona first.
    #[arg(long)]
    pub persona: Option<String>,

    #[command(flatten)]
    pub completed: CompletedArgs,
}

/// Arguments for the next subcommand.
#[derive(Args, Debug)]
pub struct NextArgs {
    /// The tool just finished.
    pub tool: String,

    /// Prefer follow-ups relevant to this persona.
    #[arg(long)]
    pub persona: Option<String>,
}

/// Execute the recommend subcommand.
pub fn run_recommend(args: &RecommendArgs, ctx: &CliContext) -> Result<u8> {
    let completed = args.completed.resolve()?;
    let recs: Vec<&Tool> = match &args.persona {
        Some(persona) => {
            if ctx.catalog.persona_journey(persona).is_none() {
                tracing::warn!(persona = %persona, "unknown persona, ranking without persona preference");
            }
            recommend_next_for_persona(&ctx.catalog, &completed, persona, args.limit)
        }
        None => recommend_next(&ctx.catalog, &completed, args.limit),
    };

    if ctx.json {
        let summaries: Vec<ToolSummary<'_>> = recs.iter().map(|t| ToolSummary::from(*t)).collect();
        ctx.print_json(&summaries)?;
        return Ok(0);
    }

    if recs.is_empty() {
        println!("Nothing left to recommend.");
    } else {
        println!("Recommended next:");
        print_tool_lines(&recs);
    }
    Ok(0)
}

/// Execute the next subcommand.
///
/// Exits 1 when `tool` is not in the catalog. A known tool at the end of
/// the lifecycle exits 0 with no follow-up.
pub fn run_next(args: &NextArgs, ctx: &CliContext) -> Result<u8> {
    if !ctx.catalog.contains_tool(&args.tool) {
        eprintln!("No tool with id '{}'", args.tool);
        return Ok(1);
    }
    let next = recommended_next(&ctx.catalog, &args.tool, args.persona.as_deref());

    if ctx.json {
        ctx.print_json(&next.map(ToolSummary::from))?;
        return Ok(0);
    }

    match next {
        Some(tool) => println!("Next: {} ({})", tool.name, tool.id),
        None => println!("End of the journey: nothing follows {}.", args.tool),
    }
    Ok(0)
}
