//! # Tools Subcommand
//!
//! Catalog queries: list tools filtered by phase, criticality, or persona,
//! or show a single tool with its unlock status.

use anyhow::{bail, Result};
use clap::Args;

use journey_catalog::{Tool, ToolCatalog};
use journey_core::CriticalityLevel;
use journey_engine::{unlock_status, UnlockStatus};

use crate::context::{print_tool_lines, CliContext, CompletedArgs, ToolSummary};

/// Arguments for the tools subcommand.
#[derive(Args, Debug)]
pub struct ToolsArgs {
    /// Show a single tool by id.
    pub id: Option<String>,

    /// Only tools in this phase, in position order.
    #[arg(long, conflicts_with = "id")]
    pub phase: Option<String>,

    /// Only tools of this criticality (critical, high, medium, low).
    #[arg(long, conflicts_with = "id")]
    pub criticality: Option<CriticalityLevel>,

    /// Only tools relevant to this persona.
    #[arg(long, conflicts_with = "id")]
    pub persona: Option<String>,

    #[command(flatten)]
    pub completed: CompletedArgs,
}

/// Execute the tools subcommand.
pub fn run_tools(args: &ToolsArgs, ctx: &CliContext) -> Result<u8> {
    if let Some(id) = &args.id {
        return show_tool(id, args, ctx);
    }

    let tools = select_tools(args, &ctx.catalog)?;

    if ctx.json {
        let summaries: Vec<ToolSummary<'_>> = tools.iter().map(|t| ToolSummary::from(*t)).collect();
        ctx.print_json(&summaries)?;
    } else {
        print_tool_lines(&tools);
        println!();
        println!("Total: {} tool(s)", tools.len());
    }
    Ok(0)
}

/// Apply the list filters. The first filter given picks the catalog
/// accessor; any others narrow its result.
fn select_tools<'c>(args: &ToolsArgs, catalog: &'c ToolCatalog) -> Result<Vec<&'c Tool>> {
    let mut tools: Vec<&Tool> = match (&args.phase, args.criticality, &args.persona) {
        (Some(phase), _, _) => {
            if catalog.phase_by_id(phase).is_none() {
                bail!("unknown phase '{phase}'");
            }
            catalog.tools_by_phase(phase)
        }
        (None, Some(level), _) => catalog.tools_by_criticality(level),
        (None, None, Some(persona)) => catalog.tools_by_persona(persona),
        (None, None, None) => catalog.tools().iter().collect(),
    };
    if let Some(level) = args.criticality {
        tools.retain(|t| t.criticality == level);
    }
    if let Some(persona) = &args.persona {
        tools.retain(|t| t.is_for_persona(persona));
    }
    Ok(tools)
}

fn show_tool(id: &str, args: &ToolsArgs, ctx: &CliContext) -> Result<u8> {
    let catalog = &ctx.catalog;
    let Some(tool) = catalog.tool_by_id(id) else {
        eprintln!("No tool with id '{id}'");
        return Ok(1);
    };
    let completed = args.completed.resolve()?;
    let status = unlock_status(catalog, id, &completed);

    if ctx.json {
        ctx.print_json(&serde_json::json!({ "tool": tool, "unlock": status }))?;
        return Ok(0);
    }

    println!("{} ({})", tool.name, tool.id);
    println!("  phase:        {}", tool.phase);
    println!("  criticality:  {}", tool.criticality);
    println!("  position:     {}", tool.position);
    if !tool.metadata.description.is_empty() {
        println!("  description:  {}", tool.metadata.description);
    }
    if let Some(estimate) = &tool.metadata.time_estimate {
        println!("  time:         {estimate}");
    }
    if !tool.metadata.regulations.is_empty() {
        println!("  regulations:  {}", tool.metadata.regulations.join(", "));
    }
    if !tool.prerequisites.is_empty() {
        let closure: Vec<&str> = catalog
            .prerequisite_closure(id)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        println!("  requires:     {}", closure.join(" -> "));
    }
    let dependents: Vec<&str> = catalog.dependents_of(id).iter().map(|t| t.id.as_str()).collect();
    if !dependents.is_empty() {
        println!("  unlocks:      {}", dependents.join(", "));
    }
    if let Some(status) = status {
        println!("  status:       {}", render_status(&status));
    }
    Ok(0)
}

fn render_status(status: &UnlockStatus) -> String {
    match status {
        UnlockStatus::Completed => "completed".to_string(),
        UnlockStatus::Unlocked => "unlocked".to_string(),
        UnlockStatus::Locked { missing } => {
            let missing: Vec<&str> = missing.iter().map(|t| t.as_str()).collect();
            format!("locked (missing: {})", missing.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ToolsArgs {
        ToolsArgs {
            id: None,
            phase: None,
            criticality: None,
            persona: None,
            completed: CompletedArgs::default(),
        }
    }

    #[test]
    fn test_list_all_tools() {
        let ctx = CliContext::load(None, None, false).unwrap();
        assert_eq!(run_tools(&args(), &ctx).unwrap(), 0);
    }

    fn ids<'a>(tools: &[&'a Tool]) -> Vec<&'a str> {
        tools.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_criticality_filter_matches_catalog_accessor() {
        let ctx = CliContext::load(None, None, false).unwrap();
        let args = ToolsArgs {
            criticality: Some(CriticalityLevel::High),
            ..args()
        };
        let selected = select_tools(&args, &ctx.catalog).unwrap();
        assert!(!selected.is_empty());
        assert_eq!(
            ids(&selected),
            ids(&ctx.catalog.tools_by_criticality(CriticalityLevel::High))
        );
    }

    #[test]
    fn test_persona_filter_matches_catalog_accessor() {
        let ctx = CliContext::load(None, None, false).unwrap();
        let args = ToolsArgs {
            persona: Some("small-business".into()),
            ..args()
        };
        let selected = select_tools(&args, &ctx.catalog).unwrap();
        assert!(!selected.is_empty());
        assert_eq!(ids(&selected), ids(&ctx.catalog.tools_by_persona("small-business")));
    }

    #[test]
    fn test_combined_filters_narrow_phase_listing() {
        let ctx = CliContext::load(None, None, false).unwrap();
        let args = ToolsArgs {
            phase: Some("discovery".into()),
            criticality: Some(CriticalityLevel::Critical),
            ..args()
        };
        let selected = select_tools(&args, &ctx.catalog).unwrap();
        assert!(selected
            .iter()
            .all(|t| t.phase.as_str() == "discovery" && t.criticality == CriticalityLevel::Critical));
        let phase_tools = ctx.catalog.tools_by_phase("discovery");
        assert!(selected.len() <= phase_tools.len());
    }

    #[test]
    fn test_unknown_phase_is_an_error() {
        let ctx = CliContext::load(None, None, false).unwrap();
        let args = ToolsArgs {
            phase: Some("nowhere".into()),
            ..args()
        };
        assert!(run_tools(&args, &ctx).is_err());
    }

    #[test]
    fn test_show_unknown_tool_exits_one() {
        let ctx = CliContext::load(None, None, true).unwrap();
        let args = ToolsArgs {
            id: Some("no-such-tool".into()),
            ..args()
        };
        assert_eq!(run_tools(&args, &ctx).unwrap(), 1);
    }

    #[test]
    fn test_show_tool_with_completed() {
        let ctx = CliContext::load(None, None, false).unwrap();
        let args = ToolsArgs {
            id: Some("dpia-generator".into()),
            completed: CompletedArgs {
                completed: vec!["risk-assessment".into()],
                completed_file: None,
            },
            ..args()
        };
        assert_eq!(run_tools(&args, &ctx).unwrap(), 0);
    }

    #[test]
    fn test_render_locked_lists_missing() {
        let status = UnlockStatus::Locked {
            missing: vec![journey_core::ToolId::new("data-mapping").unwrap()],
        };
        assert_eq!(render_status(&status), "locked (missing: data-mapping)");
    }
}
