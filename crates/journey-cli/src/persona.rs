//! # Persona Subcommand
//!
//! Without an id, lists every persona journey. With an id, shows the
//! journey path, primary tools, and progress along the path.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use journey_catalog::PersonaJourney;
use journey_engine::{journey_progress, PersonaJourneyProgress};

use crate::context::{CliContext, CompletedArgs};

/// Arguments for the persona subcommand.
#[derive(Args, Debug)]
pub struct PersonaArgs {
    /// Persona id to show.
    pub id: Option<String>,

    #[command(flatten)]
    pub completed: CompletedArgs,
}

#[derive(Debug, Serialize)]
struct PersonaView<'a> {
    journey: &'a PersonaJourney,
    progress: PersonaJourneyProgress,
}

/// Execute the persona subcommand.
pub fn run_persona(args: &PersonaArgs, ctx: &CliContext) -> Result<u8> {
    let Some(id) = &args.id else {
        return list_personas(ctx);
    };
    let catalog = &ctx.catalog;
    let Some(journey) = catalog.persona_journey(id) else {
        eprintln!("No persona with id '{id}'");
        return Ok(1);
    };
    let completed = args.completed.resolve()?;
    let Some(progress) = journey_progress(catalog, id, &completed) else {
        eprintln!("No persona with id '{id}'");
        return Ok(1);
    };

    if ctx.json {
        ctx.print_json(&PersonaView { journey, progress })?;
        return Ok(0);
    }

    println!("{} ({})", journey.name, journey.persona_id);
    if !journey.description.is_empty() {
        println!("  {}", journey.description);
    }
    println!();
    println!("Journey path:");
    for (step, tool) in catalog.journey_tools(id).iter().enumerate() {
        let mark = if completed.contains(tool.id.as_str()) { "x" } else { " " };
        println!("  [{mark}] {}. {} ({})", step + 1, tool.name, tool.id);
    }
    let primary: Vec<&str> = catalog.primary_tools(id).iter().map(|t| t.as_str()).collect();
    if !primary.is_empty() {
        println!();
        println!("Primary tools: {}", primary.join(", "));
    }
    println!();
    println!(
        "Progress: {}% ({}/{})",
        progress.percentage, progress.completed, progress.total
    );
    if let Some(next) = &progress.next_step {
        println!("Next step: {next}");
    }
    Ok(0)
}

fn list_personas(ctx: &CliContext) -> Result<u8> {
    let personas = ctx.catalog.personas();
    if ctx.json {
        ctx.print_json(&personas)?;
        return Ok(0);
    }
    for persona in personas {
        println!(
            "  {:<24} {} ({} step(s))",
            persona.persona_id.as_str(),
            persona.name,
            persona.journey_path.len()
        );
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_personas() {
        let ctx = CliContext::load(None, None, false).unwrap();
        let args = PersonaArgs {
            id: None,
            completed: CompletedArgs::default(),
        };
        assert_eq!(run_persona(&args, &ctx).unwrap(), 0);
    }

    #[test]
    fn test_show_persona_with_progress() {
        let ctx = CliContext::load(None, None, true).unwrap();
        let args = PersonaArgs {
            id: Some("small-business".into()),
            completed: CompletedArgs {
                completed: vec!["privacy-assessment".into()],
                completed_file: None,
            },
        };
        assert_eq!(run_persona(&args, &ctx).unwrap(), 0);
    }

    #[test]
    fn test_unknown_persona_exits_one() {
        let ctx = CliContext::load(None, None, false).unwrap();
        let args = PersonaArgs {
            id: Some("astronaut".into()),
            completed: CompletedArgs::default(),
        };
        assert_eq!(run_persona(&args, &ctx).unwrap(), 1);
    }
}
