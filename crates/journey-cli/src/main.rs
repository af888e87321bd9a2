//! # journey CLI entry point
//!
//! Parses command-line arguments, loads the catalog once, and dispatches
//! to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use journey_cli::context::CliContext;
use journey_cli::persona::{run_persona, PersonaArgs};
use journey_cli::progress::{run_progress, ProgressArgs};
use journey_cli::recommend::{run_next, run_recommend, NextArgs, RecommendArgs};
use journey_cli::tools::{run_tools, ToolsArgs};
use journey_cli::validate::{run_validate, ValidateArgs};

/// Compliance Journey Engine CLI
///
/// Phase-ordered tool catalog queries, progress tracking, and next-best
/// recommendations for privacy compliance journeys.
#[derive(Parser, Debug)]
#[command(name = "journey", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Catalog options file (YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file (YAML or JSON). Defaults to the bundled catalog.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load and validate the catalog.
    Validate(ValidateArgs),

    /// List, filter, or inspect catalog tools.
    Tools(ToolsArgs),

    /// Per-phase and overall completion.
    Progress(ProgressArgs),

    /// Tools that can be started now, most urgent first.
    Recommend(RecommendArgs),

    /// The tool to hand off to after finishing one.
    Next(NextArgs),

    /// Persona journeys.
    Persona(PersonaArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("journey CLI starting");

    let result = CliContext::load(cli.catalog.as_deref(), cli.config.as_deref(), cli.json)
        .and_then(|ctx| match &cli.command {
            Commands::Validate(args) => run_validate(args, &ctx),
            Commands::Tools(args) => run_tools(args, &ctx),
            Commands::Progress(args) => run_progress(args, &ctx),
            Commands::Recommend(args) => run_recommend(args, &ctx),
            Commands::Next(args) => run_next(args, &ctx),
            Commands::Persona(args) => run_persona(args, &ctx),
        });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use journey_core::CriticalityLevel;

    #[test]
    fn cli_parse_validate() {
        let cli = Cli::try_parse_from(["journey", "validate"]).unwrap();
        assert!(matches!(cli.command, Commands::Validate(_)));
        assert!(!cli.json);
        assert!(cli.catalog.is_none());
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "journey",
            "progress",
            "--json",
            "-vv",
            "--catalog",
            "custom.yaml",
            "--config",
            "options.yaml",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.catalog, Some(PathBuf::from("custom.yaml")));
        assert_eq!(cli.config, Some(PathBuf::from("options.yaml")));
    }

    #[test]
    fn cli_parse_tools_filters() {
        let cli = Cli::try_parse_from([
            "journey",
            "tools",
            "--phase",
            "discovery",
            "--criticality",
            "high",
            "--persona",
            "data-steward",
        ])
        .unwrap();
        if let Commands::Tools(args) = cli.command {
            assert!(args.id.is_none());
            assert_eq!(args.phase.as_deref(), Some("discovery"));
            assert_eq!(args.criticality, Some(CriticalityLevel::High));
            assert_eq!(args.persona.as_deref(), Some("data-steward"));
        } else {
            panic!("expected tools");
        }
    }

    #[test]
    fn cli_parse_tools_rejects_bad_criticality() {
        let result = Cli::try_parse_from(["journey", "tools", "--criticality", "urgent"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_tools_id_conflicts_with_filters() {
        let result =
            Cli::try_parse_from(["journey", "tools", "dsar-manager", "--phase", "operations"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parse_recommend_defaults() {
        let cli = Cli::try_parse_from(["journey", "recommend"]).unwrap();
        if let Commands::Recommend(args) = cli.command {
            assert_eq!(args.limit, 3);
            assert!(args.persona.is_none());
            assert!(args.completed.completed.is_empty());
        } else {
            panic!("expected recommend");
        }
    }

    #[test]
    fn cli_parse_recommend_completed_list() {
        let cli = Cli::try_parse_from([
            "journey",
            "recommend",
            "--limit",
            "5",
            "--completed",
            "privacy-assessment,data-discovery",
        ])
        .unwrap();
        if let Commands::Recommend(args) = cli.command {
            assert_eq!(args.limit, 5);
            assert_eq!(
                args.completed.completed,
                vec!["privacy-assessment".to_string(), "data-discovery".to_string()]
            );
        } else {
            panic!("expected recommend");
        }
    }

    #[test]
    fn cli_parse_next_requires_tool() {
        assert!(Cli::try_parse_from(["journey", "next"]).is_err());
        let cli =
            Cli::try_parse_from(["journey", "next", "data-mapping", "--persona", "legal-professional"])
                .unwrap();
        if let Commands::Next(args) = cli.command {
            assert_eq!(args.tool, "data-mapping");
            assert_eq!(args.persona.as_deref(), Some("legal-professional"));
        } else {
            panic!("expected next");
        }
    }

    #[test]
    fn cli_parse_persona_optional_id() {
        let cli = Cli::try_parse_from(["journey", "persona"]).unwrap();
        assert!(matches!(cli.command, Commands::Persona(ref a) if a.id.is_none()));
        let cli = Cli::try_parse_from(["journey", "persona", "small-business"]).unwrap();
        assert!(matches!(cli.command, Commands::Persona(ref a) if a.id.as_deref() == Some("small-business")));
    }

    #[test]
    fn cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["journey"]).is_err());
    }
}
