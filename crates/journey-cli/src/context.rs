//! # Shared CLI Context
//!
//! Catalog resolution, completed-set input, and output formatting shared by
//! every subcommand.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use journey_catalog::{CatalogOptions, Tool, ToolCatalog};
use journey_core::{CompletedSet, ToolId};

/// Everything a subcommand handler needs.
#[derive(Debug)]
pub struct CliContext {
    pub catalog: ToolCatalog,
    /// Emit JSON instead of text.
    pub json: bool,
}

impl CliContext {
    /// Load the catalog named by `--catalog` (or the bundled one), applying
    /// options from `--config` when given.
    pub fn load(catalog: Option<&Path>, config: Option<&Path>, json: bool) -> Result<Self> {
        let options = match config {
            Some(path) => CatalogOptions::from_path(path)
                .with_context(|| format!("loading options from {}", path.display()))?,
            None => CatalogOptions::default(),
        };
        let catalog = match catalog {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading catalog from file");
                ToolCatalog::from_path(path, &options)
                    .with_context(|| format!("loading catalog {}", path.display()))?
            }
            None => ToolCatalog::bundled().context("loading bundled catalog")?,
        };
        Ok(Self { catalog, json })
    }

    /// Print `value` as pretty JSON.
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

/// Completed-set input, supplied inline or as a JSON array file exported
/// from the completion store.
#[derive(Args, Debug, Default, Clone)]
pub struct CompletedArgs {
    /// Completed tool ids, comma-separated.
    #[arg(long, value_delimiter = ',')]
    pub completed: Vec<String>,

    /// JSON file holding an array of completed tool ids.
    #[arg(long)]
    pub completed_file: Option<PathBuf>,
}

impl CompletedArgs {
    /// Merge inline ids and file ids into one completed-set.
    pub fn resolve(&self) -> Result<CompletedSet> {
        let mut set = match &self.completed_file {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str::<CompletedSet>(&content)
                    .with_context(|| format!("parsing completed ids in {}", path.display()))?
            }
            None => CompletedSet::new(),
        };
        for raw in &self.completed {
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }
            set.insert(ToolId::new(raw).with_context(|| format!("invalid tool id {raw:?}"))?);
        }
        Ok(set)
    }
}

/// Compact JSON view of a tool for list output.
#[derive(Debug, Serialize)]
pub struct ToolSummary<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub phase: &'a str,
    pub criticality: &'static str,
    pub position: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<&'a str>,
}

impl<'a> From<&'a Tool> for ToolSummary<'a> {
    fn from(tool: &'a Tool) -> Self {
        Self {
            id: tool.id.as_str(),
            name: &tool.name,
            phase: tool.phase.as_str(),
            criticality: tool.criticality.as_str(),
            position: tool.position.as_str(),
            path: tool.metadata.path.as_deref(),
        }
    }
}

/// One text line per tool: `id  [criticality]  name (phase)`.
pub fn print_tool_lines(tools: &[&Tool]) {
    for tool in tools {
        println!(
            "  {:<28} [{:<8}] {} ({})",
            tool.id.as_str(),
            tool.criticality.as_str(),
            tool.name,
            tool.phase
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_inline_and_file_merge() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("done.json");
        std::fs::write(&file, r#"["data-discovery", "privacy-assessment"]"#).unwrap();
        let args = CompletedArgs {
            completed: vec!["gap-analysis".into(), " ".into(), "privacy-assessment".into()],
            completed_file: Some(file),
        };
        let set = args.resolve().unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains("gap-analysis"));
    }

    #[test]
    fn test_completed_file_must_be_array() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("done.json");
        std::fs::write(&file, r#"{"completed": []}"#).unwrap();
        let args = CompletedArgs {
            completed: Vec::new(),
            completed_file: Some(file),
        };
        assert!(args.resolve().is_err());
    }

    #[test]
    fn test_context_loads_bundled() {
        let ctx = CliContext::load(None, None, false).unwrap();
        assert!(!ctx.catalog.is_empty());
    }

    #[test]
    fn test_context_applies_lock_policy() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("catalog.yaml");
        std::fs::write(
            &catalog,
            r#"
phases:
  - { id: p, name: P, order: 1, default_criticality: high }
tools:
  - { id: a, name: A, phase: p, position: primary, prerequisites: [retired] }
"#,
        )
        .unwrap();
        assert!(CliContext::load(Some(&catalog), None, false).is_err());

        let config = dir.path().join("options.yaml");
        std::fs::write(&config, "unknown_prerequisites: lock\n").unwrap();
        let ctx = CliContext::load(Some(&catalog), Some(&config), false).unwrap();
        assert_eq!(ctx.catalog.len(), 1);
    }
}
