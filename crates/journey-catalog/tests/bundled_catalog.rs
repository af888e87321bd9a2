//! Integration test: the bundled privacy catalog loads, validates, and
//! exposes the lifecycle the product ships with.

use journey_catalog::{
    CatalogDocument, CatalogError, CatalogOptions, ToolCatalog, Violation, BUNDLED_CATALOG_YAML,
};
use journey_core::{CriticalityLevel, ToolPosition};

#[test]
fn test_bundled_catalog_loads() {
    let catalog = ToolCatalog::bundled().expect("bundled catalog must validate");
    assert!(!catalog.is_empty());
    assert!(catalog.personas().len() >= 4);
}

#[test]
fn test_bundled_phase_lifecycle() {
    let catalog = ToolCatalog::bundled().unwrap();
    let phases: Vec<&str> = catalog.phases().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(
        phases,
        vec!["discovery", "foundation", "documentation", "operations", "optimization"]
    );
    for phase in catalog.phases() {
        assert!(
            !catalog.tools_by_phase(phase.id.as_str()).is_empty(),
            "phase {} has no tools",
            phase.id
        );
    }
}

#[test]
fn test_bundled_emergency_tool_leads_discovery() {
    let catalog = ToolCatalog::bundled().unwrap();
    let first = catalog.tools_by_phase("discovery")[0];
    assert_eq!(first.position, ToolPosition::Emergency);
    assert_eq!(first.id.as_str(), "breach-response-kit");
}

#[test]
fn test_bundled_every_tool_has_metadata() {
    let catalog = ToolCatalog::bundled().unwrap();
    for tool in catalog.tools() {
        assert!(!tool.name.is_empty(), "{} has no name", tool.id);
        assert!(!tool.metadata.description.is_empty(), "{} has no description", tool.id);
        assert!(tool.metadata.path.is_some(), "{} has no route", tool.id);
    }
}

#[test]
fn test_bundled_has_critical_tools() {
    let catalog = ToolCatalog::bundled().unwrap();
    assert!(!catalog.tools_by_criticality(CriticalityLevel::Critical).is_empty());
}

#[test]
fn test_fingerprint_survives_json_conversion() {
    let yaml_doc = CatalogDocument::from_yaml_str(BUNDLED_CATALOG_YAML).unwrap();
    let json = serde_json::to_string_pretty(&yaml_doc).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, json).unwrap();

    let from_json = ToolCatalog::from_path(&path, &CatalogOptions::default()).unwrap();
    let from_yaml = ToolCatalog::bundled().unwrap();
    assert_eq!(from_json.fingerprint(), from_yaml.fingerprint());
    assert_eq!(from_json.len(), from_yaml.len());
}

#[test]
fn test_bundled_with_injected_cycle_is_rejected() {
    // Make privacy-assessment depend on audit-readiness, which transitively
    // depends on privacy-assessment.
    let mut doc = CatalogDocument::from_yaml_str(BUNDLED_CATALOG_YAML).unwrap();
    let entry = doc
        .tools
        .iter_mut()
        .find(|t| t.id.as_str() == "privacy-assessment")
        .unwrap();
    entry
        .prerequisites
        .push(journey_core::ToolId::new("audit-readiness").unwrap());

    match ToolCatalog::load(doc, &CatalogOptions::default()) {
        Err(CatalogError::Validation(violations)) => {
            assert!(violations
                .iter()
                .any(|v| matches!(v, Violation::PrerequisiteCycle(_))));
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}
