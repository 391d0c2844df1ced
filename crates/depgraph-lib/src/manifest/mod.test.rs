// Tests for wiring manifest loading

use super::*;
use crate::graph::NodeId;
use std::fs;
use tempfile::TempDir;


const HOLDING_MANIFEST: &str = r#"
[dependencies]
holding = ["company", "holding", "department"]
company = ["department"]
department = ["holding", "department"]
"#;

fn write_manifest(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("depgraph.toml");
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_edges_follow_file_order() {
    let manifest = WiringManifest::parse(HOLDING_MANIFEST, Path::new("inline.toml")).unwrap();

    let edges: Vec<(&str, &str)> = manifest
        .edges
        .iter()
        .map(|(from, to)| (from.as_str(), to.as_str()))
        .collect();
    assert_eq!(
        edges,
        vec![
            ("holding", "company"),
            ("holding", "holding"),
            ("holding", "department"),
            ("company", "department"),
            ("department", "holding"),
            ("department", "department"),
        ]
    );
}

#[test]
fn test_manifest_graph_cycles() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_manifest(temp_dir.path(), HOLDING_MANIFEST);

    let graph = WiringManifest::load(&path).unwrap().to_graph();
    let cycles = graph.circular_dependencies();

    assert_eq!(cycles.len(), 4);
    assert_eq!(cycles[0], vec!["holding", "company", "department", "holding"]);
    // the self-dependency on holding was declared before holding -> department
    assert_eq!(cycles[1], vec!["holding", "holding"]);
    assert_eq!(cycles[2], vec!["holding", "department", "holding"]);
    assert_eq!(cycles[3], vec!["department", "department"]);
}

#[test]
fn test_missing_dependencies_table_is_empty() {
    let manifest = WiringManifest::parse("title = \"nothing\"\n", Path::new("x.toml")).unwrap();
    assert!(manifest.edges.is_empty());
    assert_eq!(manifest.to_graph().node_count(), 0);
}

#[test]
fn test_missing_file_reports_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = WiringManifest::load(&temp_dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ManifestError::FileReadError { .. }));
}

#[test]
fn test_malformed_toml_reports_parse_error() {
    let err = WiringManifest::parse("[dependencies\n", Path::new("bad.toml")).unwrap_err();
    assert!(matches!(err, ManifestError::TomlParseError { .. }));
}

#[test]
fn test_non_array_entry_is_rejected() {
    let err = WiringManifest::parse("[dependencies]\nholding = \"company\"\n", Path::new("bad.toml"))
        .unwrap_err();
    match err {
        ManifestError::InvalidDependencyFormat { name, .. } => assert_eq!(name, "holding"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_non_string_target_is_rejected() {
    let err = WiringManifest::parse("[dependencies]\nholding = [1]\n", Path::new("bad.toml"))
        .unwrap_err();
    assert!(matches!(err, ManifestError::InvalidDependencyFormat { .. }));
}

#[test]
fn test_dependencies_must_be_a_table() {
    let err = WiringManifest::parse("dependencies = [\"a\"]\n", Path::new("bad.toml")).unwrap_err();
    assert!(matches!(err, ManifestError::InvalidDependencyFormat { .. }));
}

#[test]
fn test_service_with_empty_list_is_registered() {
    let content = "[dependencies]\nlogger = []\napi = [\"db\"]\n";
    let manifest = WiringManifest::parse(content, Path::new("inline.toml")).unwrap();
    assert_eq!(manifest.services, vec!["logger", "api"]);

    let graph = manifest.to_graph();
    assert!(graph.contains("logger"));
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.registry().lookup("logger"), Some(NodeId::new(0)));
    assert_eq!(graph.registry().lookup("api"), Some(NodeId::new(1)));
    assert_eq!(graph.registry().lookup("db"), Some(NodeId::new(2)));
}
