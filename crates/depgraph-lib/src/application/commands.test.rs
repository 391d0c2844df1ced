use super::*;
use std::path::Path;
use tempfile::TempDir;

const COMPANY_MANIFEST: &str = r#"
[dependencies]
company = ["tech-team"]
tech-team = ["cto"]
cto = ["company", "ceo"]
ceo = ["company"]
"#;

const ACYCLIC_MANIFEST: &str = r#"
[dependencies]
company = ["tech-team"]
tech-team = ["cto"]
"#;

fn config_for(dir: &Path, content: &str, output: OutputFormat) -> AppConfig {
    let manifest = dir.join("depgraph.toml");
    std::fs::write(&manifest, content).unwrap();
    AppConfig {
        manifest,
        output,
        ..AppConfig::default()
    }
}

fn run(config: &AppConfig, command: Commands) -> (Result<()>, String) {
    let mut out = Vec::new();
    let result = execute_command_with_writer(config, &command, &mut out);
    (result, String::from_utf8(out).unwrap())
}

#[test]
fn test_deps_text_output() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), ACYCLIC_MANIFEST, OutputFormat::Text);

    let (result, out) = run(&config, Commands::Deps { name: "company".to_string() });
    result.unwrap();
    assert_eq!(out, "cto\ntech-team\n");
}

#[test]
fn test_deps_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), ACYCLIC_MANIFEST, OutputFormat::Json);

    let (result, out) = run(&config, Commands::Deps { name: "company".to_string() });
    result.unwrap();
    assert_eq!(out.trim(), r#"["cto","tech-team"]"#);
}

#[test]
fn test_deps_of_unknown_service_is_empty() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), ACYCLIC_MANIFEST, OutputFormat::Json);

    let (result, out) = run(&config, Commands::Deps { name: "ghost".to_string() });
    result.unwrap();
    assert_eq!(out.trim(), "[]");
}

#[test]
fn test_cycles_text_output() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), COMPANY_MANIFEST, OutputFormat::Text);

    let (result, out) = run(&config, Commands::Cycles);
    result.unwrap();
    assert_eq!(
        out,
        "company -> tech-team -> cto -> company\ncompany -> tech-team -> cto -> ceo -> company\n"
    );
}

#[test]
fn test_cycles_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), COMPANY_MANIFEST, OutputFormat::Json);

    let (result, out) = run(&config, Commands::Cycles);
    result.unwrap();

    let parsed: Vec<Vec<String>> = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0], vec!["company", "tech-team", "cto", "company"]);
}

#[test]
fn test_check_passes_for_acyclic_wiring() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), ACYCLIC_MANIFEST, OutputFormat::Text);

    let (result, out) = run(&config, Commands::Check);
    result.unwrap();
    assert_eq!(out, "ok: 3 services, no circular dependencies\n");
}

#[test]
fn test_check_fails_for_cyclic_wiring() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), COMPANY_MANIFEST, OutputFormat::Json);

    let (result, out) = run(&config, Commands::Check);
    let err = result.unwrap_err();
    assert!(format!("{err:#}").contains("company -> tech-team -> cto -> company"));

    let report: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(report["acyclic"], false);
    assert_eq!(report["services"], 4);
    assert_eq!(report["cycles"].as_array().unwrap().len(), 2);
}

#[test]
fn test_missing_manifest_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let config = AppConfig {
        manifest: temp_dir.path().join("absent.toml"),
        ..AppConfig::default()
    };

    let (result, out) = run(&config, Commands::Cycles);
    assert!(result.is_err());
    assert!(out.is_empty());
}

#[test]
fn test_check_lists_cycles_in_text_mode() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), COMPANY_MANIFEST, OutputFormat::Text);

    let (result, out) = run(&config, Commands::Check);
    assert!(result.is_err());
    assert_eq!(
        out,
        "2 circular dependencies:\ncompany -> tech-team -> cto -> company\ncompany -> tech-team -> cto -> ceo -> company\n"
    );
}

#[test]
fn test_deps_of_service_without_dependencies() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path(), "[dependencies]\nlogger = []\n", OutputFormat::Json);

    let (result, out) = run(&config, Commands::Deps { name: "logger".to_string() });
    result.unwrap();
    assert_eq!(out.trim(), "[]");
}
