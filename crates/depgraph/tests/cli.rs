//! End-to-end tests for the depgraph binary
//!
//! Each test writes a manifest into a temporary directory and runs the
//! compiled binary from there, so no `.env` file from the workspace leaks in.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const HOLDING_MANIFEST: &str = r#"
[dependencies]
holding = ["company", "department"]
company = ["department"]
department = ["holding"]
"#;

fn depgraph(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("depgraph").unwrap();
    cmd.current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("DEPGRAPH_MANIFEST")
        .env_remove("DEPGRAPH_OUTPUT")
        .env("NO_COLOR", "1");
    cmd
}

fn project(manifest: &str) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("depgraph.toml"), manifest).unwrap();
    temp_dir
}

#[test]
fn test_deps_lists_sorted_dependencies() {
    let dir = project(HOLDING_MANIFEST);

    depgraph(dir.path())
        .args(["deps", "company"])
        .assert()
        .success()
        .stdout("department\nholding\n");
}

#[test]
fn test_cycles_in_deterministic_order() {
    let dir = project(HOLDING_MANIFEST);

    depgraph(dir.path())
        .arg("cycles")
        .assert()
        .success()
        .stdout("holding -> company -> department -> holding\nholding -> department -> holding\n");
}

#[test]
fn test_cycles_json_output() {
    let dir = project("[dependencies]\nholding = [\"holding\"]\n");

    depgraph(dir.path())
        .args(["--output", "json", "cycles"])
        .assert()
        .success()
        .stdout("[[\"holding\",\"holding\"]]\n");
}

#[test]
fn test_check_fails_on_cycle() {
    let dir = project(HOLDING_MANIFEST);

    depgraph(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stdout("2 circular dependencies:\nholding -> company -> department -> holding\nholding -> department -> holding\n")
        .stderr(predicate::str::contains("Circular dependency detected"));
}

#[test]
fn test_check_counts_services_without_dependencies() {
    let dir = project("[dependencies]\nlogger = []\napi = [\"db\"]\n");

    depgraph(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout("ok: 3 services, no circular dependencies\n");
}

#[test]
fn test_check_passes_on_acyclic_wiring() {
    let dir = project("[dependencies]\ncompany = [\"tech-team\"]\n");

    depgraph(dir.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ok: 2 services"));
}

#[test]
fn test_manifest_flag_overrides_default() {
    let dir = project("");
    std::fs::write(dir.path().join("wiring.toml"), HOLDING_MANIFEST).unwrap();

    depgraph(dir.path())
        .args(["--manifest", "wiring.toml", "deps", "department"])
        .assert()
        .success()
        .stdout("company\nholding\n");
}

#[test]
fn test_missing_manifest_reports_error() {
    let dir = TempDir::new().unwrap();

    depgraph(dir.path())
        .arg("cycles")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_missing_subcommand_is_usage_error() {
    let dir = TempDir::new().unwrap();

    depgraph(dir.path()).assert().failure().code(2);
}
