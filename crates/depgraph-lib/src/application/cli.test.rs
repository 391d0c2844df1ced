use super::*;
use crate::primitives::OutputFormat;
use std::path::PathBuf;

#[test]
fn test_parse_deps_command() {
    let cli = Cli::try_parse_from(["depgraph", "deps", "holding"]).unwrap();
    assert_eq!(
        cli.command,
        Commands::Deps {
            name: "holding".to_string()
        }
    );
}

#[test]
fn test_parse_global_flags() {
    let cli = Cli::try_parse_from(["depgraph", "--manifest", "wiring.toml", "--output", "json", "cycles"]).unwrap();
    assert_eq!(cli.command, Commands::Cycles);
    assert_eq!(cli.config.manifest, PathBuf::from("wiring.toml"));
    assert_eq!(cli.config.output, OutputFormat::Json);
}

#[test]
fn test_subcommand_is_required() {
    assert!(Cli::try_parse_from(["depgraph"]).is_err());
}

#[test]
fn test_deps_requires_name() {
    assert!(Cli::try_parse_from(["depgraph", "deps"]).is_err());
}

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
