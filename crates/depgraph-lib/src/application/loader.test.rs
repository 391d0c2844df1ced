use super::*;
use crate::application::cli::Commands;
use crate::primitives::{ColorIntent, OutputFormat};

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn test_resolve_keeps_command() {
    let cli = parse(&["depgraph", "check"]);
    let resolved = CliConfig::resolve(cli, &EnvironmentConfig::default()).unwrap();
    assert_eq!(resolved.command, Commands::Check);
}

#[test]
fn test_environment_color_applies_when_cli_is_auto() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..Default::default()
    };
    let resolved = CliConfig::resolve(parse(&["depgraph", "cycles"]), &env).unwrap();
    assert_eq!(resolved.app_config.color, ColorIntent::Never);
}

#[test]
fn test_cli_color_overrides_environment() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..Default::default()
    };
    let resolved = CliConfig::resolve(parse(&["depgraph", "--color", "always", "cycles"]), &env).unwrap();
    assert_eq!(resolved.app_config.color, ColorIntent::Always);
}

#[test]
fn test_cli_values_are_merged() {
    let cli = parse(&["depgraph", "-o", "json", "--log-level", "2", "deps", "a"]);
    let resolved = CliConfig::resolve(cli, &EnvironmentConfig::default()).unwrap();
    assert_eq!(resolved.app_config.output, OutputFormat::Json);
    assert_eq!(resolved.app_config.log_level, 2);
}

#[test]
fn test_invalid_config_is_rejected() {
    let cli = parse(&["depgraph", "--log-level", "7", "check"]);
    let err = CliConfig::resolve(cli, &EnvironmentConfig::default()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}
