use super::*;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.manifest, PathBuf::from("depgraph.toml"));
    assert_eq!(config.output, OutputFormat::Text);
    assert_eq!(config.log_level, 0);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_output, LogOutput::Stderr);
    assert_eq!(config.color, ColorIntent::Auto);
}

#[test]
fn test_default_constants_parse_to_defaults() {
    let config = AppConfig::default();
    assert_eq!(defaults::OUTPUT.parse::<OutputFormat>().unwrap(), config.output);
    assert_eq!(defaults::LOG_LEVEL.parse::<u8>().unwrap(), config.log_level);
    assert_eq!(defaults::LOG_FORMAT.parse::<LogFormat>().unwrap(), config.log_format);
    assert_eq!(defaults::LOG_OUTPUT.parse::<LogOutput>().unwrap(), config.log_output);
    assert_eq!(defaults::COLOR.parse::<ColorIntent>().unwrap(), config.color);
}

#[test]
fn test_merge_takes_non_default_values() {
    let base = AppConfig {
        color: ColorIntent::Never,
        ..AppConfig::default()
    };
    let overrides = AppConfig {
        manifest: PathBuf::from("wiring.toml"),
        output: OutputFormat::Json,
        log_level: 3,
        ..AppConfig::default()
    };

    let merged = base.merge_with(overrides);
    assert_eq!(merged.manifest, PathBuf::from("wiring.toml"));
    assert_eq!(merged.output, OutputFormat::Json);
    assert_eq!(merged.log_level, 3);
    // default in the override keeps the base value
    assert_eq!(merged.color, ColorIntent::Never);
}

#[test]
fn test_validate_rejects_empty_manifest() {
    let config = AppConfig {
        manifest: PathBuf::new(),
        ..AppConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::ValidationFailed { .. })));
}

#[test]
fn test_validate_rejects_out_of_range_log_level() {
    let config = AppConfig {
        log_level: 9,
        ..AppConfig::default()
    };
    assert!(config.validate().is_err());
    assert!(AppConfig::default().validate().is_ok());
}

#[test]
fn test_logger_config_honors_explicit_color() {
    let config = AppConfig {
        log_level: 2,
        log_format: LogFormat::Json,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let logger_config = config.to_logger_config();
    assert_eq!(logger_config.level, LogLevel::Info);
    assert_eq!(logger_config.format, LogFormat::Json);
    assert!(!logger_config.ansi);

    let forced = AppConfig {
        color: ColorIntent::Always,
        ..AppConfig::default()
    };
    assert!(forced.to_logger_config().ansi);
}
