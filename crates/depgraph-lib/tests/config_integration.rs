use depgraph_lib::application::config::AppConfig;
use depgraph_lib::primitives::{ColorIntent, LogLevel, OutputFormat};

#[test]
fn test_config_default_creation() {
    let config = AppConfig::default();

    assert!(config.log_level <= 4);
    assert_eq!(config.color, ColorIntent::Auto);
    assert_eq!(config.output, OutputFormat::Text);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_merging_integration() {
    let base_config = AppConfig::default();
    let override_config = AppConfig {
        log_level: 3,
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let merged = base_config.merge_with(override_config);

    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.color, ColorIntent::Never);
    assert_eq!(merged.to_logger_config().level, LogLevel::Debug);

    // Default values should remain for non-overridden fields
    assert_eq!(merged.manifest.to_str(), Some("depgraph.toml"));
}
