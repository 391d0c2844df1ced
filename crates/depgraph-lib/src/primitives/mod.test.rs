use super::*;

#[test]
fn test_log_level_from_verbosity() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Warning);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(200), LogLevel::Trace);
}

#[test]
fn test_log_level_filter_directive() {
    assert_eq!(LogLevel::Warning.as_filter(), "warn");
    assert_eq!(LogLevel::Trace.as_filter(), "trace");
}

#[test]
fn test_log_format_aliases() {
    assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("plain".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("JSON".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!("yml".parse::<LogFormat>().unwrap(), LogFormat::Yaml);
}

#[test]
fn test_color_intent_parsing() {
    assert_eq!("auto".parse::<ColorIntent>().unwrap(), ColorIntent::Auto);
    assert_eq!("no".parse::<ColorIntent>().unwrap(), ColorIntent::Never);
    assert_eq!("always".parse::<ColorIntent>().unwrap(), ColorIntent::Always);
}

#[test]
fn test_output_format_parsing() {
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
}

#[test]
fn test_invalid_value_reports_parse_error() {
    let err = "loud".parse::<LogLevel>().unwrap_err();
    match err {
        ConfigError::ParseError { value, reason } => {
            assert_eq!(value, "loud");
            assert_eq!(reason, "invalid log level");
        }
        other => panic!("unexpected error: {other}"),
    }
}
