use super::*;

#[test]
fn test_filter_directive_uses_crate_prefix() {
    assert_eq!(Logger::filter_directive(LogLevel::Debug), "depgraph=debug,debug");
}

#[test]
fn test_filter_directive_is_valid_env_filter() {
    for verbosity in 0..=4 {
        let directive = Logger::filter_directive(LogLevel::from_verbosity(verbosity));
        assert!(EnvFilter::try_new(&directive).is_ok(), "bad directive: {directive}");
    }
}

#[test]
fn test_logger_global_matches_initialized() {
    assert_eq!(Logger::is_initialized(), Logger::global().is_some());
}
