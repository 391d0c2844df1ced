use super::*;

#[test]
fn test_no_variables_keep_intent() {
    let env = EnvironmentConfig::default();
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
    assert_eq!(env.apply_color_config(ColorIntent::Always), ColorIntent::Always);
}

#[test]
fn test_no_color_disables() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        ..Default::default()
    };
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Never);
}

#[test]
fn test_empty_no_color_is_ignored() {
    let env = EnvironmentConfig {
        no_color: Some(String::new()),
        ..Default::default()
    };
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}

#[test]
fn test_clicolor_zero_disables() {
    let env = EnvironmentConfig {
        clicolor: Some("0".to_string()),
        ..Default::default()
    };
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Never);
}

#[test]
fn test_ci_disables() {
    let env = EnvironmentConfig {
        ci: Some("true".to_string()),
        ..Default::default()
    };
    assert_eq!(env.apply_color_config(ColorIntent::Always), ColorIntent::Never);
}

#[test]
fn test_force_color_wins() {
    let env = EnvironmentConfig {
        no_color: Some("1".to_string()),
        clicolor: Some("0".to_string()),
        ci: Some("1".to_string()),
        force_color: Some("1".to_string()),
    };
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Always);
}

#[test]
fn test_force_color_false_disables() {
    let env = EnvironmentConfig {
        force_color: Some("false".to_string()),
        ..Default::default()
    };
    assert_eq!(env.apply_color_config(ColorIntent::Always), ColorIntent::Never);
}

#[test]
fn test_unknown_force_color_value_ignored() {
    let env = EnvironmentConfig {
        force_color: Some("maybe".to_string()),
        ..Default::default()
    };
    assert_eq!(env.apply_color_config(ColorIntent::Auto), ColorIntent::Auto);
}
