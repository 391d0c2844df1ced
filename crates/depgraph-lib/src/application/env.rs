//! Standard color and CI environment variables
//!
//! These follow cross-tool conventions rather than the `DEPGRAPH_` prefix,
//! so they are read separately from the clap-backed configuration.

use crate::primitives::{ColorIntent, ConfigError};
use serde::Deserialize;

/// Environment variables that affect color output
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// NO_COLOR (any non-empty value disables color)
    pub no_color: Option<String>,
    /// FORCE_COLOR (0/false disables, 1/2/3/true enables)
    pub force_color: Option<String>,
    /// CLICOLOR (0 disables color)
    pub clicolor: Option<String>,
    /// CI (any value disables color)
    pub ci: Option<String>,
}

impl EnvironmentConfig {
    /// Load environment configuration from current environment
    pub fn load() -> Result<Self, ConfigError> {
        envy::from_env().map_err(|e| ConfigError::EnvironmentParsingFailed { source: e })
    }

    /// Apply environment variables to a color intent
    ///
    /// Precedence: CI < CLICOLOR < NO_COLOR < FORCE_COLOR
    pub fn apply_color_config(&self, mut color: ColorIntent) -> ColorIntent {
        if self.ci.is_some() {
            color = ColorIntent::Never;
        }

        if self.clicolor.as_deref() == Some("0") {
            color = ColorIntent::Never;
        }

        if self.no_color.as_deref().is_some_and(|v| !v.is_empty()) {
            color = ColorIntent::Never;
        }

        if let Some(force_color) = &self.force_color {
            match force_color.as_str() {
                "0" | "false" => color = ColorIntent::Never,
                "1" | "2" | "3" | "true" => color = ColorIntent::Always,
                _ => {}
            }
        }

        color
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
