//! Application configuration management
//!
//! Handles config merging and validation following the precedence:
//! defaults -> .env -> env vars -> CLI args.

use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

/// Default configuration values
pub mod defaults {
    pub const MANIFEST: &str = "depgraph.toml";
    pub const OUTPUT: &str = "text";
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
}

/// Default value functions for configuration fields
mod default_fns {
    use super::*;

    pub fn manifest() -> PathBuf {
        PathBuf::from(defaults::MANIFEST)
    }

    pub fn output() -> OutputFormat {
        OutputFormat::Text
    }

    pub fn log_level() -> u8 {
        0
    }

    pub fn log_format() -> LogFormat {
        LogFormat::Text
    }

    pub fn log_output() -> LogOutput {
        LogOutput::Stderr
    }

    pub fn color() -> ColorIntent {
        ColorIntent::Auto
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Wiring manifest to load
    #[arg(short, long, env = "DEPGRAPH_MANIFEST", default_value = defaults::MANIFEST)]
    #[serde(default = "default_fns::manifest")]
    pub manifest: PathBuf,

    /// Result format (text, json)
    #[arg(short, long, value_enum, env = "DEPGRAPH_OUTPUT", default_value = defaults::OUTPUT)]
    #[serde(default = "default_fns::output")]
    pub output: OutputFormat,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "DEPGRAPH_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, yaml)
    #[arg(long, value_enum, env = "DEPGRAPH_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, value_enum, env = "DEPGRAPH_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(short, long, value_enum, env = "DEPGRAPH_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            manifest: default_fns::manifest(),
            output: default_fns::output(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
        }
    }
}

impl AppConfig {
    /// Create LoggerConfig, resolving `auto` color against stderr
    pub fn to_logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            ansi: self.use_color(),
        }
    }

    pub fn use_color(&self) -> bool {
        match self.color {
            ColorIntent::Always => true,
            ColorIntent::Never => false,
            ColorIntent::Auto => console::colors_enabled_stderr(),
        }
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.manifest != default_fns::manifest() {
            self.manifest = other.manifest;
        }
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }

        if !matches!(other.output, OutputFormat::Text) {
            self.output = other.output;
        }
        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, ColorIntent::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.manifest.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed {
                reason: "manifest path must not be empty".to_string(),
            });
        }
        if self.log_level > 4 {
            return Err(ConfigError::ValidationFailed {
                reason: format!("log level {} is out of range 0-4", self.log_level),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
