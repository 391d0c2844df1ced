//! Configuration loading
//!
//! Coordinates `.env` files, standard environment variables and command
//! line arguments into one validated [`CliConfig`].

use crate::primitives::ConfigError;
use clap::Parser;
use std::ffi::OsString;

use super::{
    cli::{Cli, CliConfig},
    config::AppConfig,
    env::EnvironmentConfig,
};

/// Files consulted for environment defaults, most specific first
const ENV_FILES: [&str; 2] = [".env.local", ".env"];

impl CliConfig {
    /// Load config: defaults -> .env -> env vars -> CLI
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(std::env::args_os())
    }

    /// Same as [`load`](Self::load) with explicit arguments
    pub fn load_from<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        // .env must be applied before clap reads DEPGRAPH_* variables
        load_env_files()?;

        let cli = Cli::parse_from(args);
        let env_config = EnvironmentConfig::load()?;
        Self::resolve(cli, &env_config)
    }

    /// Layer parsed arguments over defaults adjusted by the environment
    pub fn resolve(cli: Cli, env_config: &EnvironmentConfig) -> Result<Self, ConfigError> {
        let mut app_config = AppConfig::default();
        app_config.color = env_config.apply_color_config(app_config.color);
        let app_config = app_config.merge_with(cli.config);
        app_config.validate()?;

        Ok(Self {
            app_config,
            command: cli.command,
        })
    }
}

fn load_env_files() -> Result<(), ConfigError> {
    for env_file in ENV_FILES {
        match dotenvy::from_filename(env_file) {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => {
                return Err(ConfigError::EnvFileError {
                    file: env_file.to_string(),
                    source: e,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
