use clap::{Parser, Subcommand};

use super::config::AppConfig;

/// depgraph CLI - dependency wiring validation
#[derive(Debug, Clone, Parser)]
#[command(name = "depgraph")]
#[command(about = "Inspect transitive dependencies and circular wiring")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// depgraph commands
    #[command(subcommand)]
    pub command: Commands,
}

/// Configuration loaded from CLI
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub command: Commands,
}

/// Available depgraph commands
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// List everything a service transitively depends on
    Deps {
        /// Service name
        #[arg(help = "Service whose dependencies to list")]
        name: String,
    },

    /// List every circular dependency
    Cycles,

    /// Fail if the wiring contains any circular dependency
    Check,
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
