//! # depgraph Library
//!
//! Dependency graph engine for validating service wiring.
//!
//! ## Core Modules
//!
//! - [`graph`] - Dependency graph, transitive lookup and cycle enumeration
//! - [`manifest`] - TOML wiring manifest loading
//! - [`primitives`] - Shared enums, logger config and errors
//! - [`logger`] - Structured logging setup
//! - [`application`] - CLI interface, configuration and commands
//!
//! ## Quick Start
//!
//! ```
//! use depgraph_lib::DependencyGraph;
//!
//! let mut graph = DependencyGraph::new();
//! graph.add_dependency("holding", "holding");
//!
//! assert_eq!(graph.circular_dependencies(), vec![vec!["holding", "holding"]]);
//! ```

pub mod application;
pub mod graph;
pub mod logger;
pub mod manifest;
pub mod primitives;

pub use application::{AppConfig, Cli, Commands, execute_command};
pub use graph::{DependencyGraph, GraphError, NodeId};
pub use logger::Logger;
pub use manifest::{ManifestError, WiringManifest};
pub use primitives::{ColorIntent, ConfigError, LogFormat, LogLevel, LogOutput, LoggerError, OutputFormat};

use anyhow::Result;
use application::CliConfig;

/// Entry point used by the `depgraph` binary
pub fn main() -> Result<()> {
    let cli = CliConfig::load()?;
    Logger::init(cli.app_config.to_logger_config())?;

    execute_command(&cli.app_config, &cli.command)
}
