//! Command execution
//!
//! Each command loads the manifest named in [`AppConfig`], builds the graph
//! and writes its result to the supplied writer.

use anyhow::{Context, Result};
use serde_json::json;
use std::io::Write;
use tracing::{info, warn};

use super::cli::Commands;
use super::config::AppConfig;
use crate::graph::{DependencyGraph, format_cycle};
use crate::manifest::WiringManifest;
use crate::primitives::OutputFormat;

/// Execute a command, printing results to stdout
pub fn execute_command(config: &AppConfig, command: &Commands) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command_with_writer(config, command, &mut out)
}

/// Execute a command against an explicit output writer
pub fn execute_command_with_writer(config: &AppConfig, command: &Commands, out: &mut impl Write) -> Result<()> {
    let manifest = WiringManifest::load(&config.manifest)?;
    let mut graph = manifest.to_graph();
    info!(
        manifest = %config.manifest.display(),
        services = graph.node_count(),
        "Loaded wiring manifest"
    );

    match command {
        Commands::Deps { name } => handle_deps(&mut graph, name, config.output, out),
        Commands::Cycles => handle_cycles(&graph, config.output, out),
        Commands::Check => handle_check(&graph, config.output, out),
    }
}

fn handle_deps(graph: &mut DependencyGraph, name: &str, output: OutputFormat, out: &mut impl Write) -> Result<()> {
    if !graph.contains(name) {
        warn!(service = name, "Service does not appear in the manifest");
    }

    let deps = graph.dependencies(name);
    match output {
        OutputFormat::Text => {
            for dep in &deps {
                writeln!(out, "{dep}")?;
            }
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&deps)?)?,
    }

    Ok(())
}

fn handle_cycles(graph: &DependencyGraph, output: OutputFormat, out: &mut impl Write) -> Result<()> {
    let cycles = graph.circular_dependencies();
    match output {
        OutputFormat::Text => {
            for cycle in &cycles {
                writeln!(out, "{}", format_cycle(cycle))?;
            }
        }
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&cycles)?)?,
    }

    Ok(())
}

fn handle_check(graph: &DependencyGraph, output: OutputFormat, out: &mut impl Write) -> Result<()> {
    let cycles = graph.circular_dependencies();

    match output {
        OutputFormat::Text if cycles.is_empty() => {
            writeln!(out, "ok: {} services, no circular dependencies", graph.node_count())?;
        }
        OutputFormat::Text => {
            writeln!(out, "{} circular dependencies:", cycles.len())?;
            for cycle in &cycles {
                writeln!(out, "{}", format_cycle(cycle))?;
            }
        }
        OutputFormat::Json => {
            let report = json!({
                "acyclic": cycles.is_empty(),
                "services": graph.node_count(),
                "cycles": cycles,
            });
            writeln!(out, "{}", serde_json::to_string(&report)?)?;
        }
    }
    out.flush()?;

    graph
        .ensure_acyclic()
        .context("Dependency wiring check failed")
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
