//! Wiring manifest loading
//!
//! A manifest lists, per service, the services it depends on:
//!
//! ```toml
//! [dependencies]
//! holding = ["company", "department", "holding"]
//! company = ["department"]
//! ```
//!
//! Entries are inserted in file order, which fixes identifier assignment and
//! with it the order cycles are reported in.

use std::path::{Path, PathBuf};

use thiserror::Error;
use toml::Value;
use tracing::{debug, trace};

use crate::graph::DependencyGraph;

/// Errors that can occur while loading a manifest
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse TOML: {path}: {source}")]
    TomlParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid dependency format for '{name}' in {path}")]
    InvalidDependencyFormat { path: PathBuf, name: String },
}

/// Services and `(dependent, dependency)` pairs read from a manifest, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WiringManifest {
    /// Every declared service, including those with an empty list
    pub services: Vec<String>,
    pub edges: Vec<(String, String)>,
}

impl WiringManifest {
    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        debug!("Loading wiring manifest: {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| ManifestError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content, path)
    }

    /// Parse manifest text; `path` is only used for error reporting
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let table: toml::Table = toml::from_str(content).map_err(|e| ManifestError::TomlParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut manifest = Self::default();
        let Some(deps) = table.get("dependencies") else {
            return Ok(manifest);
        };
        let Some(deps) = deps.as_table() else {
            return Err(ManifestError::InvalidDependencyFormat {
                path: path.to_path_buf(),
                name: "dependencies".to_string(),
            });
        };

        for (name, value) in deps {
            let invalid = || ManifestError::InvalidDependencyFormat {
                path: path.to_path_buf(),
                name: name.clone(),
            };

            let Value::Array(targets) = value else {
                return Err(invalid());
            };
            manifest.services.push(name.clone());
            for target in targets {
                let target = target.as_str().ok_or_else(invalid)?;
                trace!(from = %name, to = target, "Found dependency");
                manifest.edges.push((name.clone(), target.to_string()));
            }
        }

        Ok(manifest)
    }

    /// Build a graph by registering each service, then its edges, in manifest order
    pub fn to_graph(&self) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for service in &self.services {
            graph.add_node(service);
            for (_, to) in self.edges.iter().filter(|(from, _)| from == service) {
                graph.add_dependency(service, to);
            }
        }
        debug!(
            nodes = graph.node_count(),
            edges = self.edges.len(),
            "Built dependency graph from manifest"
        );
        graph
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
