//! Dependency graph with transitive lookup and cycle enumeration
//!
//! Nodes are identified by name and registered lazily. Edges point from a
//! dependent to its dependency. Self-dependencies are routed through an
//! unnamed synthetic node so the adjacency never holds a direct self-edge;
//! when rendered, such a cycle collapses to `[name, name]`.
//!
//! ```
//! use depgraph_lib::graph::DependencyGraph;
//!
//! let mut graph = DependencyGraph::new();
//! graph.add_dependency("company", "tech-team");
//! graph.add_dependency("tech-team", "cto");
//!
//! assert_eq!(graph.dependencies("company"), vec!["cto", "tech-team"]);
//! assert!(graph.circular_dependencies().is_empty());
//! ```

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use thiserror::Error;
use tracing::{debug, trace};

pub mod cycles;
pub mod registry;
pub mod walker;

pub use cycles::format_cycle;
pub use registry::{NodeId, NodeRegistry};

/// Errors raised when validating dependency wiring
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Circular dependency detected: {cycles}")]
    CircularDependency { cycles: String },
}

/// Directed dependency graph over named nodes
#[derive(Debug, Default, Clone)]
pub struct DependencyGraph {
    /// Name ↔ identifier mapping, synthetic nodes included
    registry: NodeRegistry,
    /// Adjacency; node index `i` is registry identifier `i`
    graph: DiGraph<(), ()>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `from` depends on `to`.
    ///
    /// Unseen names are registered. Adding an existing edge is a no-op, and
    /// `from == to` is accepted.
    pub fn add_dependency(&mut self, from: &str, to: &str) {
        let from_id = self.node(from);
        let to_id = self.node(to);

        if from_id == to_id {
            let synthetic = self.registry.self_loop_for(from_id);
            self.sync_nodes();
            debug!(node = from, %synthetic, "Routing self-dependency through synthetic node");
            self.insert_edge(from_id, synthetic);
            self.insert_edge(synthetic, to_id);
            return;
        }

        trace!(from, to, "Adding dependency");
        self.insert_edge(from_id, to_id);
    }

    /// Register `name` without adding any edge. Registering twice is a no-op.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        self.node(name)
    }

    /// All names transitively reachable from `name`, excluding `name`, sorted.
    ///
    /// An unseen name is registered and has no dependencies.
    pub fn dependencies(&mut self, name: &str) -> Vec<String> {
        let start = self.node(name);
        walker::reachable_names(&self.graph, &self.registry, start)
    }

    /// Like [`dependencies`](Self::dependencies) but never registers `name`.
    ///
    /// Returns `None` when `name` has not been seen.
    pub fn known_dependencies(&self, name: &str) -> Option<Vec<String>> {
        let start = self.registry.lookup(name)?;
        Some(walker::reachable_names(&self.graph, &self.registry, start))
    }

    /// Every elementary cycle, rendered as a closed name sequence.
    ///
    /// Cycles are ordered by the identifiers of their members, position by
    /// position, with shorter prefixes first. Results are stable across runs.
    pub fn circular_dependencies(&self) -> Vec<Vec<String>> {
        let mut raw = cycles::elementary_circuits(&self.graph);
        cycles::sort_cycles(&mut raw);
        debug!(count = raw.len(), "Enumerated dependency cycles");

        raw.iter()
            .map(|cycle| cycles::render_cycle(&self.registry, cycle))
            .collect()
    }

    /// Check if the graph contains cycles
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Fail with every cycle listed if the wiring is circular
    pub fn ensure_acyclic(&self) -> Result<(), GraphError> {
        if !self.has_cycles() {
            return Ok(());
        }

        let cycles = self
            .circular_dependencies()
            .iter()
            .map(|cycle| format_cycle(cycle))
            .collect::<Vec<_>>()
            .join("; ");
        Err(GraphError::CircularDependency { cycles })
    }

    /// Check if a name has been registered
    pub fn contains(&self, name: &str) -> bool {
        self.registry.lookup(name).is_some()
    }

    /// Number of named nodes
    pub fn node_count(&self) -> usize {
        self.registry.names().count()
    }

    /// Number of stored edges, synthetic indirections included
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Read access to the name ↔ identifier mapping
    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    fn node(&mut self, name: &str) -> NodeId {
        let id = self.registry.identifier_for(name);
        self.sync_nodes();
        id
    }

    /// Grow the adjacency so every registry identifier has a node
    fn sync_nodes(&mut self) {
        while self.graph.node_count() < self.registry.len() {
            self.graph.add_node(());
        }
    }

    fn insert_edge(&mut self, from: NodeId, to: NodeId) {
        self.graph
            .update_edge(NodeIndex::new(from.index()), NodeIndex::new(to.index()), ());
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
