//! Transitive dependency traversal

use std::collections::BTreeSet;

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Dfs;
use tracing::trace;

use super::registry::{NodeId, NodeRegistry};

/// Collect the names of every node reachable from `start`, excluding `start`.
///
/// Synthetic nodes are walked through but never reported. The result is
/// deduplicated and sorted by name; the traversal order itself carries no
/// meaning.
pub fn reachable_names(graph: &DiGraph<(), ()>, registry: &NodeRegistry, start: NodeId) -> Vec<String> {
    let start_idx = NodeIndex::new(start.index());
    if graph.node_weight(start_idx).is_none() {
        return Vec::new();
    }

    let mut found = BTreeSet::new();
    let mut dfs = Dfs::new(graph, start_idx);

    while let Some(node) = dfs.next(graph) {
        if node == start_idx {
            continue;
        }

        match registry.name_for(NodeId::new(node.index())) {
            Some(name) => {
                found.insert(name.to_string());
            }
            None => trace!(node = node.index(), "Walking through synthetic node"),
        }
    }

    found.into_iter().collect()
}

#[cfg(test)]
mod tests {
    include!("walker.test.rs");
}
