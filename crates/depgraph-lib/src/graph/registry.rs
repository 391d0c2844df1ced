//! Name ↔ identifier bookkeeping for the dependency graph

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

/// Dense node identifier, assigned in creation order starting at 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node_{}", self.0)
    }
}

/// Bidirectional mapping between node names and identifiers.
///
/// Identifiers are never reused. Synthetic identifiers (allocated for
/// self-dependencies) occupy a slot in the identifier space but carry no name.
#[derive(Debug, Default, Clone)]
pub struct NodeRegistry {
    /// Name of every allocated identifier, `None` for synthetic nodes
    names: Vec<Option<String>>,
    /// Reverse lookup from name to identifier
    ids: HashMap<String, NodeId>,
    /// Synthetic node routing the self-dependency of a named node
    self_loops: HashMap<NodeId, NodeId>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the identifier for `name`, allocating the next one on first sight.
    pub fn identifier_for(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let id = self.next_id();
        self.names.push(Some(name.to_string()));
        self.ids.insert(name.to_string(), id);
        trace!(%id, node = name, "Registered node");
        id
    }

    /// Identifier for `name` if it was registered, without allocating.
    pub fn lookup(&self, name: &str) -> Option<NodeId> {
        self.ids.get(name).copied()
    }

    /// Name of `id`, or `None` for synthetic and unknown identifiers.
    pub fn name_for(&self, id: NodeId) -> Option<&str> {
        self.names.get(id.0).and_then(|n| n.as_deref())
    }

    /// Allocate a fresh identifier without a name.
    pub fn allocate_synthetic(&mut self) -> NodeId {
        let id = self.next_id();
        self.names.push(None);
        debug!(%id, "Allocated synthetic node");
        id
    }

    /// Synthetic node standing in for the self-dependency of `owner`.
    ///
    /// The same synthetic node is returned for repeated calls with the same
    /// owner so a repeated self-dependency adds no new circuit.
    pub fn self_loop_for(&mut self, owner: NodeId) -> NodeId {
        if let Some(&synthetic) = self.self_loops.get(&owner) {
            return synthetic;
        }

        let synthetic = self.allocate_synthetic();
        self.self_loops.insert(owner, synthetic);
        synthetic
    }

    pub fn is_synthetic(&self, id: NodeId) -> bool {
        matches!(self.names.get(id.0), Some(None))
    }

    /// Total number of allocated identifiers, synthetic ones included
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Named nodes in identifier order
    pub fn names(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.names
            .iter()
            .enumerate()
            .filter_map(|(idx, name)| name.as_deref().map(|n| (NodeId(idx), n)))
    }

    fn next_id(&self) -> NodeId {
        NodeId(self.names.len())
    }
}

#[cfg(test)]
mod tests {
    include!("registry.test.rs");
}
