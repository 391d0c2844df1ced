//! Elementary circuit enumeration
//!
//! Cycles are found with a Johnson-style blocked depth-first search run once
//! per strongly connected component. Each component is searched from its
//! smallest identifier, which is then removed, and whatever remains is split
//! into components again. A circuit is therefore reported exactly once, when
//! its smallest member is the start vertex, and always begins with that member.
//! The search keeps an explicit stack instead of recursing.

use std::collections::{HashMap, HashSet};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::trace;

use super::registry::{NodeId, NodeRegistry};

/// A closed identifier sequence: the first and last element are the same node
pub type RawCycle = Vec<NodeId>;

/// Enumerate every elementary circuit of `graph`.
///
/// The order of the returned circuits is unspecified; see [`sort_cycles`].
pub fn elementary_circuits(graph: &DiGraph<(), ()>) -> Vec<RawCycle> {
    let mut circuits = Vec::new();

    // Node weight is the original identifier; induced subgraphs renumber indices
    let mut working: DiGraph<usize, ()> = DiGraph::with_capacity(graph.node_count(), graph.edge_count());
    for node in graph.node_indices() {
        working.add_node(node.index());
    }
    for edge in graph.edge_references() {
        let (from, to) = (edge.source(), edge.target());
        if from == to {
            circuits.push(vec![NodeId::new(from.index()), NodeId::new(to.index())]);
            continue;
        }
        working.update_edge(from, to, ());
    }

    let mut components = nontrivial_components(&working);
    while let Some(component) = components.pop() {
        let Some(&lowest) = component.iter().min() else {
            continue;
        };

        let members: HashSet<usize> = component.into_iter().collect();
        let subgraph = induced_subgraph(&working, &members);
        let Some(start) = subgraph.node_indices().find(|&idx| subgraph[idx] == lowest) else {
            continue;
        };

        let before = circuits.len();
        circuits_through(&subgraph, start, &mut circuits);
        trace!(start = lowest, found = circuits.len() - before, "Searched component");

        let mut remaining = members;
        remaining.remove(&lowest);
        components.extend(nontrivial_components(&induced_subgraph(&working, &remaining)));
    }

    circuits
}

/// Order cycles by identifier, position by position.
///
/// The first differing position decides (smaller identifier first); when one
/// cycle is a prefix of the other the shorter one sorts first.
pub fn sort_cycles(cycles: &mut [RawCycle]) {
    cycles.sort_by(|a, b| {
        a.iter()
            .zip(b.iter())
            .find(|(x, y)| x != y)
            .map(|(x, y)| x.cmp(y))
            .unwrap_or_else(|| a.len().cmp(&b.len()))
    });
}

/// Translate a cycle to names, dropping synthetic nodes.
pub fn render_cycle(registry: &NodeRegistry, cycle: &[NodeId]) -> Vec<String> {
    cycle
        .iter()
        .filter_map(|&id| registry.name_for(id))
        .map(str::to_string)
        .collect()
}

/// Render a named cycle as `a -> b -> a`
pub fn format_cycle(cycle: &[String]) -> String {
    cycle.join(" -> ")
}

/// Strongly connected components with more than one member, as original identifiers
fn nontrivial_components(graph: &DiGraph<usize, ()>) -> Vec<Vec<usize>> {
    tarjan_scc(graph)
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|scc| scc.into_iter().map(|idx| graph[idx]).collect())
        .collect()
}

fn induced_subgraph(graph: &DiGraph<usize, ()>, members: &HashSet<usize>) -> DiGraph<usize, ()> {
    graph.filter_map(
        |_, &id| members.contains(&id).then_some(id),
        |_, _| Some(()),
    )
}

/// Push every elementary circuit of `graph` passing through `start`.
fn circuits_through(graph: &DiGraph<usize, ()>, start: NodeIndex, out: &mut Vec<RawCycle>) {
    let successors = |node: NodeIndex| -> Vec<NodeIndex> { graph.neighbors(node).collect() };

    let mut path = vec![start];
    let mut blocked: HashSet<NodeIndex> = HashSet::from([start]);
    let mut closed: HashSet<NodeIndex> = HashSet::new();
    let mut block_map: HashMap<NodeIndex, HashSet<NodeIndex>> = HashMap::new();
    let mut stack = vec![(start, successors(start))];

    while let Some((node, pending)) = stack.last_mut() {
        let node = *node;

        if let Some(next) = pending.pop() {
            if next == start {
                let mut cycle: RawCycle = path.iter().map(|&idx| NodeId::new(graph[idx])).collect();
                cycle.push(NodeId::new(graph[start]));
                out.push(cycle);
                closed.extend(path.iter().copied());
            } else if !blocked.contains(&next) {
                path.push(next);
                closed.remove(&next);
                blocked.insert(next);
                stack.push((next, successors(next)));
                continue;
            }
        }

        if pending.is_empty() {
            if closed.contains(&node) {
                unblock(node, &mut blocked, &mut block_map);
            } else {
                for succ in graph.neighbors(node) {
                    block_map.entry(succ).or_default().insert(node);
                }
            }
            stack.pop();
            path.pop();
        }
    }
}

fn unblock(node: NodeIndex, blocked: &mut HashSet<NodeIndex>, block_map: &mut HashMap<NodeIndex, HashSet<NodeIndex>>) {
    let mut pending = vec![node];
    while let Some(current) = pending.pop() {
        if blocked.remove(&current) {
            if let Some(waiting) = block_map.get_mut(&current) {
                pending.extend(waiting.drain());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cycles.test.rs");
}
