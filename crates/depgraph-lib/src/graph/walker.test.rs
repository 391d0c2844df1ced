// Tests for reachability traversal

use super::*;

/// Build a graph with one petgraph node per registry identifier
fn build(names: &[&str], edges: &[(usize, usize)], synthetic: &[usize]) -> (DiGraph<(), ()>, NodeRegistry) {
    let mut registry = NodeRegistry::new();
    let mut graph = DiGraph::new();
    let mut named = names.iter();

    for idx in 0..names.len() + synthetic.len() {
        if synthetic.contains(&idx) {
            registry.allocate_synthetic();
        } else {
            registry.identifier_for(named.next().unwrap());
        }
        graph.add_node(());
    }
    for &(from, to) in edges {
        graph.add_edge(NodeIndex::new(from), NodeIndex::new(to), ());
    }

    (graph, registry)
}

#[test]
fn test_chain_is_sorted_by_name() {
    let (graph, registry) = build(&["company", "tech-team", "cto"], &[(0, 1), (1, 2)], &[]);

    let deps = reachable_names(&graph, &registry, NodeId::new(0));
    assert_eq!(deps, vec!["cto", "tech-team"]);
}

#[test]
fn test_start_excluded_when_on_cycle() {
    let (graph, registry) = build(&["a", "b"], &[(0, 1), (1, 0)], &[]);

    assert_eq!(reachable_names(&graph, &registry, NodeId::new(0)), vec!["b"]);
    assert_eq!(reachable_names(&graph, &registry, NodeId::new(1)), vec!["a"]);
}

#[test]
fn test_synthetic_nodes_are_traversed_but_hidden() {
    // a -> [synthetic] -> b
    let (graph, registry) = build(&["a", "b"], &[(0, 1), (1, 2)], &[1]);

    assert_eq!(reachable_names(&graph, &registry, NodeId::new(0)), vec!["b"]);
}

#[test]
fn test_diamond_reports_each_node_once() {
    let (graph, registry) = build(&["top", "left", "right", "bottom"], &[(0, 1), (0, 2), (1, 3), (2, 3)], &[]);

    let deps = reachable_names(&graph, &registry, NodeId::new(0));
    assert_eq!(deps, vec!["bottom", "left", "right"]);
}

#[test]
fn test_leaf_has_no_dependencies() {
    let (graph, registry) = build(&["a", "b"], &[(0, 1)], &[]);
    assert!(reachable_names(&graph, &registry, NodeId::new(1)).is_empty());
}

#[test]
fn test_start_outside_graph_yields_nothing() {
    let (graph, registry) = build(&["a"], &[], &[]);
    assert!(reachable_names(&graph, &registry, NodeId::new(5)).is_empty());
}
