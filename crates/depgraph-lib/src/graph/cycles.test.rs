// Tests for elementary circuit enumeration and ordering

use super::*;

fn cycle(ids: &[usize]) -> RawCycle {
    ids.iter().map(|&id| NodeId::new(id)).collect()
}

fn graph_with(nodes: usize, edges: &[(usize, usize)]) -> DiGraph<(), ()> {
    let mut graph = DiGraph::new();
    for _ in 0..nodes {
        graph.add_node(());
    }
    for &(from, to) in edges {
        graph.update_edge(NodeIndex::new(from), NodeIndex::new(to), ());
    }
    graph
}

fn sorted_circuits(graph: &DiGraph<(), ()>) -> Vec<RawCycle> {
    let mut circuits = elementary_circuits(graph);
    sort_cycles(&mut circuits);
    circuits
}

// ============================================================================
// Ordering
// ============================================================================

#[test]
fn test_sort_cycles_by_identifier_then_length() {
    for _ in 0..100 {
        let mut cycles = vec![
            cycle(&[0, 1, 2]),
            cycle(&[0, 1]),
            cycle(&[1, 2, 3, 4]),
            cycle(&[0, 0, 0, 0]),
        ];
        sort_cycles(&mut cycles);

        assert_eq!(
            cycles,
            vec![
                cycle(&[0, 0, 0, 0]),
                cycle(&[0, 1]),
                cycle(&[0, 1, 2]),
                cycle(&[1, 2, 3, 4]),
            ]
        );
    }
}

#[test]
fn test_sort_cycles_first_difference_wins_over_length() {
    let mut cycles = vec![cycle(&[0, 2, 0]), cycle(&[0, 1, 2, 3, 0])];
    sort_cycles(&mut cycles);
    assert_eq!(cycles, vec![cycle(&[0, 1, 2, 3, 0]), cycle(&[0, 2, 0])]);
}

// ============================================================================
// Enumeration
// ============================================================================

#[test]
fn test_acyclic_graph_has_no_circuits() {
    let graph = graph_with(4, &[(0, 1), (1, 2), (0, 3), (3, 2)]);
    assert!(elementary_circuits(&graph).is_empty());
}

#[test]
fn test_empty_graph_has_no_circuits() {
    let graph = graph_with(0, &[]);
    assert!(elementary_circuits(&graph).is_empty());
}

#[test]
fn test_two_node_circuit_starts_at_lowest() {
    let graph = graph_with(2, &[(1, 0), (0, 1)]);
    assert_eq!(sorted_circuits(&graph), vec![cycle(&[0, 1, 0])]);
}

#[test]
fn test_overlapping_circuits_reported_once_each() {
    // 0 -> 1 -> 2 -> 0, 0 <-> 3 (synthetic), 2 <-> 4 (synthetic), 0 -> 2
    let graph = graph_with(5, &[(0, 1), (1, 2), (2, 0), (0, 3), (3, 0), (2, 4), (4, 2), (0, 2)]);

    assert_eq!(
        sorted_circuits(&graph),
        vec![
            cycle(&[0, 1, 2, 0]),
            cycle(&[0, 2, 0]),
            cycle(&[0, 3, 0]),
            cycle(&[2, 4, 2]),
        ]
    );
}

#[test]
fn test_circuits_sharing_a_prefix() {
    let graph = graph_with(4, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 0)]);

    assert_eq!(
        sorted_circuits(&graph),
        vec![cycle(&[0, 1, 2, 0]), cycle(&[0, 1, 2, 3, 0])]
    );
}

#[test]
fn test_complete_graph_circuit_count() {
    // K4 has 6 two-cycles, 8 three-cycles and 6 four-cycles
    let mut edges = Vec::new();
    for from in 0..4 {
        for to in 0..4 {
            if from != to {
                edges.push((from, to));
            }
        }
    }
    let graph = graph_with(4, &edges);

    let circuits = sorted_circuits(&graph);
    assert_eq!(circuits.len(), 20);

    let mut deduped = circuits.clone();
    deduped.dedup();
    assert_eq!(deduped.len(), circuits.len());

    for circuit in &circuits {
        assert_eq!(circuit.first(), circuit.last());
        let lowest = circuit.iter().min().unwrap();
        assert_eq!(circuit.first(), Some(lowest));
    }
}

#[test]
fn test_separate_components_are_all_searched() {
    let graph = graph_with(6, &[(0, 1), (1, 0), (2, 3), (3, 4), (4, 2), (5, 0)]);

    assert_eq!(
        sorted_circuits(&graph),
        vec![cycle(&[0, 1, 0]), cycle(&[2, 3, 4, 2])]
    );
}

#[test]
fn test_direct_self_edge_is_a_circuit() {
    let graph = graph_with(2, &[(0, 0), (0, 1)]);
    assert_eq!(sorted_circuits(&graph), vec![cycle(&[0, 0])]);
}

#[test]
fn test_long_chain_does_not_overflow() {
    let n = 5_000;
    let mut edges: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
    edges.push((n - 1, 0));
    let graph = graph_with(n, &edges);

    let circuits = elementary_circuits(&graph);
    assert_eq!(circuits.len(), 1);
    assert_eq!(circuits[0].len(), n + 1);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_cycle_drops_synthetic_nodes() {
    let mut registry = NodeRegistry::new();
    let holding = registry.identifier_for("holding");
    let synthetic = registry.allocate_synthetic();

    let rendered = render_cycle(&registry, &[holding, synthetic, holding]);
    assert_eq!(rendered, vec!["holding", "holding"]);
}

#[test]
fn test_format_cycle() {
    let names = vec!["a".to_string(), "b".to_string(), "a".to_string()];
    assert_eq!(format_cycle(&names), "a -> b -> a");
}
