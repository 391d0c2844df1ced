// Tests for the dependency graph

use super::*;

fn graph_from(edges: &[(&str, &str)]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for (from, to) in edges {
        graph.add_dependency(from, to);
    }
    graph
}

fn cycles_of(expected: &[&[&str]]) -> Vec<Vec<String>> {
    expected
        .iter()
        .map(|cycle| cycle.iter().map(|name| name.to_string()).collect())
        .collect()
}

// ============================================================================
// Basic Graph Operations
// ============================================================================

#[test]
fn test_new_graph_is_empty() {
    let graph = DependencyGraph::new();
    assert_eq!(graph.node_count(), 0);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.circular_dependencies().is_empty());
    assert!(!graph.has_cycles());
}

#[test]
fn test_add_dependency_registers_both_names() {
    let graph = graph_from(&[("a", "b")]);
    assert!(graph.contains("a"));
    assert!(graph.contains("b"));
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_duplicate_edge_is_ignored() {
    let graph = graph_from(&[("a", "b"), ("a", "b")]);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_self_dependency_uses_synthetic_node() {
    let graph = graph_from(&[("a", "a")]);

    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.registry().len(), 2);
    assert_eq!(graph.edge_count(), 2);
    assert!(graph.registry().is_synthetic(NodeId::new(1)));
}

#[test]
fn test_repeated_self_dependency_reuses_synthetic_node() {
    let graph = graph_from(&[("a", "a"), ("a", "a")]);

    assert_eq!(graph.registry().len(), 2);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.circular_dependencies(), cycles_of(&[&["a", "a"]]));
}

// ============================================================================
// Dependencies
// ============================================================================

#[test]
fn test_dependencies_are_lexically_sorted() {
    let mut graph = graph_from(&[("company", "tech-team"), ("tech-team", "cto")]);
    assert_eq!(graph.dependencies("company"), vec!["cto", "tech-team"]);
}

#[test]
fn test_dependencies_through_self_loop_and_cycle() {
    let mut graph = graph_from(&[
        ("a", "z"),
        ("a", "a"),
        ("z", "b"),
        ("b", "c"),
        ("c", "d"),
        ("d", "e"),
        ("c", "a"),
    ]);

    for _ in 0..2 {
        assert_eq!(graph.dependencies("a"), vec!["b", "c", "d", "e", "z"]);
        assert_eq!(graph.dependencies("c"), vec!["a", "b", "d", "e", "z"]);
    }
}

#[test]
fn test_dependencies_of_unseen_name_registers_it() {
    let mut graph = graph_from(&[("a", "b")]);

    assert!(graph.dependencies("ghost").is_empty());
    assert!(graph.contains("ghost"));
    assert_eq!(graph.registry().lookup("ghost"), Some(NodeId::new(2)));
}

#[test]
fn test_known_dependencies_does_not_register() {
    let graph = graph_from(&[("a", "b")]);

    assert_eq!(graph.known_dependencies("a"), Some(vec!["b".to_string()]));
    assert_eq!(graph.known_dependencies("ghost"), None);
    assert!(!graph.contains("ghost"));
}

#[test]
fn test_dependencies_never_include_self() {
    let mut graph = graph_from(&[("x", "y"), ("y", "x"), ("x", "x")]);
    assert_eq!(graph.dependencies("x"), vec!["y"]);
    assert_eq!(graph.dependencies("y"), vec!["x"]);
}

// ============================================================================
// Circular Dependencies
// ============================================================================

#[test]
fn test_single_self_loop_renders_as_pair() {
    let graph = graph_from(&[("holding", "holding")]);
    assert_eq!(graph.circular_dependencies(), cycles_of(&[&["holding", "holding"]]));
}

#[test]
fn test_circular_dependencies_are_deterministic() {
    for _ in 0..100 {
        let graph = graph_from(&[
            ("holding", "company"),
            ("company", "department"),
            ("department", "holding"),
            ("holding", "holding"),
            ("department", "department"),
            ("holding", "department"),
        ]);

        assert_eq!(
            graph.circular_dependencies(),
            cycles_of(&[
                &["holding", "company", "department", "holding"],
                &["holding", "department", "holding"],
                &["holding", "holding"],
                &["department", "department"],
            ])
        );
    }
}

#[test]
fn test_cycles_sharing_a_path() {
    let graph = graph_from(&[
        ("company", "tech-team"),
        ("tech-team", "cto"),
        ("cto", "company"),
        ("cto", "ceo"),
        ("ceo", "company"),
    ]);

    assert_eq!(
        graph.circular_dependencies(),
        cycles_of(&[
            &["company", "tech-team", "cto", "company"],
            &["company", "tech-team", "cto", "ceo", "company"],
        ])
    );
}

#[test]
fn test_repeating_every_edge_changes_nothing() {
    let edges = [
        ("holding", "company"),
        ("company", "department"),
        ("department", "holding"),
        ("holding", "holding"),
    ];
    let mut once = graph_from(&edges);
    let mut twice = graph_from(&edges);
    for (from, to) in edges {
        twice.add_dependency(from, to);
    }

    assert_eq!(once.circular_dependencies(), twice.circular_dependencies());
    assert_eq!(once.dependencies("holding"), twice.dependencies("holding"));
    assert_eq!(once.edge_count(), twice.edge_count());
}

#[test]
fn test_acyclic_graph_has_no_cycles() {
    let graph = graph_from(&[("a", "b"), ("b", "c"), ("a", "c")]);
    assert!(graph.circular_dependencies().is_empty());
    assert!(!graph.has_cycles());
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_ensure_acyclic_passes_for_dag() {
    let graph = graph_from(&[("a", "b"), ("b", "c")]);
    assert!(graph.ensure_acyclic().is_ok());
}

#[test]
fn test_ensure_acyclic_lists_every_cycle() {
    let graph = graph_from(&[("a", "b"), ("b", "a"), ("c", "c")]);

    let err = graph.ensure_acyclic().unwrap_err();
    assert_eq!(
        err.to_string(),
        "Circular dependency detected: a -> b -> a; c -> c"
    );
}

#[test]
fn test_add_node_registers_without_edges() {
    let mut graph = DependencyGraph::new();
    let logger = graph.add_node("logger");

    assert_eq!(graph.add_node("logger"), logger);
    assert!(graph.contains("logger"));
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert!(graph.dependencies("logger").is_empty());
}
