//! Public API scenarios for the dependency graph

use depgraph_lib::{DependencyGraph, GraphError};

fn graph_from(edges: &[(&str, &str)]) -> DependencyGraph {
    let mut graph = DependencyGraph::new();
    for (from, to) in edges {
        graph.add_dependency(from, to);
    }
    graph
}

#[test]
fn test_company_cycles() {
    let graph = graph_from(&[
        ("company", "tech-team"),
        ("tech-team", "cto"),
        ("cto", "company"),
        ("cto", "ceo"),
        ("ceo", "company"),
    ]);

    assert_eq!(
        graph.circular_dependencies(),
        vec![
            vec!["company", "tech-team", "cto", "company"],
            vec!["company", "tech-team", "cto", "ceo", "company"],
        ]
    );
}

#[test]
fn test_company_dependencies() {
    let mut graph = graph_from(&[("company", "tech-team"), ("tech-team", "cto")]);
    assert_eq!(graph.dependencies("company"), vec!["cto", "tech-team"]);
}

#[test]
fn test_independent_graphs_do_not_share_identifiers() {
    let mut first = DependencyGraph::new();
    let mut second = DependencyGraph::new();

    first.add_dependency("a", "b");
    second.add_dependency("b", "a");
    second.add_dependency("a", "b");

    assert_eq!(first.registry().lookup("a").map(|id| id.index()), Some(0));
    assert_eq!(second.registry().lookup("b").map(|id| id.index()), Some(0));
    assert!(first.circular_dependencies().is_empty());
    assert_eq!(second.circular_dependencies(), vec![vec!["b", "a", "b"]]);
}

#[test]
fn test_idempotent_insertion_across_queries() {
    let edges = [("x", "y"), ("y", "z"), ("z", "x"), ("y", "y")];
    let mut graph = graph_from(&edges);
    let cycles = graph.circular_dependencies();
    let deps = graph.dependencies("x");

    for (from, to) in edges {
        graph.add_dependency(from, to);
    }

    assert_eq!(graph.circular_dependencies(), cycles);
    assert_eq!(graph.dependencies("x"), deps);
}

#[test]
fn test_ensure_acyclic_error_message() {
    let graph = graph_from(&[("holding", "holding")]);

    match graph.ensure_acyclic() {
        Err(GraphError::CircularDependency { cycles }) => assert_eq!(cycles, "holding -> holding"),
        Ok(()) => panic!("self-dependency should be reported"),
    }
}

#[test]
fn test_graph_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DependencyGraph>();
}
