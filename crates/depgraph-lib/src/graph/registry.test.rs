// Tests for node identifier bookkeeping

use super::*;

#[test]
fn test_identifiers_assigned_in_creation_order() {
    let mut registry = NodeRegistry::new();

    assert_eq!(registry.identifier_for("holding"), NodeId::new(0));
    assert_eq!(registry.identifier_for("company"), NodeId::new(1));
    assert_eq!(registry.identifier_for("department"), NodeId::new(2));
    assert_eq!(registry.len(), 3);
}

#[test]
fn test_identifier_for_known_name_is_stable() {
    let mut registry = NodeRegistry::new();
    let first = registry.identifier_for("company");
    registry.identifier_for("other");

    assert_eq!(registry.identifier_for("company"), first);
    assert_eq!(registry.len(), 2);
}

#[test]
fn test_name_and_identifier_are_inverse() {
    let mut registry = NodeRegistry::new();
    for name in ["a", "b", "c"] {
        let id = registry.identifier_for(name);
        assert_eq!(registry.name_for(id), Some(name));
        assert_eq!(registry.lookup(name), Some(id));
    }
}

#[test]
fn test_synthetic_nodes_have_no_name() {
    let mut registry = NodeRegistry::new();
    registry.identifier_for("a");
    let synthetic = registry.allocate_synthetic();
    let next = registry.identifier_for("b");

    assert_eq!(synthetic, NodeId::new(1));
    assert_eq!(next, NodeId::new(2));
    assert_eq!(registry.name_for(synthetic), None);
    assert!(registry.is_synthetic(synthetic));
    assert!(!registry.is_synthetic(next));
}

#[test]
fn test_unknown_identifier_has_no_name() {
    let registry = NodeRegistry::new();
    assert_eq!(registry.name_for(NodeId::new(7)), None);
    assert!(!registry.is_synthetic(NodeId::new(7)));
    assert!(registry.is_empty());
}

#[test]
fn test_lookup_does_not_allocate() {
    let registry = NodeRegistry::new();
    assert_eq!(registry.lookup("missing"), None);
    assert_eq!(registry.len(), 0);
}

#[test]
fn test_self_loop_node_reused_per_owner() {
    let mut registry = NodeRegistry::new();
    let a = registry.identifier_for("a");
    let b = registry.identifier_for("b");

    let first = registry.self_loop_for(a);
    let again = registry.self_loop_for(a);
    let other = registry.self_loop_for(b);

    assert_eq!(first, again);
    assert_ne!(first, other);
    assert_eq!(registry.len(), 4);
}

#[test]
fn test_names_skip_synthetic_nodes() {
    let mut registry = NodeRegistry::new();
    registry.identifier_for("x");
    registry.allocate_synthetic();
    registry.identifier_for("y");

    let names: Vec<_> = registry.names().collect();
    assert_eq!(names, vec![(NodeId::new(0), "x"), (NodeId::new(2), "y")]);
}

#[test]
fn test_node_id_display() {
    assert_eq!(NodeId::new(3).to_string(), "node_3");
}
