//! Reachability over the undirected family graph

use crate::{FamilyGraph, NodeId, Result};
use std::collections::BTreeSet;

/// Every node reachable from `start` over parent, child and membership edges
///
/// Edges are followed in both directions. Uses an explicit stack and marks a
/// node visited when it is pushed, so cycles terminate and deep trees cannot
/// overflow the call stack. The result always contains `start`.
///
/// # Errors
/// `NotFound` if `start`, or any id reachable from it, is not registered.
///
/// # Examples
///
/// ```
/// use kinship_domain::{connected_component, FamilyGraph};
///
/// let mut graph = FamilyGraph::new();
/// let a = graph.create_individual("A", "Smith", None, None).unwrap().id();
/// let b = graph.create_individual("B", "Smith", None, None).unwrap().id();
/// let loner = graph.create_individual("C", "Jones", None, None).unwrap().id();
/// let couple = graph.create_pairing(&[a, b], None).unwrap().id();
///
/// let relatives = connected_component(&graph, a).unwrap();
/// assert!(relatives.contains(&b) && relatives.contains(&couple));
/// assert!(!relatives.contains(&loner));
/// ```
pub fn connected_component(graph: &FamilyGraph, start: NodeId) -> Result<BTreeSet<NodeId>> {
    graph.lookup(start)?;

    let mut visited = BTreeSet::from([start]);
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        for neighbor in graph.lookup(current)?.neighbors() {
            if visited.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    Ok(visited)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GraphError;

    fn id(value: u64) -> NodeId {
        NodeId::new(value)
    }

    /// Two separate families:
    /// 1 + 3 -> (2) -> 5, 7 ; 5 + 9 -> (4) -> 11
    /// 13 + 15 -> (6)
    fn two_families() -> FamilyGraph {
        let mut graph = FamilyGraph::new();
        for name in ["A", "B", "C", "D", "E", "F", "G", "H"] {
            graph.create_individual(name, "X", None, None).unwrap();
        }
        graph.create_pairing(&[id(1), id(3)], None).unwrap();
        graph.add_children(id(2), &[id(5), id(7)]).unwrap();
        graph.create_pairing(&[id(5), id(9)], None).unwrap();
        graph.add_child(id(4), id(11)).unwrap();
        graph.create_pairing(&[id(13), id(15)], None).unwrap();
        graph
    }

    #[test]
    fn test_component_spans_generations() {
        let graph = two_families();
        let component = connected_component(&graph, id(11)).unwrap();
        let expected = BTreeSet::from([id(1), id(2), id(3), id(4), id(5), id(7), id(9), id(11)]);
        assert_eq!(component, expected);
    }

    #[test]
    fn test_component_excludes_other_family() {
        let graph = two_families();
        let component = connected_component(&graph, id(13)).unwrap();
        assert_eq!(component, BTreeSet::from([id(6), id(13), id(15)]));
    }

    #[test]
    fn test_isolated_individual() {
        let mut graph = FamilyGraph::new();
        let alone = graph.create_individual("Solo", "Person", None, None).unwrap().id();
        assert_eq!(connected_component(&graph, alone).unwrap(), BTreeSet::from([alone]));
    }

    #[test]
    fn test_unknown_start() {
        let graph = two_families();
        assert_eq!(
            connected_component(&graph, id(99)).unwrap_err(),
            GraphError::NotFound(id(99))
        );
    }

    #[test]
    fn test_terminates_on_cycle() {
        // A child paired with its own parent closes a loop through two pairings.
        let mut graph = FamilyGraph::new();
        let a = graph.create_individual("A", "X", None, None).unwrap().id();
        let b = graph.create_individual("B", "X", None, None).unwrap().id();
        let c = graph.create_individual("C", "X", None, None).unwrap().id();
        let first = graph.create_pairing(&[a, b], None).unwrap().id();
        graph.add_child(first, c).unwrap();
        let second = graph.create_pairing(&[a, c], None).unwrap().id();
        graph.add_child(second, b).unwrap();

        let component = connected_component(&graph, a).unwrap();
        assert_eq!(component, BTreeSet::from([a, b, c, first, second]));
    }
}
