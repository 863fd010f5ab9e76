//! Reachability and connectivity queries.
//!
//! Breadth-first reachability walks both directions of an undirected edge
//! and only outgoing arcs of a directed one. Component counts ignore
//! direction.

use std::collections::VecDeque;

use super::union_find::connected_components;
use crate::models::{Graph, NodeId};
use crate::{GraphError, Result};

/// Mark every node reachable from any of `sources`.
pub fn reachable_from(graph: &Graph, sources: &[NodeId]) -> Result<Vec<bool>> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let mut seen = vec![false; graph.num_nodes()];
    let mut queue = VecDeque::new();

    for &src in sources {
        graph.check_node(src)?;
        if !seen[src.index()] {
            seen[src.index()] = true;
            queue.push_back(src);
        }
    }

    while let Some(node) = queue.pop_front() {
        for neighbor in graph.neighbors(node) {
            if !seen[neighbor.index()] {
                seen[neighbor.index()] = true;
                queue.push_back(neighbor);
            }
        }
    }

    Ok(seen)
}

/// Number of connected components, ignoring edge direction.
pub fn component_count(graph: &Graph) -> usize {
    let ids = connected_components(graph);
    ids.iter().map(|c| c.get() + 1).max().unwrap_or(0) as usize
}

/// True when the graph forms a single component, ignoring edge direction.
///
/// The empty graph is not connected.
pub fn is_connected(graph: &Graph) -> bool {
    component_count(graph) == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_line_graph(n: u32, directed: bool) -> Graph {
        // 0 - 1 - 2 - ... - n-1
        let edges: Vec<_> = (0..n - 1).map(|i| (i, i + 1, 1)).collect();
        Graph::from_edges(n as usize, directed, &edges).unwrap()
    }

    #[test]
    fn test_reachable_undirected_line() {
        let graph = make_line_graph(5, false);
        let seen = reachable_from(&graph, &[NodeId(4)]).unwrap();
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_reachable_respects_direction() {
        let graph = make_line_graph(5, true);
        let seen = reachable_from(&graph, &[NodeId(2)]).unwrap();
        assert_eq!(seen, vec![false, false, true, true, true]);
    }

    #[test]
    fn test_reachable_unreachable() {
        // Two disconnected components: 0 - 1, 2 - 3
        let graph = Graph::from_edges(4, false, &[(0, 1, 1), (2, 3, 1)]).unwrap();
        let seen = reachable_from(&graph, &[NodeId(0)]).unwrap();
        assert_eq!(seen, vec![true, true, false, false]);

        let both = reachable_from(&graph, &[NodeId(0), NodeId(3)]).unwrap();
        assert!(both.iter().all(|&s| s));
    }

    #[test]
    fn test_component_count() {
        let graph = Graph::from_edges(6, false, &[(0, 1, 1), (2, 3, 1), (3, 4, 1)]).unwrap();
        assert_eq!(component_count(&graph), 3);
        assert!(!is_connected(&graph));

        assert!(is_connected(&make_line_graph(4, false)));
        // Direction is ignored for components
        assert!(is_connected(&make_line_graph(4, true)));
        assert!(is_connected(&Graph::undirected(1)));
        assert!(!is_connected(&Graph::undirected(0)));
    }

    #[test]
    fn test_empty_graph_error() {
        let graph = Graph::undirected(0);
        let result = reachable_from(&graph, &[NodeId(0)]);
        assert!(matches!(result, Err(GraphError::EmptyGraph)));
    }

    #[test]
    fn test_invalid_source_error() {
        let graph = make_line_graph(3, false);
        let result = reachable_from(&graph, &[NodeId(100)]);
        assert!(matches!(result, Err(GraphError::InvalidNodeId { .. })));
    }
}
