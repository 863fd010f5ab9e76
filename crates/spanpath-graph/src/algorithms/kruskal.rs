//! Kruskal's minimum spanning tree.
//!
//! Edges are taken in ascending weight order and accepted whenever their
//! endpoints still belong to different union-find sets. Sorting is stable,
//! so equal weights keep the graph's enumeration order and the output is
//! deterministic. On a disconnected graph the result is a minimum spanning
//! forest with `N - components` edges.

use tracing::{debug, trace};

use super::union_find::UnionFind;
use crate::models::{Edge, Graph, SpanningTree};
use crate::{GraphError, Result};

/// Run Kruskal's algorithm on an undirected graph.
///
/// # Example
///
/// ```
/// use spanpath_graph::{kruskal, Graph};
///
/// let graph = Graph::from_edges(3, false, &[(0, 1, 4), (1, 2, 1), (0, 2, 2)]).unwrap();
/// let tree = kruskal(&graph).unwrap();
/// assert_eq!(tree.total_weight(), 3);
/// ```
pub fn kruskal(graph: &Graph) -> Result<SpanningTree> {
    if graph.is_directed() {
        return Err(GraphError::InvalidArgument(
            "Kruskal's algorithm requires an undirected graph".to_string(),
        ));
    }

    let n = graph.num_nodes();
    let mut edges: Vec<Edge> = graph.edges().copied().collect();
    edges.sort_by_key(|e| e.weight);

    let mut sets = UnionFind::new(n);
    let mut tree = SpanningTree::new(n);
    let target = n.saturating_sub(1);

    for edge in edges {
        if tree.len() == target {
            break;
        }
        if sets.union(edge.source, edge.target) {
            trace!(%edge, "kruskal accepted edge");
            tree.push(edge);
        }
    }

    debug!(
        nodes = n,
        edges = graph.num_edges(),
        selected = tree.len(),
        weight = %tree.total_weight(),
        "kruskal finished"
    );

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeId;

    fn complete_four() -> Graph {
        Graph::from_edges(
            4,
            false,
            &[
                (0, 1, 12),
                (0, 2, -4),
                (0, 3, -1),
                (1, 2, 14),
                (1, 3, -4),
                (2, 3, 5),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_complete_four_nodes() {
        let tree = kruskal(&complete_four()).unwrap();

        assert!(tree.is_spanning());
        assert_eq!(tree.total_weight(), -9);
        // Ties on -4 keep enumeration order
        assert_eq!(tree.triples(), vec![(0, 2, -4), (1, 3, -4), (0, 3, -1)]);
    }

    #[test]
    fn test_disconnected_gives_forest() {
        let graph =
            Graph::from_edges(5, false, &[(0, 1, 3), (1, 2, 1), (0, 2, 2), (3, 4, 7)]).unwrap();

        let tree = kruskal(&graph).unwrap();

        assert_eq!(tree.len(), 3);
        assert_eq!(tree.component_count(), 2);
        assert!(!tree.is_spanning());
        assert_eq!(tree.total_weight(), 10);
    }

    #[test]
    fn test_skips_cycle_edges() {
        // Triangle: heaviest edge closes the cycle
        let graph = Graph::from_edges(3, false, &[(0, 1, 1), (1, 2, 2), (2, 0, 3)]).unwrap();
        let tree = kruskal(&graph).unwrap();

        assert_eq!(tree.len(), 2);
        assert!(!tree
            .edges()
            .iter()
            .any(|e| e.source == NodeId(2) && e.target == NodeId(0)));
    }

    #[test]
    fn test_single_node_and_empty() {
        assert!(kruskal(&Graph::undirected(1)).unwrap().is_empty());
        assert!(kruskal(&Graph::undirected(0)).unwrap().is_empty());
    }

    #[test]
    fn test_rejects_directed() {
        let graph = Graph::from_edges(2, true, &[(0, 1, 1)]).unwrap();
        assert!(matches!(
            kruskal(&graph),
            Err(GraphError::InvalidArgument(_))
        ));
    }
}
