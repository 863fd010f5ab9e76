//! Spanning tree (or forest) produced by the MST algorithms.

use serde::{Deserialize, Serialize};

use super::graph::Edge;
use super::node::{PathWeight, Weight};

/// Ordered list of selected edges over a graph of `num_nodes` nodes.
///
/// Edges appear in the order the algorithm accepted them. For a connected
/// input this is a tree with `num_nodes - 1` edges; otherwise it is a
/// spanning forest with one tree per component.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpanningTree {
    num_nodes: usize,
    edges: Vec<Edge>,
}

impl SpanningTree {
    /// Create an empty tree over `num_nodes` nodes.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            edges: Vec::with_capacity(num_nodes.saturating_sub(1)),
        }
    }

    pub(crate) fn push(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Selected edges in acceptance order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of selected edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Check if no edge was selected.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of nodes of the source graph.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Sum of selected edge weights, exact for any `i64` weights.
    pub fn total_weight(&self) -> PathWeight {
        self.edges.iter().map(|e| PathWeight::from(e.weight)).sum()
    }

    /// True when the edges span every node (`len == num_nodes - 1`).
    pub fn is_spanning(&self) -> bool {
        self.edges.len() + 1 == self.num_nodes.max(1)
    }

    /// Number of trees in the forest.
    ///
    /// Zero when the edge list is longer than a forest allows, which only a
    /// hand-built or deserialized value can be.
    pub fn component_count(&self) -> usize {
        self.num_nodes.saturating_sub(self.edges.len())
    }

    /// `(u, v, weight)` triples in acceptance order.
    pub fn triples(&self) -> Vec<(u32, u32, Weight)> {
        self.edges.iter().map(Edge::triple).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NodeId;

    #[test]
    fn test_empty_tree() {
        let tree = SpanningTree::new(1);
        assert!(tree.is_empty());
        assert!(tree.is_spanning());
        assert_eq!(tree.component_count(), 1);
        assert_eq!(tree.total_weight(), 0);
    }

    #[test]
    fn test_forest_accounting() {
        let mut tree = SpanningTree::new(4);
        tree.push(Edge::new(NodeId(0), NodeId(1), -3));
        tree.push(Edge::new(NodeId(2), NodeId(3), 5));

        assert!(!tree.is_spanning());
        assert_eq!(tree.component_count(), 2);
        assert_eq!(tree.total_weight(), 2);
        assert_eq!(tree.triples(), vec![(0, 1, -3), (2, 3, 5)]);
    }

    #[test]
    fn test_total_weight_beyond_i64() {
        let mut tree = SpanningTree::new(3);
        tree.push(Edge::new(NodeId(0), NodeId(1), Weight::MAX));
        tree.push(Edge::new(NodeId(1), NodeId(2), 5));
        assert_eq!(tree.total_weight(), Weight::MAX as PathWeight + 5);

        let mut low = SpanningTree::new(3);
        low.push(Edge::new(NodeId(0), NodeId(1), Weight::MIN));
        low.push(Edge::new(NodeId(1), NodeId(2), Weight::MIN));
        assert_eq!(low.total_weight(), 2 * Weight::MIN as PathWeight);
    }

    #[test]
    fn test_component_count_of_oversized_edge_list() {
        let json = r#"{"num_nodes":1,"edges":[{"source":0,"target":1,"weight":2}]}"#;
        let tree: SpanningTree = serde_json::from_str(json).unwrap();
        assert_eq!(tree.component_count(), 0);
        assert!(!tree.is_spanning());
    }
}
