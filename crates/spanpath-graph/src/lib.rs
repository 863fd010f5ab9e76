//! Graph algorithm primitives for spanpath.
//!
//! This crate provides a small, strongly-typed graph toolkit:
//!
//! - **Graph**: Weighted directed/undirected graph with index-based adjacency
//! - **Generator**: Random graphs that are always connected when undirected
//! - **Union-Find**: Disjoint set with path compression
//! - **Kruskal / Prim**: Interchangeable minimum spanning tree strategies
//! - **Bellman-Ford**: Single-source shortest paths with negative-cycle detection
//!
//! # Example
//!
//! ```
//! use spanpath_graph::{
//!     bellman_ford, minimum_spanning_tree, Graph, MstAlgorithm, NodeId, ShortestPaths,
//! };
//!
//! let graph = Graph::from_edges(
//!     4,
//!     false,
//!     &[(0, 1, 12), (0, 2, -4), (0, 3, -1), (1, 2, 14), (1, 3, -4), (2, 3, 5)],
//! )
//! .unwrap();
//!
//! let tree = minimum_spanning_tree(&graph, MstAlgorithm::Kruskal).unwrap();
//! assert_eq!(tree.total_weight(), -9);
//!
//! match bellman_ford(&graph, NodeId(0)).unwrap() {
//!     ShortestPaths::Distances(map) => assert_eq!(map.reachable_count(), 4),
//!     ShortestPaths::NegativeCycleDetected => unreachable!(),
//! }
//! ```

pub mod algorithms;
pub mod generator;
pub mod models;

// Re-export main types
pub use algorithms::bellman_ford::{
    bellman_ford, bellman_ford_with_config, BellmanFordConfig, DistanceMap, RelaxationRounds,
    ShortestPaths,
};
pub use algorithms::connectivity::{component_count, is_connected, reachable_from};
pub use algorithms::kruskal::kruskal;
pub use algorithms::mst::{minimum_spanning_tree, MstAlgorithm};
pub use algorithms::prim::prim;
pub use algorithms::union_find::{connected_components, UnionFind};
pub use generator::{generate, GeneratorConfig, RandomConnectedGraphGenerator};
pub use models::graph::{Edge, EdgeId, Graph};
pub use models::node::{ComponentId, Distance, NodeId, PathWeight, Weight};
pub use models::tree::SpanningTree;

/// Graph algorithm error types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// Malformed parameters.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Node index outside `[0, num_nodes)`.
    #[error("Invalid node ID: {node} (graph has {num_nodes} nodes)")]
    InvalidNodeId { node: u32, num_nodes: usize },

    /// No edge joins the given nodes.
    #[error("No edge between {from} and {to}")]
    EdgeNotFound { from: u32, to: u32 },

    /// Spanning tree requested for a disconnected graph.
    #[error("Graph is not connected: reached {visited} of {total} nodes")]
    GraphNotConnected { visited: usize, total: usize },

    /// Empty graph.
    #[error("Empty graph")]
    EmptyGraph,

    /// A path length left the `PathWeight` range.
    #[error("Distance to node {node} overflowed")]
    DistanceOverflow { node: u32 },
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
