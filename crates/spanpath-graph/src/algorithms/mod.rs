//! Graph algorithms.
//!
//! This module provides:
//! - [`union_find`]: Disjoint set data structure
//! - [`connectivity`]: Reachability and component counts
//! - [`kruskal`]: Minimum spanning tree via sorted edges and union-find
//! - [`prim`]: Minimum spanning tree via frontier expansion
//! - [`mst`]: Strategy selector over the two MST algorithms
//! - [`bellman_ford`]: Single-source shortest paths with negative-cycle detection

pub mod bellman_ford;
pub mod connectivity;
pub mod kruskal;
pub mod mst;
pub mod prim;
pub mod union_find;

pub use bellman_ford::{
    bellman_ford, bellman_ford_with_config, BellmanFordConfig, DistanceMap, RelaxationRounds,
    ShortestPaths,
};
pub use connectivity::{component_count, is_connected, reachable_from};
pub use kruskal::kruskal;
pub use mst::{minimum_spanning_tree, MstAlgorithm};
pub use prim::prim;
pub use union_find::{connected_components, UnionFind};
