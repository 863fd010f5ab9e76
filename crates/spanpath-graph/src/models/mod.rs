//! Graph data models.
//!
//! This module provides the core data structures for representing graphs:
//! - [`Graph`]: Edge arena with index-based adjacency
//! - [`SpanningTree`]: Edges selected by an MST run
//! - [`NodeId`], [`Distance`], [`ComponentId`]: Graph node types

pub mod graph;
pub mod node;
pub mod tree;

pub use graph::{Edge, EdgeId, Graph};
pub use node::{ComponentId, Distance, NodeId, PathWeight, Weight};
pub use tree::SpanningTree;
