//! Weighted adjacency graph.
//!
//! Edges live in an arena of slots addressed by [`EdgeId`]; each node keeps
//! the ids of its incident edges in insertion order. Removing an edge empties
//! its slot without moving other edges, so enumeration order is stable.
//!
//! Memory layout:
//! - `slots[e]` = edge `e`, or `None` once removed
//! - `adjacency[u]` = ids of edges incident to `u` (undirected) or leaving
//!   `u` (directed)

use std::fmt;

use serde::{Deserialize, Serialize};

use super::node::{NodeId, PathWeight, Weight};
use crate::{GraphError, Result};

/// Index of an edge slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub usize);

/// A weighted edge.
///
/// For undirected graphs the endpoint order is the order of insertion and
/// carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// First endpoint (tail of a directed arc).
    pub source: NodeId,
    /// Second endpoint (head of a directed arc).
    pub target: NodeId,
    /// Edge weight.
    pub weight: Weight,
}

impl Edge {
    /// Create a new edge.
    pub const fn new(source: NodeId, target: NodeId, weight: Weight) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Endpoint opposite to `node`.
    pub fn other(&self, node: NodeId) -> NodeId {
        if self.source == node {
            self.target
        } else {
            self.source
        }
    }

    /// `(u, v, weight)` view used by renderers and the CLI.
    pub const fn triple(&self) -> (u32, u32, Weight) {
        (self.source.0, self.target.0, self.weight)
    }

    fn joins(&self, u: NodeId, v: NodeId, directed: bool) -> bool {
        (self.source == u && self.target == v)
            || (!directed && self.source == v && self.target == u)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.source, self.target, self.weight)
    }
}

/// Mutable weighted graph over dense node indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(into = "GraphRepr", try_from = "GraphRepr")]
pub struct Graph {
    directed: bool,
    slots: Vec<Option<Edge>>,
    adjacency: Vec<Vec<EdgeId>>,
    num_edges: usize,
}

impl Graph {
    /// Create a graph with `num_nodes` isolated nodes.
    pub fn new(num_nodes: usize, directed: bool) -> Self {
        Self {
            directed,
            slots: Vec::new(),
            adjacency: vec![Vec::new(); num_nodes],
            num_edges: 0,
        }
    }

    /// Create an undirected graph with `num_nodes` isolated nodes.
    pub fn undirected(num_nodes: usize) -> Self {
        Self::new(num_nodes, false)
    }

    /// Create a directed graph with `num_nodes` isolated nodes.
    pub fn directed(num_nodes: usize) -> Self {
        Self::new(num_nodes, true)
    }

    /// Build a graph from `(u, v, weight)` triples.
    ///
    /// # Example
    ///
    /// ```
    /// use spanpath_graph::{Graph, NodeId};
    ///
    /// let graph = Graph::from_edges(3, false, &[(0, 1, 4), (1, 2, -2)]).unwrap();
    /// assert_eq!(graph.num_edges(), 2);
    /// assert_eq!(graph.weight(NodeId(2), NodeId(1)), Some(-2));
    /// ```
    pub fn from_edges(
        num_nodes: usize,
        directed: bool,
        edges: &[(u32, u32, Weight)],
    ) -> Result<Self> {
        let mut graph = Self::new(num_nodes, directed);
        for &(u, v, w) in edges {
            graph.add_edge(NodeId(u), NodeId(v), w)?;
        }
        Ok(graph)
    }

    /// Whether edges are ordered arcs.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges currently present.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate over all node ids.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.adjacency.len() as u32).map(NodeId)
    }

    /// Check that `node` is in range.
    pub fn check_node(&self, node: NodeId) -> Result<()> {
        if node.index() < self.adjacency.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidNodeId {
                node: node.0,
                num_nodes: self.adjacency.len(),
            })
        }
    }

    /// Append a new isolated node.
    pub fn add_node(&mut self) -> NodeId {
        self.adjacency.push(Vec::new());
        NodeId((self.adjacency.len() - 1) as u32)
    }

    /// Remove `node` and every edge touching it.
    ///
    /// Nodes above `node` shift down by one so indices stay dense.
    pub fn remove_node(&mut self, node: NodeId) -> Result<()> {
        self.check_node(node)?;

        for slot in self.slots.iter_mut() {
            if matches!(slot, Some(e) if e.source == node || e.target == node) {
                *slot = None;
                self.num_edges -= 1;
            }
        }
        self.adjacency.remove(node.index());

        let slots = &self.slots;
        for ids in self.adjacency.iter_mut() {
            ids.retain(|id| slots[id.0].is_some());
        }

        let shift = |n: NodeId| if n > node { NodeId(n.0 - 1) } else { n };
        for edge in self.slots.iter_mut().flatten() {
            edge.source = shift(edge.source);
            edge.target = shift(edge.target);
        }

        Ok(())
    }

    /// Insert an edge.
    ///
    /// Self-loops and duplicates are rejected. In a directed graph the arcs
    /// `u -> v` and `v -> u` are distinct.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, weight: Weight) -> Result<EdgeId> {
        self.check_node(u)?;
        self.check_node(v)?;
        if u == v {
            return Err(GraphError::InvalidArgument(format!(
                "self-loop on node {} is not allowed",
                u
            )));
        }
        if self.find_edge(u, v).is_some() {
            return Err(GraphError::InvalidArgument(format!(
                "edge ({}, {}) already exists",
                u, v
            )));
        }

        let id = EdgeId(self.slots.len());
        self.slots.push(Some(Edge::new(u, v, weight)));
        self.adjacency[u.index()].push(id);
        if !self.directed {
            self.adjacency[v.index()].push(id);
        }
        self.num_edges += 1;
        Ok(id)
    }

    /// Remove the edge between `u` and `v`.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) -> Result<Edge> {
        self.check_node(u)?;
        self.check_node(v)?;
        let id = self
            .find_edge(u, v)
            .ok_or(GraphError::EdgeNotFound { from: u.0, to: v.0 })?;
        self.remove_edge_by_id(id)
            .ok_or(GraphError::EdgeNotFound { from: u.0, to: v.0 })
    }

    /// Remove an edge by id, returning it if it was present.
    pub fn remove_edge_by_id(&mut self, id: EdgeId) -> Option<Edge> {
        let edge = self.slots.get_mut(id.0)?.take()?;
        self.adjacency[edge.source.index()].retain(|&e| e != id);
        if !self.directed {
            self.adjacency[edge.target.index()].retain(|&e| e != id);
        }
        self.num_edges -= 1;
        Some(edge)
    }

    /// Find the edge between `u` and `v` (in either orientation when
    /// undirected).
    pub fn find_edge(&self, u: NodeId, v: NodeId) -> Option<EdgeId> {
        self.adjacency.get(u.index())?.iter().copied().find(|id| {
            self.slots[id.0]
                .as_ref()
                .is_some_and(|e| e.joins(u, v, self.directed))
        })
    }

    /// Check if an edge exists between `u` and `v`.
    pub fn contains_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.find_edge(u, v).is_some()
    }

    /// Get an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.slots.get(id.0)?.as_ref()
    }

    /// Weight of the edge between `u` and `v`.
    ///
    /// Symmetric for undirected graphs.
    pub fn weight(&self, u: NodeId, v: NodeId) -> Option<Weight> {
        self.find_edge(u, v)
            .and_then(|id| self.edge(id))
            .map(|e| e.weight)
    }

    /// Replace the weight of an existing edge.
    pub fn set_weight(&mut self, u: NodeId, v: NodeId, weight: Weight) -> Result<()> {
        let id = self
            .find_edge(u, v)
            .ok_or(GraphError::EdgeNotFound { from: u.0, to: v.0 })?;
        if let Some(edge) = self.slots[id.0].as_mut() {
            edge.weight = weight;
        }
        Ok(())
    }

    /// Iterate over edges in enumeration (insertion) order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.slots.iter().flatten()
    }

    /// Iterate over `(id, edge)` pairs in enumeration order.
    pub fn edge_entries(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|e| (EdgeId(i), e)))
    }

    /// Edges touching `node` (outgoing arcs when directed), in adjacency
    /// order. Empty for out-of-range nodes.
    pub fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.adjacency
            .get(node.index())
            .into_iter()
            .flatten()
            .filter_map(move |&id| self.slots[id.0].as_ref().map(|e| (id, e)))
    }

    /// Nodes adjacent to `node` (successors when directed).
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.incident_edges(node).map(move |(_, e)| e.other(node))
    }

    /// Number of incident edges (out-degree when directed).
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency.get(node.index()).map_or(0, Vec::len)
    }

    /// Sum of all edge weights.
    pub fn total_weight(&self) -> PathWeight {
        self.edges().map(|e| PathWeight::from(e.weight)).sum()
    }
}

/// Serialized form: node count plus the edge list.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GraphRepr {
    directed: bool,
    num_nodes: usize,
    edges: Vec<Edge>,
}

impl From<Graph> for GraphRepr {
    fn from(graph: Graph) -> Self {
        Self {
            directed: graph.directed,
            num_nodes: graph.num_nodes(),
            edges: graph.edges().copied().collect(),
        }
    }
}

impl TryFrom<GraphRepr> for Graph {
    type Error = GraphError;

    fn try_from(repr: GraphRepr) -> Result<Self> {
        let mut graph = Graph::new(repr.num_nodes, repr.directed);
        for e in repr.edges {
            graph.add_edge(e.source, e.target, e.weight)?;
        }
        Ok(graph)
    }
}
