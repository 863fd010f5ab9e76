//! Union-Find (Disjoint Set) data structure.
//!
//! Union-Find tracks connected components while Kruskal grows a forest.
//! Supports:
//! - `find(x)`: Find representative of x's component
//! - `union(x, y)`: Merge components containing x and y
//!
//! Uses full path compression. Union always hangs the root of `x` under the
//! root of `y`; there is no rank or size bookkeeping, so the tree shape
//! depends on call order but compression keeps amortized cost low.

use crate::models::{ComponentId, Graph, NodeId};
use crate::{GraphError, Result};

/// Union-Find data structure with path compression.
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// Parent pointers (parent[i] = parent of node i, or i if root).
    parent: Vec<u32>,
    /// Number of components.
    num_components: usize,
}

impl UnionFind {
    /// Create new Union-Find with n singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            num_components: n,
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint components.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Find representative of node's component with path compression.
    ///
    /// Panics if `x` is out of range; see [`UnionFind::try_find`].
    pub fn find(&mut self, x: NodeId) -> NodeId {
        let mut root = x.0;

        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        // Point every node on the path directly at the root
        let mut node = x.0;
        while self.parent[node as usize] != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        NodeId(root)
    }

    /// Merge the components of `x` and `y`.
    ///
    /// The root of `x` becomes a child of the root of `y`. Returns true if a
    /// merge occurred (x and y were in different components).
    pub fn union(&mut self, x: NodeId, y: NodeId) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        self.parent[root_x.0 as usize] = root_y.0;
        self.num_components -= 1;
        true
    }

    /// Check if two nodes are in the same component.
    pub fn connected(&mut self, x: NodeId, y: NodeId) -> bool {
        self.find(x) == self.find(y)
    }

    /// Bounds-checked [`UnionFind::find`].
    pub fn try_find(&mut self, x: NodeId) -> Result<NodeId> {
        self.check(x)?;
        Ok(self.find(x))
    }

    /// Bounds-checked [`UnionFind::union`].
    pub fn try_union(&mut self, x: NodeId, y: NodeId) -> Result<bool> {
        self.check(x)?;
        self.check(y)?;
        Ok(self.union(x, y))
    }

    fn check(&self, x: NodeId) -> Result<()> {
        if x.index() < self.parent.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidNodeId {
                node: x.0,
                num_nodes: self.parent.len(),
            })
        }
    }

    /// Get component ID for each node.
    ///
    /// Returns a vector where `result[i]` is the component ID of node i.
    /// Component IDs are assigned 0, 1, 2, ... in order of first appearance.
    pub fn component_ids(&mut self) -> Vec<ComponentId> {
        let n = self.parent.len();
        let mut comp_id = vec![ComponentId::UNASSIGNED; n];
        let mut next_id = 0u32;

        for i in 0..n {
            let root = self.find(NodeId(i as u32));

            if !comp_id[root.index()].is_assigned() {
                comp_id[root.index()] = ComponentId::new(next_id);
                next_id += 1;
            }

            comp_id[i] = comp_id[root.index()];
        }

        comp_id
    }
}

/// Connected components of a graph, treating arcs as undirected.
pub fn connected_components(graph: &Graph) -> Vec<ComponentId> {
    let mut uf = UnionFind::new(graph.num_nodes());

    for edge in graph.edges() {
        uf.union(edge.source, edge.target);
    }

    uf.component_ids()
}
