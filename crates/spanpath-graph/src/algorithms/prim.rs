//! Prim's minimum spanning tree by frontier expansion.
//!
//! Starting from node 0, each step scans every edge incident to a visited
//! node and takes the lightest one leading to an unvisited node. Visited
//! nodes are scanned in the order they joined the tree and their edges in
//! adjacency (insertion) order; the first edge seen at the minimum weight
//! wins ties. The chosen edge is removed from the working graph.
//!
//! After k steps exactly k + 1 nodes are visited, k edges are selected, and
//! the visited set is connected.

use tracing::{debug, trace};

use crate::models::{Edge, EdgeId, Graph, NodeId, SpanningTree};
use crate::{GraphError, Result};

/// Run Prim's algorithm, consuming `graph` as the working copy.
///
/// Pass a clone if the original graph is needed afterwards. Fails with
/// [`GraphError::GraphNotConnected`] when some node cannot be reached from
/// node 0.
pub fn prim(mut graph: Graph) -> Result<SpanningTree> {
    if graph.is_directed() {
        return Err(GraphError::InvalidArgument(
            "Prim's algorithm requires an undirected graph".to_string(),
        ));
    }
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }

    let n = graph.num_nodes();
    let mut visited = vec![false; n];
    let mut order: Vec<NodeId> = Vec::with_capacity(n);
    let mut tree = SpanningTree::new(n);

    visited[0] = true;
    order.push(NodeId(0));

    while order.len() < n {
        let mut best: Option<(EdgeId, Edge, NodeId)> = None;

        for &node in &order {
            for (id, edge) in graph.incident_edges(node) {
                let far = edge.other(node);
                if visited[far.index()] {
                    continue;
                }
                if best.map_or(true, |(_, b, _)| edge.weight < b.weight) {
                    best = Some((id, *edge, far));
                }
            }
        }

        let Some((id, edge, far)) = best else {
            debug!(
                visited = order.len(),
                total = n,
                "prim stopped: frontier is empty"
            );
            return Err(GraphError::GraphNotConnected {
                visited: order.len(),
                total: n,
            });
        };

        trace!(%edge, "prim accepted edge");
        graph.remove_edge_by_id(id);
        visited[far.index()] = true;
        order.push(far);
        tree.push(edge);
    }

    debug!(
        nodes = n,
        selected = tree.len(),
        weight = %tree.total_weight(),
        "prim finished"
    );

    Ok(tree)
}
