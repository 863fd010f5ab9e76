//! Bellman-Ford single-source shortest paths.
//!
//! Every edge `(u, v, w)` is relaxed in its stored orientation, in graph
//! enumeration order, once per round:
//!
//! ```text
//! dist[source] = 0, dist[v] = inf for v != source
//! repeat R times: for (u, v, w) in E: dist[v] = min(dist[v], dist[u] + w)
//! one more pass: any strict improvement => negative cycle reachable
//! ```
//!
//! Updates are applied in place, so later edges in a round already see
//! earlier improvements. By default `R = |E|`, a looser bound than the
//! textbook `|V| - 1`; both converge, see [`RelaxationRounds`].
//!
//! Sums are exact [`PathWeight`]s. Without a reachable negative cycle every
//! distance is a path of at most `u32::MAX` edges, which stays far inside
//! the `i128` range. A sum dropping below that range can therefore only come
//! from looping a negative cycle, and is reported as one.
//!
//! [`PathWeight`]: crate::PathWeight

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{Distance, Edge, Graph, NodeId};
use crate::{GraphError, Result};

/// Number of relaxation rounds before the negative-cycle pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RelaxationRounds {
    /// One round per edge.
    #[default]
    EdgeCount,
    /// `|V| - 1` rounds, the tight bound.
    VertexCountMinusOne,
}

/// Bellman-Ford configuration.
#[derive(Debug, Clone, Default)]
pub struct BellmanFordConfig {
    /// How many rounds to run.
    pub rounds: RelaxationRounds,
    /// Stop as soon as a round changes nothing. Does not change results.
    pub early_exit: bool,
}

impl BellmanFordConfig {
    /// Create new Bellman-Ford configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the round count policy.
    pub fn with_rounds(mut self, rounds: RelaxationRounds) -> Self {
        self.rounds = rounds;
        self
    }

    /// Enable or disable early exit on convergence.
    pub fn with_early_exit(mut self, early_exit: bool) -> Self {
        self.early_exit = early_exit;
        self
    }

    fn round_count(&self, graph: &Graph) -> usize {
        match self.rounds {
            RelaxationRounds::EdgeCount => graph.num_edges(),
            RelaxationRounds::VertexCountMinusOne => graph.num_nodes().saturating_sub(1),
        }
    }
}

/// Final distances from one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMap {
    source: NodeId,
    distances: Vec<Distance>,
}

impl DistanceMap {
    /// Source node of the run.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Distance to `node`, or `None` if out of range.
    pub fn get(&self, node: NodeId) -> Option<Distance> {
        self.distances.get(node.index()).copied()
    }

    /// Number of nodes covered.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Check if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// `(node, distance)` pairs in node order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Distance)> + '_ {
        self.distances
            .iter()
            .enumerate()
            .map(|(i, &d)| (NodeId(i as u32), d))
    }

    /// Number of nodes with a finite distance (the source included).
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_reachable()).count()
    }

    /// Distances as a slice indexed by node.
    pub fn as_slice(&self) -> &[Distance] {
        &self.distances
    }
}

/// Outcome of a Bellman-Ford run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ShortestPaths {
    /// No negative cycle is reachable; distances are final.
    Distances(DistanceMap),
    /// A negative-weight cycle is reachable from the source.
    NegativeCycleDetected,
}

impl ShortestPaths {
    /// Distance map, if no negative cycle was found.
    pub fn distances(&self) -> Option<&DistanceMap> {
        match self {
            ShortestPaths::Distances(map) => Some(map),
            ShortestPaths::NegativeCycleDetected => None,
        }
    }

    /// Check for the negative-cycle outcome.
    pub fn has_negative_cycle(&self) -> bool {
        matches!(self, ShortestPaths::NegativeCycleDetected)
    }
}

/// Bellman-Ford with the default configuration.
///
/// # Example
///
/// ```
/// use spanpath_graph::{bellman_ford, Distance, Graph, NodeId};
///
/// let graph = Graph::from_edges(3, true, &[(0, 1, 4), (1, 2, -2)]).unwrap();
/// let paths = bellman_ford(&graph, NodeId(0)).unwrap();
/// let map = paths.distances().unwrap();
/// assert_eq!(map.get(NodeId(2)), Some(Distance::Finite(2)));
/// ```
pub fn bellman_ford(graph: &Graph, source: NodeId) -> Result<ShortestPaths> {
    bellman_ford_with_config(graph, source, &BellmanFordConfig::default())
}

/// Bellman-Ford with configuration.
pub fn bellman_ford_with_config(
    graph: &Graph,
    source: NodeId,
    config: &BellmanFordConfig,
) -> Result<ShortestPaths> {
    graph.check_node(source)?;

    let mut dist = vec![Distance::Infinite; graph.num_nodes()];
    dist[source.index()] = Distance::ZERO;

    let rounds = config.round_count(graph);
    let mut performed = 0;
    let mut negative_cycle = false;

    'rounds: for _ in 0..rounds {
        performed += 1;
        let mut updated = false;

        for edge in graph.edges() {
            match relax(&dist, edge)? {
                Relaxation::Improved(candidate) => {
                    dist[edge.target.index()] = candidate;
                    updated = true;
                }
                Relaxation::Unchanged => {}
                Relaxation::Unbounded => {
                    negative_cycle = true;
                    break 'rounds;
                }
            }
        }

        if config.early_exit && !updated {
            break;
        }
    }

    // Extra pass: negative cycle check
    if !negative_cycle {
        for edge in graph.edges() {
            if !matches!(relax(&dist, edge)?, Relaxation::Unchanged) {
                negative_cycle = true;
                break;
            }
        }
    }

    debug!(
        source = source.0,
        rounds = performed,
        negative_cycle,
        "bellman-ford finished"
    );

    if negative_cycle {
        return Ok(ShortestPaths::NegativeCycleDetected);
    }

    Ok(ShortestPaths::Distances(DistanceMap {
        source,
        distances: dist,
    }))
}

/// Effect of relaxing one edge against the current distances.
enum Relaxation {
    Unchanged,
    Improved(Distance),
    /// The candidate fell below the `PathWeight` range.
    Unbounded,
}

fn relax(dist: &[Distance], edge: &Edge) -> Result<Relaxation> {
    let current = dist[edge.target.index()];
    match dist[edge.source.index()].checked_extend(edge.weight) {
        Some(candidate) if candidate < current => Ok(Relaxation::Improved(candidate)),
        Some(_) => Ok(Relaxation::Unchanged),
        None if edge.weight < 0 => Ok(Relaxation::Unbounded),
        None => Err(GraphError::DistanceOverflow {
            node: edge.target.0,
        }),
    }
}
