//! Interchangeable minimum spanning tree strategies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{kruskal::kruskal, prim::prim};
use crate::models::{Graph, SpanningTree};
use crate::{GraphError, Result};

/// MST strategy selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MstAlgorithm {
    /// Sort edges and grow a forest with union-find.
    #[default]
    Kruskal,
    /// Grow one tree from node 0 along the cheapest frontier edge.
    Prim,
}

impl MstAlgorithm {
    /// All strategies, in a fixed order.
    pub const ALL: [MstAlgorithm; 2] = [MstAlgorithm::Kruskal, MstAlgorithm::Prim];

    /// Lowercase name.
    pub const fn name(&self) -> &'static str {
        match self {
            MstAlgorithm::Kruskal => "kruskal",
            MstAlgorithm::Prim => "prim",
        }
    }
}

impl fmt::Display for MstAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MstAlgorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "kruskal" => Ok(Self::Kruskal),
            "prim" => Ok(Self::Prim),
            _ => Err(GraphError::InvalidArgument(format!(
                "unknown MST algorithm '{}'. Valid options: kruskal, prim",
                s
            ))),
        }
    }
}

/// Compute a minimum spanning tree with the chosen strategy.
///
/// The graph is borrowed; Prim runs on an internal clone. Kruskal returns a
/// forest for disconnected graphs while Prim reports
/// [`GraphError::GraphNotConnected`].
pub fn minimum_spanning_tree(graph: &Graph, algorithm: MstAlgorithm) -> Result<SpanningTree> {
    match algorithm {
        MstAlgorithm::Kruskal => kruskal(graph),
        MstAlgorithm::Prim => prim(graph.clone()),
    }
}
