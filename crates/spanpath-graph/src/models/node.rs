//! Node types for graph algorithms.
//!
//! This module provides strongly-typed wrappers for graph concepts:
//! - [`NodeId`]: Dense index of a graph vertex
//! - [`Weight`]: Integer edge weight (may be negative)
//! - [`PathWeight`]: Sum of edge weights along a path or tree
//! - [`Distance`]: Shortest-path distance, finite or infinite
//! - [`ComponentId`]: Connected component identifier

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::GraphError;

/// Edge weight.
pub type Weight = i64;

/// Sum of edge weights.
///
/// Twice as wide as [`Weight`], so any simple path or spanning tree over
/// `u32` node ids fits without overflow.
pub type PathWeight = i128;

/// Node identifier (vertex index in `[0, N)`).
///
/// Using a newtype prevents mixing up node IDs with other integers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    pub const fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Position of this node in per-node vectors.
    pub const fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for NodeId {
    fn from(id: u32) -> Self {
        NodeId(id)
    }
}

impl TryFrom<usize> for NodeId {
    type Error = GraphError;

    fn try_from(id: usize) -> Result<Self, Self::Error> {
        u32::try_from(id).map(NodeId).map_err(|_| {
            GraphError::InvalidArgument(format!("node index {} does not fit in u32", id))
        })
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shortest-path distance from a source node.
///
/// Unreachable nodes are [`Distance::Infinite`], which compares greater
/// than every finite distance. No finite value is reserved as a sentinel.
/// Finite values are [`PathWeight`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Distance {
    /// Reachable with the given path length.
    Finite(PathWeight),
    /// Not reachable.
    Infinite,
}

impl Distance {
    /// Zero distance (source node).
    pub const ZERO: Distance = Distance::Finite(0);

    /// Check if node is reachable.
    pub const fn is_reachable(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Finite value, if any.
    pub const fn finite(&self) -> Option<PathWeight> {
        match self {
            Distance::Finite(d) => Some(*d),
            Distance::Infinite => None,
        }
    }

    /// Extend a path by an edge of weight `w`.
    ///
    /// Infinity absorbs any weight. Returns `None` when the finite sum leaves
    /// the [`PathWeight`] range.
    pub const fn checked_extend(&self, w: Weight) -> Option<Self> {
        match self {
            Distance::Finite(d) => match d.checked_add(w as PathWeight) {
                Some(sum) => Some(Distance::Finite(sum)),
                None => None,
            },
            Distance::Infinite => Some(Distance::Infinite),
        }
    }
}

impl Default for Distance {
    fn default() -> Self {
        Distance::Infinite
    }
}

impl From<Weight> for Distance {
    fn from(d: Weight) -> Self {
        Distance::Finite(PathWeight::from(d))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => a.cmp(b),
            (Distance::Finite(_), Distance::Infinite) => Ordering::Less,
            (Distance::Infinite, Distance::Finite(_)) => Ordering::Greater,
            (Distance::Infinite, Distance::Infinite) => Ordering::Equal,
        }
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{}", d),
            Distance::Infinite => write!(f, "inf"),
        }
    }
}

/// Connected component identifier.
///
/// Nodes in the same component have the same ComponentId.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
#[repr(transparent)]
pub struct ComponentId(pub u32);

impl ComponentId {
    /// Unassigned component.
    pub const UNASSIGNED: ComponentId = ComponentId(u32::MAX);

    /// Create a new component ID.
    pub const fn new(id: u32) -> Self {
        ComponentId(id)
    }

    /// Check if component is assigned.
    pub const fn is_assigned(&self) -> bool {
        self.0 != u32::MAX
    }

    /// Get the inner value.
    pub const fn get(&self) -> u32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_id_conversions() {
        let node: NodeId = 100u32.into();
        assert_eq!(node.get(), 100);
        assert_eq!(node.index(), 100);

        let idx: usize = node.into();
        assert_eq!(idx, 100);
        assert_eq!(NodeId::try_from(7usize).unwrap(), NodeId(7));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_node_id_from_oversized_index() {
        let too_big = u32::MAX as usize + 1;
        assert!(matches!(
            NodeId::try_from(too_big),
            Err(GraphError::InvalidArgument(_))
        ));
        assert_eq!(NodeId::try_from(u32::MAX as usize).unwrap(), NodeId(u32::MAX));
    }

    #[test]
    fn test_distance_ordering() {
        assert!(Distance::Finite(-20) < Distance::Finite(3));
        assert!(Distance::Finite(i128::MAX) < Distance::Infinite);
        assert_eq!(Distance::Infinite.cmp(&Distance::Infinite), Ordering::Equal);
        assert_eq!(Distance::default(), Distance::Infinite);
    }

    #[test]
    fn test_distance_extend() {
        assert_eq!(Distance::ZERO.checked_extend(-4), Some(Distance::Finite(-4)));
        assert_eq!(
            Distance::Infinite.checked_extend(Weight::MIN),
            Some(Distance::Infinite)
        );
    }

    #[test]
    fn test_distance_extend_past_weight_range() {
        // Sums beyond i64 stay exact
        let d = Distance::from(Weight::MAX).checked_extend(5).unwrap();
        assert_eq!(d.finite(), Some(Weight::MAX as PathWeight + 5));
        assert!(d > Distance::from(Weight::MAX));

        let low = Distance::from(Weight::MIN).checked_extend(-1).unwrap();
        assert_eq!(low.finite(), Some(Weight::MIN as PathWeight - 1));

        assert_eq!(Distance::Finite(PathWeight::MIN).checked_extend(-1), None);
        assert_eq!(Distance::Finite(PathWeight::MAX).checked_extend(1), None);
    }

    #[test]
    fn test_distance_reachability() {
        assert!(Distance::Finite(0).is_reachable());
        assert!(!Distance::Infinite.is_reachable());
        assert_eq!(Distance::Finite(5).finite(), Some(5));
        assert_eq!(Distance::Infinite.finite(), None);
        assert_eq!(Distance::Infinite.to_string(), "inf");
    }

    #[test]
    fn test_component_id_basics() {
        let c = ComponentId::new(3);
        assert_eq!(c.get(), 3);
        assert!(c.is_assigned());
        assert!(!ComponentId::UNASSIGNED.is_assigned());
    }
}
