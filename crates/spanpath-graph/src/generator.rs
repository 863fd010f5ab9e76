//! Random connected graph generator.
//!
//! Similar to an Erdős–Rényi `G(n, p)` graph, except every node `u < N - 1`
//! is first given one mandatory edge to a random higher-indexed node. In the
//! undirected case these edges chain every node to node `N - 1`, so the
//! result is always connected. In directed mode each mandatory edge is
//! reversed with probability 0.5; this does not make the result strongly
//! connected, and no such guarantee is given.
//!
//! After the mandatory edge, every pair `(u, v)` with `v > u` is added
//! independently with the configured probability (re-adding an edge is a
//! no-op). Weights are drawn uniformly from an inclusive range once all edges
//! are decided.

use std::collections::HashSet;

use rand::prelude::*;
use tracing::debug;

use crate::models::{Graph, NodeId, Weight};
use crate::{GraphError, Result};

/// Default lower weight bound.
pub const DEFAULT_MIN_WEIGHT: Weight = -5;

/// Default upper weight bound.
pub const DEFAULT_MAX_WEIGHT: Weight = 20;

/// Generator configuration.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Probability of adding each candidate pair, in `[0, 1]`.
    pub edge_probability: f64,
    /// Produce a directed graph.
    pub directed: bool,
    /// Smallest weight (inclusive).
    pub min_weight: Weight,
    /// Largest weight (inclusive).
    pub max_weight: Weight,
    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            edge_probability: 0.5,
            directed: false,
            min_weight: DEFAULT_MIN_WEIGHT,
            max_weight: DEFAULT_MAX_WEIGHT,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Create new generator configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set edge probability.
    pub fn with_edge_probability(mut self, p: f64) -> Self {
        self.edge_probability = p;
        self
    }

    /// Set directedness.
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Set the inclusive weight range.
    pub fn with_weight_range(mut self, min: Weight, max: Weight) -> Self {
        self.min_weight = min;
        self.max_weight = max;
        self
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(GraphError::InvalidArgument(format!(
                "edge probability must be within [0, 1], got {}",
                self.edge_probability
            )));
        }
        if self.min_weight > self.max_weight {
            return Err(GraphError::InvalidArgument(format!(
                "empty weight range [{}, {}]",
                self.min_weight, self.max_weight
            )));
        }
        Ok(())
    }
}

/// Random connected graph generator.
pub struct RandomConnectedGraphGenerator {
    /// Generator configuration.
    config: GeneratorConfig,
    /// Random number generator.
    rng: StdRng,
}

impl RandomConnectedGraphGenerator {
    /// Create a new generator.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self { config, rng })
    }

    /// Generator configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a graph over `num_nodes` nodes.
    pub fn generate(&mut self, num_nodes: usize) -> Result<Graph> {
        if num_nodes < 1 {
            return Err(GraphError::InvalidArgument(
                "graph must have at least one node".to_string(),
            ));
        }
        if num_nodes > u32::MAX as usize {
            return Err(GraphError::InvalidArgument(format!(
                "too many nodes: {}",
                num_nodes
            )));
        }

        let n = num_nodes as u32;
        let directed = self.config.directed;
        let mut pairs: Vec<(u32, u32)> = Vec::new();
        let mut seen: HashSet<(u32, u32)> = HashSet::new();

        let mut insert = |u: u32, v: u32| {
            let key = if directed { (u, v) } else { (u.min(v), u.max(v)) };
            if seen.insert(key) {
                pairs.push((u, v));
            }
        };

        for u in 0..n.saturating_sub(1) {
            let mut v = self.rng.gen_range(u + 1..n);
            let mut w = u;
            if directed && self.rng.gen_bool(0.5) {
                std::mem::swap(&mut v, &mut w);
            }
            insert(w, v);

            for v in u + 1..n {
                if self.rng.gen_bool(self.config.edge_probability) {
                    insert(u, v);
                }
            }
        }

        let mut graph = Graph::new(num_nodes, directed);
        for (u, v) in pairs {
            let weight = self
                .rng
                .gen_range(self.config.min_weight..=self.config.max_weight);
            graph.add_edge(NodeId(u), NodeId(v), weight)?;
        }

        debug!(
            nodes = num_nodes,
            edges = graph.num_edges(),
            directed,
            "generated random connected graph"
        );

        Ok(graph)
    }
}

/// Generate a random graph with default weights and a fresh seed.
pub fn generate(num_nodes: usize, edge_probability: f64, directed: bool) -> Result<Graph> {
    let config = GeneratorConfig::new()
        .with_edge_probability(edge_probability)
        .with_directed(directed);
    RandomConnectedGraphGenerator::new(config)?.generate(num_nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::is_connected;

    fn seeded(p: f64, directed: bool, seed: u64) -> RandomConnectedGraphGenerator {
        let config = GeneratorConfig::new()
            .with_edge_probability(p)
            .with_directed(directed)
            .with_seed(seed);
        RandomConnectedGraphGenerator::new(config).unwrap()
    }

    #[test]
    fn test_undirected_always_connected() {
        for seed in 0..20 {
            for &p in &[0.0, 0.1, 0.5, 1.0] {
                let graph = seeded(p, false, seed).generate(25).unwrap();
                assert!(is_connected(&graph), "seed {} p {}", seed, p);
            }
        }
    }

    #[test]
    fn test_zero_probability_gives_tree() {
        let graph = seeded(0.0, false, 7).generate(30).unwrap();
        assert_eq!(graph.num_edges(), 29);
    }

    #[test]
    fn test_full_probability_gives_complete_graph() {
        let graph = seeded(1.0, false, 3).generate(10).unwrap();
        assert_eq!(graph.num_edges(), 45);
    }

    #[test]
    fn test_weights_within_range() {
        let config = GeneratorConfig::new()
            .with_edge_probability(1.0)
            .with_weight_range(-2, 2)
            .with_seed(11);
        let graph = RandomConnectedGraphGenerator::new(config)
            .unwrap()
            .generate(12)
            .unwrap();

        assert!(graph.edges().all(|e| (-2..=2).contains(&e.weight)));
    }

    #[test]
    fn test_directed_has_mandatory_edge_per_node() {
        let graph = seeded(0.0, true, 5).generate(15).unwrap();
        assert!(graph.is_directed());
        assert_eq!(graph.num_edges(), 14);
        // Weakly connected even though strong connectivity is not promised
        assert!(is_connected(&graph));
    }

    #[test]
    fn test_same_seed_same_graph() {
        let a = seeded(0.3, false, 42).generate(20).unwrap();
        let b = seeded(0.3, false, 42).generate(20).unwrap();

        let ea: Vec<_> = a.edges().map(|e| e.triple()).collect();
        let eb: Vec<_> = b.edges().map(|e| e.triple()).collect();
        assert_eq!(ea, eb);
    }

    #[test]
    fn test_single_node() {
        let graph = generate(1, 0.5, false).unwrap();
        assert_eq!(graph.num_nodes(), 1);
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(matches!(
            generate(0, 0.5, false),
            Err(GraphError::InvalidArgument(_))
        ));
        assert!(matches!(
            generate(5, 1.5, false),
            Err(GraphError::InvalidArgument(_))
        ));
        assert!(matches!(
            generate(5, f64::NAN, true),
            Err(GraphError::InvalidArgument(_))
        ));

        let bad_range = GeneratorConfig::new().with_weight_range(3, -3);
        assert!(RandomConnectedGraphGenerator::new(bad_range).is_err());
    }
}
