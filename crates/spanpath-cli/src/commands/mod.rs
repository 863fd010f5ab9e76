//! CLI command implementations.

pub mod generate;
pub mod mst;
pub mod paths;

use std::time::Duration;

use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;
use spanpath_graph::{GeneratorConfig, Graph, RandomConnectedGraphGenerator, Weight};

use crate::error::{CliError, CliResult};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON format for programmatic consumption.
    Json,
}

/// Options shared by every command that generates a graph.
#[derive(Debug, Clone, Args)]
pub struct GraphArgs {
    /// Number of nodes
    #[arg(short, long)]
    pub nodes: usize,

    /// Probability of adding each candidate edge (0.0 - 1.0)
    #[arg(short, long, default_value = "0.5")]
    pub probability: f64,

    /// Random seed for a reproducible graph
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Smallest edge weight (inclusive)
    #[arg(long, default_value = "-5", allow_hyphen_values = true)]
    pub min_weight: Weight,

    /// Largest edge weight (inclusive)
    #[arg(long, default_value = "20", allow_hyphen_values = true)]
    pub max_weight: Weight,
}

impl GraphArgs {
    /// Generator configuration for these options.
    pub fn config(&self, directed: bool) -> GeneratorConfig {
        let config = GeneratorConfig::new()
            .with_edge_probability(self.probability)
            .with_directed(directed)
            .with_weight_range(self.min_weight, self.max_weight);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Generate the graph described by these options.
    pub fn build(&self, directed: bool) -> CliResult<Graph> {
        if self.nodes == 0 {
            return Err(CliError::Validation(
                "--nodes must be at least 1".to_string(),
            ));
        }
        let mut generator = RandomConnectedGraphGenerator::new(self.config(directed))?;
        Ok(generator.generate(self.nodes)?)
    }
}

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a one-line graph summary.
pub fn print_graph_summary(graph: &Graph) {
    println!(
        "{} Graph: {} nodes, {} edges ({})",
        "→".bright_cyan(),
        graph.num_nodes().to_string().bright_white(),
        graph.num_edges().to_string().bright_white(),
        if graph.is_directed() {
            "directed"
        } else {
            "undirected"
        }
    );
}

/// Format a duration for display.
pub fn format_elapsed(elapsed: Duration) -> String {
    let micros = elapsed.as_micros();
    if micros >= 1_000_000 {
        format!("{:.3} s", elapsed.as_secs_f64())
    } else if micros >= 1_000 {
        format!("{:.3} ms", micros as f64 / 1_000.0)
    } else {
        format!("{} µs", micros)
    }
}
