//! `spanpath mst` command - Compute a minimum spanning tree.

use std::time::{Duration, Instant};

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use spanpath_graph::{
    minimum_spanning_tree, Graph, MstAlgorithm, PathWeight, SpanningTree, Weight,
};
use tracing::{info, warn};

use super::{format_elapsed, print_graph_summary, print_json, GraphArgs, OutputFormat};
use crate::error::CliResult;

/// Which strategy to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    /// Kruskal's algorithm (sorted edges + union-find)
    Kruskal,
    /// Prim's algorithm (frontier expansion from node 0)
    Prim,
    /// Run both and compare total weights
    Both,
}

impl AlgorithmChoice {
    fn algorithms(self) -> &'static [MstAlgorithm] {
        match self {
            AlgorithmChoice::Kruskal => &[MstAlgorithm::Kruskal],
            AlgorithmChoice::Prim => &[MstAlgorithm::Prim],
            AlgorithmChoice::Both => &MstAlgorithm::ALL,
        }
    }
}

/// One strategy's result.
#[derive(Debug, Serialize)]
struct MstRun {
    algorithm: MstAlgorithm,
    edges: Vec<(u32, u32, Weight)>,
    total_weight: PathWeight,
    spanning: bool,
    elapsed_us: u128,
}

impl MstRun {
    fn new(algorithm: MstAlgorithm, tree: &SpanningTree, elapsed: Duration) -> Self {
        Self {
            algorithm,
            edges: tree.triples(),
            total_weight: tree.total_weight(),
            spanning: tree.is_spanning(),
            elapsed_us: elapsed.as_micros(),
        }
    }
}

/// JSON report.
#[derive(Debug, Serialize)]
struct MstReport {
    nodes: usize,
    edges: usize,
    runs: Vec<MstRun>,
}

/// Execute the `mst` command.
pub fn execute(args: &GraphArgs, choice: AlgorithmChoice, format: OutputFormat) -> CliResult<()> {
    let graph = args.build(false)?;
    let runs = run_all(&graph, choice.algorithms())?;

    if let [first, .., last] = runs.as_slice() {
        if first.total_weight != last.total_weight {
            warn!(
                kruskal = %first.total_weight,
                prim = %last.total_weight,
                "MST strategies disagree on total weight"
            );
        }
    }

    match format {
        OutputFormat::Json => print_json(&MstReport {
            nodes: graph.num_nodes(),
            edges: graph.num_edges(),
            runs,
        }),
        OutputFormat::Text => {
            print_graph_summary(&graph);
            for run in &runs {
                print_run(run);
            }
            Ok(())
        }
    }
}

fn run_all(graph: &Graph, algorithms: &[MstAlgorithm]) -> CliResult<Vec<MstRun>> {
    algorithms
        .iter()
        .map(|&algorithm| {
            let start = Instant::now();
            let tree = minimum_spanning_tree(graph, algorithm)?;
            let elapsed = start.elapsed();
            info!(%algorithm, selected = tree.len(), "spanning tree computed");
            Ok(MstRun::new(algorithm, &tree, elapsed))
        })
        .collect()
}

fn print_run(run: &MstRun) {
    println!();
    println!(
        "{} {}",
        "→".bright_cyan(),
        run.algorithm.to_string().bright_white().bold()
    );
    for &(u, v, w) in &run.edges {
        println!("  ({}, {})  {}", u, v, w.to_string().bright_yellow());
    }
    println!(
        "  {} Total weight: {}",
        "•".dimmed(),
        run.total_weight.to_string().bright_white()
    );
    if !run.spanning {
        println!(
            "  {} selected edges form a forest, the graph is not connected",
            "Warning:".yellow()
        );
    }
    println!(
        "  {} Computed in {}",
        "•".dimmed(),
        format_elapsed(Duration::from_micros(run.elapsed_us as u64)).bright_green()
    );
}
