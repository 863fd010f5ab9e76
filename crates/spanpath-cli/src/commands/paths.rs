//! `spanpath paths` command - Single-source shortest paths with Bellman-Ford.

use std::time::Instant;

use colored::Colorize;
use serde::Serialize;
use spanpath_graph::{bellman_ford, Graph, NodeId, ShortestPaths};
use tracing::{info, warn};

use super::{format_elapsed, print_graph_summary, print_json, GraphArgs, OutputFormat};
use crate::error::{CliError, CliResult};

/// JSON report.
#[derive(Debug, Serialize)]
struct PathsReport<'a> {
    nodes: usize,
    edges: usize,
    source: NodeId,
    elapsed_us: u128,
    result: &'a ShortestPaths,
}

/// Execute the `paths` command.
pub fn execute(
    args: &GraphArgs,
    directed: bool,
    source: u32,
    format: OutputFormat,
) -> CliResult<()> {
    let graph = args.build(directed)?;
    let source = checked_source(&graph, source)?;

    let start = Instant::now();
    let result = bellman_ford(&graph, source)?;
    let elapsed = start.elapsed();

    match &result {
        ShortestPaths::Distances(map) => {
            info!(%source, reachable = map.reachable_count(), "shortest paths computed")
        }
        ShortestPaths::NegativeCycleDetected => warn!(%source, "negative cycle detected"),
    }

    match format {
        OutputFormat::Json => print_json(&PathsReport {
            nodes: graph.num_nodes(),
            edges: graph.num_edges(),
            source,
            elapsed_us: elapsed.as_micros(),
            result: &result,
        }),
        OutputFormat::Text => {
            print_graph_summary(&graph);
            println!();
            match &result {
                ShortestPaths::Distances(map) => {
                    println!("  {:>6}  {:>10}", "node".bold(), "distance".bold());
                    for (node, distance) in map.iter() {
                        let shown = if distance.is_reachable() {
                            distance.to_string().bright_white()
                        } else {
                            distance.to_string().dimmed()
                        };
                        println!("  {:>6}  {:>10}", node, shown);
                    }
                    println!();
                    println!(
                        "  {} Reachable from {}: {} of {}",
                        "•".dimmed(),
                        source,
                        map.reachable_count(),
                        map.len()
                    );
                }
                ShortestPaths::NegativeCycleDetected => {
                    println!("  {}", "Negative cycle detected!".yellow().bold());
                }
            }
            println!(
                "  {} Computed in {}",
                "•".dimmed(),
                format_elapsed(elapsed).bright_green()
            );
            Ok(())
        }
    }
}

fn checked_source(graph: &Graph, source: u32) -> CliResult<NodeId> {
    let node = NodeId(source);
    if node.index() >= graph.num_nodes() {
        return Err(CliError::Validation(format!(
            "--source {} is out of range for a graph with {} nodes",
            source,
            graph.num_nodes()
        )));
    }
    Ok(node)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_source() {
        let graph = Graph::from_edges(3, true, &[(0, 1, 1)]).unwrap();
        assert_eq!(checked_source(&graph, 2).unwrap(), NodeId(2));
        assert!(matches!(
            checked_source(&graph, 3),
            Err(CliError::Validation(_))
        ));
    }

    #[test]
    fn test_report_serializes_outcome() {
        let graph = Graph::from_edges(2, true, &[(0, 1, 4)]).unwrap();
        let result = bellman_ford(&graph, NodeId(0)).unwrap();
        let report = PathsReport {
            nodes: 2,
            edges: 1,
            source: NodeId(0),
            elapsed_us: 0,
            result: &result,
        };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["source"], 0);
        assert_eq!(json["result"]["outcome"], "distances");
    }
}
