//! `spanpath generate` command - Build a random connected graph and print it.

use std::time::Instant;

use colored::Colorize;
use spanpath_graph::component_count;
use tracing::info;

use super::{format_elapsed, print_graph_summary, print_json, GraphArgs, OutputFormat};
use crate::error::CliResult;

/// Execute the `generate` command.
pub fn execute(args: &GraphArgs, directed: bool, format: OutputFormat) -> CliResult<()> {
    let start = Instant::now();
    let graph = args.build(directed)?;
    let elapsed = start.elapsed();

    info!(
        nodes = graph.num_nodes(),
        edges = graph.num_edges(),
        "graph generated"
    );

    match format {
        OutputFormat::Json => print_json(&graph),
        OutputFormat::Text => {
            print_graph_summary(&graph);
            for edge in graph.edges() {
                let (u, v, w) = edge.triple();
                let arrow = if directed { "->" } else { "--" };
                println!("  {} {} {}  {}", u, arrow, v, w.to_string().bright_yellow());
            }
            println!();
            println!(
                "  {} Components: {}",
                "•".dimmed(),
                component_count(&graph)
            );
            println!(
                "  {} Total weight: {}",
                "•".dimmed(),
                graph.total_weight().to_string().bright_white()
            );
            println!(
                "  {} Generated in {}",
                "•".dimmed(),
                format_elapsed(elapsed).bright_green()
            );
            Ok(())
        }
    }
}
