//! spanpath CLI - Generate random weighted graphs, build spanning trees and
//! compute shortest paths.
//!
//! # Commands
//!
//! - `spanpath generate` - Print a random connected graph
//! - `spanpath mst` - Minimum spanning tree with Kruskal, Prim or both
//! - `spanpath paths` - Bellman-Ford distances from a source node
//!
//! # Examples
//!
//! ```bash
//! # Reproducible 10-node graph
//! spanpath generate --nodes 10 --seed 42
//!
//! # Compare both MST strategies on the same graph
//! spanpath mst -n 50 -p 0.2 --algorithm both
//!
//! # Shortest paths on a directed graph, as JSON
//! spanpath paths -n 20 --directed --source 3 --format json
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;

use commands::mst::AlgorithmChoice;
use commands::{generate, mst, paths, GraphArgs, OutputFormat};

/// spanpath - Weighted graph toolkit
#[derive(Parser)]
#[command(name = "spanpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random connected graph
    Generate {
        #[command(flatten)]
        graph: GraphArgs,

        /// Generate a directed graph
        #[arg(long)]
        directed: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Compute a minimum spanning tree of a random undirected graph
    Mst {
        #[command(flatten)]
        graph: GraphArgs,

        /// Spanning tree strategy
        #[arg(short, long, value_enum, default_value = "kruskal")]
        algorithm: AlgorithmChoice,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Compute single-source shortest paths with Bellman-Ford
    Paths {
        #[command(flatten)]
        graph: GraphArgs,

        /// Generate a directed graph
        #[arg(long)]
        directed: bool,

        /// Source node
        #[arg(long, default_value = "0")]
        source: u32,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn print_banner() {
    eprintln!(
        "  {} {}\n",
        "spanpath".bright_cyan().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).dimmed()
    );
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let text_output = match &cli.command {
        Commands::Generate { format, .. }
        | Commands::Mst { format, .. }
        | Commands::Paths { format, .. } => *format == OutputFormat::Text,
        Commands::Completions { .. } => false,
    };
    if text_output && !cli.quiet {
        print_banner();
    }

    let result = match cli.command {
        Commands::Generate {
            graph,
            directed,
            format,
        } => generate::execute(&graph, directed, format),

        Commands::Mst {
            graph,
            algorithm,
            format,
        } => mst::execute(&graph, algorithm, format),

        Commands::Paths {
            graph,
            directed,
            source,
            format,
        } => paths::execute(&graph, directed, source, format),

        Commands::Completions { shell } => {
            use clap::CommandFactory;
            clap_complete::generate(shell, &mut Cli::command(), "spanpath", &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
