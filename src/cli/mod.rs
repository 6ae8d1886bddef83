//! CLI argument parsing for transit
//!
//! Global flags: --network, --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::parse_output_format;
use transit_core::format::OutputFormat;

/// Transit - explore a weighted transportation network
#[derive(Parser, Debug)]
#[command(name = "transit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Network definition (TOML); the built-in city network is used if omitted
    #[arg(long, global = true, env = "TRANSIT_NETWORK")]
    pub network: Option<PathBuf>,

    /// Output format (human or json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. `debug`, `transit_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every analysis: summary, DFS, BFS and shortest paths (default)
    Report {
        /// Start node (defaults to the network's start node)
        #[arg(long, short)]
        start: Option<String>,
    },

    /// Show node count, edge count and the degree of every node
    Stats,

    /// Depth-first traversal order
    Dfs {
        /// Start node (defaults to the network's start node)
        #[arg(long, short)]
        start: Option<String>,
    },

    /// Breadth-first traversal order
    Bfs {
        /// Start node (defaults to the network's start node)
        #[arg(long, short)]
        start: Option<String>,
    },

    /// Shortest distances and paths (Dijkstra) from a source node
    Paths {
        /// Source node (defaults to the network's start node)
        #[arg(long, short)]
        source: Option<String>,

        /// Only show the route to this node
        #[arg(long, short)]
        target: Option<String>,
    },

    /// Print the network definition as TOML
    Network {
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}
