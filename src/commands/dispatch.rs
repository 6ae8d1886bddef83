//! Command dispatch logic for transit

use std::time::Instant;

use tracing::debug;
use transit_core::config::NetworkConfig;
use transit_core::bail_usage;
use transit_core::error::Result;
use transit_core::graph::Graph;
use transit_core::trace_time;

use crate::cli::{Cli, Commands};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub network: NetworkConfig,
    pub graph: Graph,
}

impl<'a> CommandContext<'a> {
    /// Load the network named by `--network` (or the built-in one) and build its graph
    pub fn load(cli: &'a Cli) -> Result<Self> {
        let network = match &cli.network {
            Some(path) => NetworkConfig::load(path)?,
            None => NetworkConfig::default(),
        };
        // The configured start is only needed when no node is named on the command line
        let graph = network.build_graph()?;
        Ok(Self {
            cli,
            network,
            graph,
        })
    }

    /// The requested node, or the network's start node
    pub fn start_or_default<'b>(&'b self, requested: Option<&'b str>) -> Result<&'b str> {
        match requested.or_else(|| self.network.start_node()) {
            Some(start) => Ok(start),
            None => bail_usage!("network has no nodes; name a start node explicitly"),
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Report { start } => super::report::execute(ctx, start.as_deref()),
            Commands::Stats => super::stats::execute(ctx),
            Commands::Dfs { start } => {
                super::traverse::execute(ctx, super::traverse::Order::DepthFirst, start.as_deref())
            }
            Commands::Bfs { start } => super::traverse::execute(
                ctx,
                super::traverse::Order::BreadthFirst,
                start.as_deref(),
            ),
            Commands::Paths { source, target } => {
                super::paths::execute(ctx, source.as_deref(), target.as_deref())
            }
            Commands::Network { output } => super::network::execute(ctx, output.as_deref()),
        }
    }
}

/// Running without a subcommand produces the full report
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        super::report::execute(ctx, None)
    }
}

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::load(cli)?;

    debug!(
        nodes = ctx.graph.node_count(),
        edges = ctx.graph.edge_count(),
        elapsed = ?start.elapsed(),
        "load_network"
    );

    let result = match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    };

    trace_time!(start, "run_command");
    result
}
