//! DFS and BFS commands

use transit_core::error::Result;
use transit_core::format::OutputFormat;
use transit_core::graph::{bfs_traverse, dfs_traverse, VisitResult};

use super::dispatch::CommandContext;
use super::render::{human, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    DepthFirst,
    BreadthFirst,
}

impl Order {
    pub fn label(self) -> &'static str {
        match self {
            Order::DepthFirst => "DFS",
            Order::BreadthFirst => "BFS",
        }
    }

    pub fn run(self, ctx: &CommandContext, start: &str) -> Result<VisitResult> {
        match self {
            Order::DepthFirst => dfs_traverse(&ctx.graph, start),
            Order::BreadthFirst => bfs_traverse(&ctx.graph, start),
        }
    }
}

/// Execute a traversal command
pub fn execute(ctx: &CommandContext, order: Order, start: Option<&str>) -> Result<()> {
    let start = ctx.start_or_default(start)?;
    let result = order.run(ctx, start)?;

    match ctx.cli.format {
        OutputFormat::Human => print!("{}", human::visit(order.label(), &result)),
        OutputFormat::Json => json::print(&json::visit(order.label(), &result)?)?,
    }
    Ok(())
}
