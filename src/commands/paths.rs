//! Shortest paths command

use transit_core::bail_unknown_node;
use transit_core::error::Result;
use transit_core::format::OutputFormat;
use transit_core::graph::{dijkstra, GraphProvider};

use super::dispatch::CommandContext;
use super::render::{human, json};

/// Execute the paths command
pub fn execute(ctx: &CommandContext, source: Option<&str>, target: Option<&str>) -> Result<()> {
    let source = ctx.start_or_default(source)?;
    if let Some(target) = target {
        if !ctx.graph.contains(target) {
            bail_unknown_node!(target);
        }
    }

    let result = dijkstra(&ctx.graph, source)?;
    let targets: Vec<&str> = match target {
        Some(target) => vec![target],
        None => ctx.graph.nodes().iter().map(String::as_str).collect(),
    };

    match ctx.cli.format {
        OutputFormat::Human => print!(
            "{}",
            human::shortest_paths(&result, &targets, !ctx.cli.quiet)
        ),
        OutputFormat::Json => json::print(&json::shortest_paths(&result, &targets)?)?,
    }
    Ok(())
}
