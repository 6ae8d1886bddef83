//! Graph summary command

use transit_core::error::Result;
use transit_core::format::OutputFormat;
use transit_core::stats::GraphStats;

use super::dispatch::CommandContext;
use super::render::{human, json};

/// Execute the stats command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let stats = GraphStats::from_graph(&ctx.graph)?;

    match ctx.cli.format {
        OutputFormat::Human => print!("{}", human::stats(&stats)),
        OutputFormat::Json => json::print(&json::stats(&stats)?)?,
    }
    Ok(())
}
