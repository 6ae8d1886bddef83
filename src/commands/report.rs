//! Full report: summary, traversals and shortest paths

use transit_core::error::Result;
use transit_core::format::OutputFormat;
use transit_core::graph::dijkstra;
use transit_core::stats::GraphStats;

use super::dispatch::CommandContext;
use super::render::{human, json};
use super::traverse::Order;

/// Execute the report command
pub fn execute(ctx: &CommandContext, start: Option<&str>) -> Result<()> {
    let start = ctx.start_or_default(start)?;

    let stats = GraphStats::from_graph(&ctx.graph)?;
    let dfs = Order::DepthFirst.run(ctx, start)?;
    let bfs = Order::BreadthFirst.run(ctx, start)?;
    let paths = dijkstra(&ctx.graph, start)?;
    let targets: Vec<&str> = ctx.graph.nodes().iter().map(String::as_str).collect();

    match ctx.cli.format {
        OutputFormat::Human => {
            print!("{}", human::stats(&stats));
            println!();
            print!("{}", human::visit(Order::DepthFirst.label(), &dfs));
            println!();
            print!("{}", human::visit(Order::BreadthFirst.label(), &bfs));
            println!();
            print!(
                "{}",
                human::shortest_paths(&paths, &targets, !ctx.cli.quiet)
            );
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "stats": json::stats(&stats)?,
                "dfs": json::visit(Order::DepthFirst.label(), &dfs)?,
                "bfs": json::visit(Order::BreadthFirst.label(), &bfs)?,
                "shortest_paths": json::shortest_paths(&paths, &targets)?,
            });
            json::print(&report)?;
        }
    }
    Ok(())
}
