use transit_core::graph::{format_path, ShortestPaths, VisitResult};
use transit_core::stats::GraphStats;

/// Minimum column width for the shortest-path table
const COLUMN_WIDTH: usize = 15;

/// Node count, edge count and per-node degrees
pub fn stats(stats: &GraphStats) -> String {
    let mut lines = vec![
        "Graph summary:".to_string(),
        format!("  Nodes: {}", stats.node_count),
        format!("  Edges: {}", stats.edge_count),
        "Degrees:".to_string(),
    ];
    lines.extend(
        stats
            .degrees
            .iter()
            .map(|d| format!("  {}: {}", d.id, d.degree)),
    );
    lines.push(String::new());
    lines.join("\n")
}

/// Visit order followed by the visited set
pub fn visit(label: &str, result: &VisitResult) -> String {
    let visited: Vec<&str> = result.visited.iter().map(String::as_str).collect();
    format!(
        "{} (from {}): {}\nVisited ({}): {{{}}}\n",
        label,
        result.start,
        result.order.join(" "),
        label,
        visited.join(", ")
    )
}

/// Target / distance / path table; unreachable targets show `inf` and no path
pub fn shortest_paths(result: &ShortestPaths, targets: &[&str], headings: bool) -> String {
    let width = targets
        .iter()
        .map(|t| t.len() + 2)
        .max()
        .unwrap_or(0)
        .max(COLUMN_WIDTH);
    let rule = "-".repeat(width * 2 + 20);

    let mut lines = Vec::new();
    if headings {
        lines.push(format!("Shortest paths from {} (Dijkstra):", result.source));
        lines.push(rule.clone());
        lines.push(format!(
            "{:<width$}{:<width$}{}",
            "Target",
            "Distance",
            "Path",
            width = width
        ));
        lines.push(rule);
    }

    for &target in targets {
        let distance = result
            .distance(target)
            .map(|d| d.to_string())
            .unwrap_or_else(|| "inf".to_string());
        let line = format!(
            "{:<width$}{:<width$}{}",
            target,
            distance,
            format_path(result.path(target)),
            width = width
        );
        lines.push(line.trim_end().to_string());
    }
    lines.push(String::new());
    lines.join("\n")
}
