use crate::error::Result;
use crate::graph::algos::shared::ensure_start;
use crate::graph::types::{Neighbor, VisitResult};
use crate::graph::GraphProvider;
use std::collections::HashSet;

/// One suspended visit: a node's neighbors and how many were tried
struct Frame<'a> {
    neighbors: Vec<Neighbor<'a>>,
    next: usize,
}

/// Depth-first traversal from `start`
///
/// Produces the same order as the recursive formulation (visit a node, then
/// recurse into each unvisited neighbor in adjacency order) but keeps the
/// frames on an explicit stack so deep graphs cannot overflow the call stack.
#[tracing::instrument(skip(provider))]
pub fn dfs_traverse(provider: &dyn GraphProvider, start: &str) -> Result<VisitResult> {
    ensure_start(provider, start)?;

    let mut result = VisitResult::new(start);
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<Frame<'_>> = Vec::new();

    visited.insert(start);
    result.visit(start);
    stack.push(Frame {
        neighbors: provider.neighbors(start)?,
        next: 0,
    });

    while let Some(frame) = stack.last_mut() {
        let Some(neighbor) = frame.neighbors.get(frame.next).copied() else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        if visited.insert(neighbor.id) {
            tracing::trace!(node = neighbor.id, depth = stack.len(), "dfs_visit");
            result.visit(neighbor.id);
            stack.push(Frame {
                neighbors: provider.neighbors(neighbor.id)?,
                next: 0,
            });
        }
    }

    tracing::debug!(visited = result.len(), "dfs_complete");
    Ok(result)
}
