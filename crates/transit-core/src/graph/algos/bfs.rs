use crate::error::Result;
use crate::graph::algos::shared::ensure_start;
use crate::graph::types::VisitResult;
use crate::graph::GraphProvider;
use std::collections::{HashSet, VecDeque};

/// Breadth-first traversal from `start`
///
/// A node may sit in the queue more than once; copies are dropped when
/// dequeued if the node was already visited.
#[tracing::instrument(skip(provider))]
pub fn bfs_traverse(provider: &dyn GraphProvider, start: &str) -> Result<VisitResult> {
    ensure_start(provider, start)?;

    let mut result = VisitResult::new(start);
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::from([start]);
    let mut skipped = 0usize;

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            skipped += 1;
            continue;
        }
        result.visit(current);

        for neighbor in provider.neighbors(current)? {
            if !visited.contains(neighbor.id) {
                queue.push_back(neighbor.id);
            }
        }
    }

    tracing::debug!(visited = result.len(), skipped, "bfs_complete");
    Ok(result)
}
