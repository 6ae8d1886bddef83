use crate::error::Result;
use crate::graph::algos::shared::ensure_start;
use crate::graph::path::reconstruct_path;
use crate::graph::types::{Distance, DistanceMap, PathMap, ShortestPaths};
use crate::graph::GraphProvider;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Min-heap entry ordered by distance, then by node insertion order
#[derive(Debug, Clone, Copy)]
struct HeapEntry<'a> {
    distance: Distance,
    order: usize,
    node_id: &'a str,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .value()
            .total_cmp(&other.distance.value())
            .then(self.order.cmp(&other.order))
    }
}

/// Single-source shortest paths from `source`
///
/// Every node of the graph appears in both maps. Unreachable nodes get an
/// infinite distance and an empty path; the source maps to distance zero and
/// the path `[source]`.
///
/// Among unsettled nodes at equal distance, the one inserted into the graph
/// first is settled first. A predecessor is only replaced by a strictly
/// shorter route, so on equal-length routes the first one found is kept.
/// Stale heap entries are skipped on pop, which settles nodes in the same
/// order as scanning all unsettled nodes for the minimum.
#[tracing::instrument(skip(provider))]
pub fn dijkstra(provider: &dyn GraphProvider, source: &str) -> Result<ShortestPaths> {
    ensure_start(provider, source)?;

    let node_ids = provider.node_ids();
    let order: HashMap<&str, usize> = node_ids
        .iter()
        .enumerate()
        .map(|(idx, &id)| (id, idx))
        .collect();

    let mut distances: HashMap<&str, Distance> =
        node_ids.iter().map(|&id| (id, Distance::INFINITY)).collect();
    let mut predecessors: HashMap<&str, &str> = HashMap::new();
    let mut settled: HashSet<&str> = HashSet::new();
    let mut heap = BinaryHeap::new();

    distances.insert(source, Distance::ZERO);
    heap.push(Reverse(HeapEntry {
        distance: Distance::ZERO,
        order: order.get(source).copied().unwrap_or_default(),
        node_id: source,
    }));

    while let Some(Reverse(HeapEntry {
        distance, node_id, ..
    })) = heap.pop()
    {
        if !settled.insert(node_id) {
            continue;
        }

        for neighbor in provider.neighbors(node_id)? {
            if settled.contains(neighbor.id) {
                continue;
            }
            let candidate = distance + neighbor.weight;
            let current = distances
                .get(neighbor.id)
                .copied()
                .unwrap_or(Distance::INFINITY);
            if candidate < current {
                tracing::trace!(
                    from = node_id,
                    to = neighbor.id,
                    distance = candidate.value(),
                    "relax"
                );
                distances.insert(neighbor.id, candidate);
                predecessors.insert(neighbor.id, node_id);
                heap.push(Reverse(HeapEntry {
                    distance: candidate,
                    order: order.get(neighbor.id).copied().unwrap_or_default(),
                    node_id: neighbor.id,
                }));
            }
        }
    }

    let mut distance_map = DistanceMap::new();
    let mut path_map = PathMap::new();
    for &id in &node_ids {
        let distance = distances.get(id).copied().unwrap_or(Distance::INFINITY);
        let path = if distance.is_finite() {
            reconstruct_path(source, id, &predecessors)
        } else {
            Vec::new()
        };
        distance_map.insert(id.to_string(), distance);
        path_map.insert(id.to_string(), path);
    }

    tracing::debug!(
        settled = settled.len(),
        unreachable = node_ids.len() - settled.len(),
        "dijkstra_complete"
    );

    Ok(ShortestPaths {
        source: source.to_string(),
        distances: distance_map,
        paths: path_map,
    })
}

#[cfg(test)]
mod tests;
