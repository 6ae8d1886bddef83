//! Property-based tests for the graph algorithms using proptest.
//!
//! Properties verified:
//! - Adjacency symmetry
//! - DFS and BFS reach exactly the connected component of the start node
//! - Dijkstra source distance, unreachable handling, triangle inequality
//! - Path weights sum to the reported distance

use proptest::prelude::*;
use std::collections::{BTreeSet, VecDeque};
use transit_core::graph::{bfs_traverse, dfs_traverse, dijkstra, Graph, GraphProvider};

/// Build a graph with `node_count` nodes named n0..nN from candidate edges.
/// Self loops and repeated pairs are rejected by the graph and skipped here.
fn build_graph(node_count: usize, candidates: &[(usize, usize, u8)]) -> Graph {
    let mut graph = Graph::new();
    for i in 0..node_count {
        graph
            .add_node(format!("n{}", i))
            .unwrap_or_else(|e| panic!("add_node failed: {}", e));
    }
    for &(u, v, w) in candidates {
        let from = format!("n{}", u % node_count);
        let to = format!("n{}", v % node_count);
        let _ = graph.add_edge(&from, &to, f64::from(w));
    }
    graph
}

/// Reference reachability computed directly from the edge list
fn reachable_from(graph: &Graph, start: &str) -> BTreeSet<String> {
    let mut seen = BTreeSet::from([start.to_string()]);
    let mut frontier = VecDeque::from([start.to_string()]);
    while let Some(current) = frontier.pop_front() {
        for edge in graph.edges() {
            let other = if edge.from == current {
                &edge.to
            } else if edge.to == current {
                &edge.from
            } else {
                continue;
            };
            if seen.insert(other.clone()) {
                frontier.push_back(other.clone());
            }
        }
    }
    seen
}

fn graph_strategy() -> impl Strategy<Value = Graph> {
    (1usize..12)
        .prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec((0usize..12, 0usize..12, 0u8..20), 0..30),
            )
        })
        .prop_map(|(n, edges)| build_graph(n, &edges))
}

proptest! {
    /// Property: every edge is visible from both endpoints with the same weight
    #[test]
    fn prop_adjacency_symmetric(graph in graph_strategy()) {
        for edge in graph.edges() {
            let forward = graph.neighbors(&edge.from).unwrap_or_default();
            let backward = graph.neighbors(&edge.to).unwrap_or_default();
            prop_assert!(forward.iter().any(|n| n.id == edge.to && n.weight == edge.weight));
            prop_assert!(backward.iter().any(|n| n.id == edge.from && n.weight == edge.weight));
        }
        let total: usize = graph
            .nodes()
            .iter()
            .map(|id| graph.degree(id).unwrap_or_default())
            .sum();
        prop_assert_eq!(total, 2 * graph.edge_count());
    }

    /// Property: DFS and BFS visit the same set, which is the connected component
    #[test]
    fn prop_traversals_cover_component(graph in graph_strategy(), start_idx in 0usize..12) {
        let start = format!("n{}", start_idx % graph.node_count());
        let dfs = dfs_traverse(&graph, &start).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let bfs = bfs_traverse(&graph, &start).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let expected = reachable_from(&graph, &start);

        prop_assert_eq!(&dfs.visited, &expected);
        prop_assert_eq!(&bfs.visited, &expected);
        prop_assert_eq!(dfs.order.len(), expected.len());
        prop_assert_eq!(bfs.order.len(), expected.len());
        prop_assert_eq!(dfs.order.first(), Some(&start));
        prop_assert_eq!(bfs.order.first(), Some(&start));
    }

    /// Property: shortest distances are consistent with every edge and path
    #[test]
    fn prop_dijkstra_consistent(graph in graph_strategy(), start_idx in 0usize..12) {
        let source = format!("n{}", start_idx % graph.node_count());
        let result = dijkstra(&graph, &source).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let reachable = reachable_from(&graph, &source);

        prop_assert_eq!(result.distance(&source).map(|d| d.value()), Some(0.0));
        prop_assert_eq!(result.path(&source), &[source.clone()][..]);

        for id in graph.nodes() {
            let distance = result.distance(id).map(|d| d.value()).unwrap_or(f64::NAN);
            if !reachable.contains(id) {
                prop_assert!(distance.is_infinite());
                prop_assert!(result.path(id).is_empty());
                continue;
            }

            // Triangle inequality over every neighbor
            for neighbor in graph.neighbors(id).unwrap_or_default() {
                let via = result
                    .distance(neighbor.id)
                    .map(|d| d.value())
                    .unwrap_or(f64::NAN);
                prop_assert!(distance <= via + neighbor.weight);
            }

            // Path weights add up to the distance
            let path = result.path(id);
            prop_assert_eq!(path.first(), Some(&source));
            prop_assert_eq!(path.last(), Some(id));
            let mut total = 0.0;
            for pair in path.windows(2) {
                let weight = graph.weight(&pair[0], &pair[1]);
                prop_assert!(weight.is_some());
                total += weight.unwrap_or_default();
            }
            prop_assert_eq!(total, distance);
        }
    }
}
