use crate::error::TransitError;
use crate::graph::algos::dijkstra::*;
use crate::graph::testing::city_network;
use crate::graph::types::Distance;
use crate::graph::{dfs_traverse, Graph, MAX_WEIGHT};

fn path_of(result: &ShortestPaths, id: &str) -> Vec<String> {
    result.path(id).to_vec()
}

/// Distances from A in the city network
#[test]
fn test_city_network_distances() {
    let graph = city_network();
    let result = dijkstra(&graph, "A").unwrap();

    let expected = [
        ("A", 0.0),
        ("B", 5.0),
        ("C", 7.0),
        ("D", 8.0),
        ("E", 13.0),
        ("F", 10.0),
        ("G", 13.0),
    ];
    for (id, distance) in expected {
        assert_eq!(result.distance(id), Some(Distance::new(distance)), "{}", id);
    }
}

#[test]
fn test_city_network_paths() {
    let graph = city_network();
    let result = dijkstra(&graph, "A").unwrap();

    assert_eq!(path_of(&result, "A"), vec!["A"]);
    assert_eq!(path_of(&result, "D"), vec!["A", "B", "D"]);
    assert_eq!(path_of(&result, "E"), vec!["A", "C", "E"]);
    assert_eq!(path_of(&result, "F"), vec!["A", "B", "D", "F"]);
    assert_eq!(path_of(&result, "G"), vec!["A", "B", "D", "F", "G"]);
}

#[test]
fn test_every_node_present_in_both_maps() {
    let graph = city_network();
    let result = dijkstra(&graph, "D").unwrap();
    assert_eq!(result.source, "D");
    assert_eq!(result.distances.len(), 7);
    assert_eq!(result.paths.len(), 7);
    assert_eq!(result.distance("D"), Some(Distance::ZERO));
}

/// Unreachable nodes are infinite with an empty path
#[test]
fn test_unreachable_nodes() {
    let graph = Graph::from_edges(
        ["A", "B", "X", "Y"],
        &[("A", "B", 2.0), ("X", "Y", 1.0)],
    )
    .unwrap();
    let result = dijkstra(&graph, "A").unwrap();

    assert_eq!(result.distance("B"), Some(Distance::new(2.0)));
    assert_eq!(result.distance("X"), Some(Distance::INFINITY));
    assert!(!result.is_reachable("X"));
    assert!(result.path("X").is_empty());
    assert!(result.path("Y").is_empty());
}

/// A longer hop count wins when it is cheaper
#[test]
fn test_prefers_cheaper_multi_hop_route() {
    let graph = Graph::from_edges(
        ["S", "M", "T"],
        &[("S", "T", 10.0), ("S", "M", 1.0), ("M", "T", 1.0)],
    )
    .unwrap();
    let result = dijkstra(&graph, "S").unwrap();
    assert_eq!(result.distance("T"), Some(Distance::new(2.0)));
    assert_eq!(path_of(&result, "T"), vec!["S", "M", "T"]);
}

/// Equal-cost routes: the first route found is kept, and ties between
/// unsettled nodes settle in insertion order
#[test]
fn test_tie_breaking_is_deterministic() {
    // S-P and S-Q both cost 1; both reach T at cost 2.
    // P was inserted first, so it settles first and claims T.
    let graph = Graph::from_edges(
        ["S", "P", "Q", "T"],
        &[("S", "Q", 1.0), ("S", "P", 1.0), ("Q", "T", 1.0), ("P", "T", 1.0)],
    )
    .unwrap();
    let result = dijkstra(&graph, "S").unwrap();
    assert_eq!(result.distance("T"), Some(Distance::new(2.0)));
    assert_eq!(path_of(&result, "T"), vec!["S", "P", "T"]);

    // Swap insertion order of P and Q: Q now settles first
    let graph = Graph::from_edges(
        ["S", "Q", "P", "T"],
        &[("S", "Q", 1.0), ("S", "P", 1.0), ("Q", "T", 1.0), ("P", "T", 1.0)],
    )
    .unwrap();
    let result = dijkstra(&graph, "S").unwrap();
    assert_eq!(path_of(&result, "T"), vec!["S", "Q", "T"]);
}

#[test]
fn test_zero_weight_edges() {
    let graph = Graph::from_edges(["A", "B", "C"], &[("A", "B", 0.0), ("B", "C", 0.0)]).unwrap();
    let result = dijkstra(&graph, "A").unwrap();
    assert_eq!(result.distance("C"), Some(Distance::ZERO));
    assert_eq!(path_of(&result, "C"), vec!["A", "B", "C"]);
}

#[test]
fn test_fractional_weights() {
    let graph = Graph::from_edges(["A", "B", "C"], &[("A", "B", 0.5), ("B", "C", 1.25)]).unwrap();
    let result = dijkstra(&graph, "A").unwrap();
    assert_eq!(result.distance("C"), Some(Distance::new(1.75)));
}

#[test]
fn test_unknown_source() {
    let graph = city_network();
    assert!(matches!(
        dijkstra(&graph, "Z"),
        Err(TransitError::UnknownNode { .. })
    ));
}

/// Path weights sum to the reported distance
#[test]
fn test_path_weight_matches_distance() {
    let graph = city_network();
    for source in graph.nodes() {
        let result = dijkstra(&graph, source).unwrap();
        for target in graph.nodes() {
            let path = result.path(target);
            let total: f64 = path
                .windows(2)
                .map(|pair| graph.weight(&pair[0], &pair[1]).unwrap())
                .sum();
            assert_eq!(Distance::new(total), result.distance(target).unwrap());
        }
    }
}

/// Chains of the heaviest accepted weight stay finite and reachable
#[test]
fn test_max_weight_chain_stays_reachable() {
    let graph = Graph::from_edges(
        ["A", "B", "C"],
        &[("A", "B", MAX_WEIGHT), ("B", "C", MAX_WEIGHT)],
    )
    .unwrap();
    let result = dijkstra(&graph, "A").unwrap();

    assert!(dfs_traverse(&graph, "A").unwrap().contains("C"));
    assert!(result.is_reachable("C"));
    assert_eq!(result.distance("C"), Some(Distance::new(2.0 * MAX_WEIGHT)));
    assert_eq!(path_of(&result, "C"), vec!["A", "B", "C"]);
}

/// Weights that would overflow a path sum never enter the graph
#[test]
fn test_overflowing_weights_rejected_at_construction() {
    let err = Graph::from_edges(["A", "B", "C"], &[("A", "B", f64::MAX), ("B", "C", f64::MAX)])
        .unwrap_err();
    assert!(matches!(err, TransitError::InvalidWeight { .. }));
}
