//! Graph model, traversal and path-finding operations
//!
//! - `Graph`: undirected weighted network with deterministic iteration order
//! - DFS and BFS visit-order producers
//! - Dijkstra single-source shortest paths with path reconstruction
//! - `GraphProvider` trait the algorithms read the graph through

pub mod algos;
pub mod network;
pub mod path;
pub mod provider;
pub mod types;

pub use algos::{bfs_traverse, dfs_traverse, dijkstra};
pub use network::{Graph, MAX_WEIGHT};
pub use provider::GraphProvider;
pub use types::{
    format_path, Distance, DistanceMap, Edge, Neighbor, PathMap, ShortestPaths, VisitResult,
};
