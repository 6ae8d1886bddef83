//! Transit Core Library
//!
//! Graph model and algorithms for exploring a weighted undirected
//! transportation network: depth-first and breadth-first traversal and
//! Dijkstra single-source shortest paths.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod stats;
