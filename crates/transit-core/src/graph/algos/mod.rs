//! Graph algorithm implementations
//!
//! - `dfs`: Depth-first traversal (explicit stack)
//! - `bfs`: Breadth-first traversal (FIFO queue)
//! - `dijkstra`: Single-source shortest paths
//! - `shared`: Common checks used by multiple algorithms

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::bfs_traverse;
pub use dfs::dfs_traverse;
pub use dijkstra::dijkstra;
