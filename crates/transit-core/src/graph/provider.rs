use crate::error::Result;
use crate::graph::types::Neighbor;

/// Trait for providing node listing and adjacency to the algorithms
///
/// Implementations must return nodes and neighbors in a stable order;
/// traversal order and Dijkstra tie-breaking are defined in terms of it.
pub trait GraphProvider {
    /// All node ids, in insertion order
    fn node_ids(&self) -> Vec<&str>;

    /// Neighbors of `id` in edge insertion order
    fn neighbors(&self, id: &str) -> Result<Vec<Neighbor<'_>>>;

    fn contains(&self, id: &str) -> bool;
}
