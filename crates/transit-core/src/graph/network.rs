//! In-memory undirected weighted graph

use std::collections::HashMap;

use crate::bail_unknown_node;
use crate::error::{Result, TransitError};
use crate::graph::provider::GraphProvider;
use crate::graph::types::{Edge, Neighbor};

/// Largest accepted edge weight. Any simple path sums to at most
/// `(nodes - 1) * MAX_WEIGHT`, which stays finite for every graph that fits
/// in memory, so a reachable node never ends up with an infinite distance.
pub const MAX_WEIGHT: f64 = 1e15;

/// Undirected weighted graph with string-labelled nodes
///
/// Nodes keep their insertion order. Each adjacency list keeps edge
/// insertion order, which is the neighbor order every traversal follows.
/// Adding a node twice is an error (`DuplicateNode`), as is adding a second
/// edge between the same unordered pair (`DuplicateEdge`).
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<(usize, f64)>>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a node list and `(from, to, weight)` triples
    pub fn from_edges<N, S>(nodes: N, edges: &[(S, S, f64)]) -> Result<Self>
    where
        N: IntoIterator,
        N::Item: Into<String>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node)?;
        }
        for (from, to, weight) in edges {
            graph.add_edge(from.as_ref(), to.as_ref(), *weight)?;
        }
        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph_built"
        );
        Ok(graph)
    }

    pub fn add_node(&mut self, id: impl Into<String>) -> Result<()> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(TransitError::duplicate_node(id));
        }
        self.index.insert(id.clone(), self.nodes.len());
        self.nodes.push(id);
        self.adjacency.push(Vec::new());
        Ok(())
    }

    /// Add an undirected edge. Nothing is modified unless every check passes.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        let u = self.require(from)?;
        let v = self.require(to)?;
        if u == v {
            return Err(TransitError::SelfLoop {
                id: from.to_string(),
            });
        }
        // NaN fails every comparison, so the range check must be written positively
        if !(0.0..=MAX_WEIGHT).contains(&weight) {
            return Err(TransitError::invalid_weight(from, to, weight));
        }
        if self.adjacency[u].iter().any(|&(n, _)| n == v) {
            return Err(TransitError::DuplicateEdge {
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        self.adjacency[u].push((v, weight));
        self.adjacency[v].push((u, weight));
        self.edges.push(Edge {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        });
        tracing::trace!(from, to, weight, "edge_added");
        Ok(())
    }

    pub fn degree(&self, id: &str) -> Result<usize> {
        Ok(self.adjacency[self.require(id)?].len())
    }

    /// Weight of the edge between `from` and `to`, if any
    pub fn weight(&self, from: &str, to: &str) -> Option<f64> {
        let u = *self.index.get(from)?;
        let v = *self.index.get(to)?;
        self.adjacency[u]
            .iter()
            .find(|&&(n, _)| n == v)
            .map(|&(_, w)| w)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    fn require(&self, id: &str) -> Result<usize> {
        match self.index.get(id) {
            Some(&idx) => Ok(idx),
            None => bail_unknown_node!(id),
        }
    }
}

impl GraphProvider for Graph {
    fn node_ids(&self) -> Vec<&str> {
        self.nodes.iter().map(String::as_str).collect()
    }

    fn neighbors(&self, id: &str) -> Result<Vec<Neighbor<'_>>> {
        let idx = self.require(id)?;
        Ok(self.adjacency[idx]
            .iter()
            .map(|&(n, weight)| Neighbor {
                id: self.nodes[n].as_str(),
                weight,
            })
            .collect())
    }

    fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }
}
