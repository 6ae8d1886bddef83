//! Summary figures handed to the reporting layer

use serde::Serialize;

use crate::error::Result;
use crate::graph::Graph;

/// Degree of a single node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDegree {
    pub id: String,
    pub degree: usize,
}

/// Node count, edge count and per-node degree, in node insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub degrees: Vec<NodeDegree>,
}

impl GraphStats {
    pub fn from_graph(graph: &Graph) -> Result<Self> {
        let degrees = graph
            .nodes()
            .iter()
            .map(|id| -> Result<NodeDegree> {
                Ok(NodeDegree {
                    id: id.clone(),
                    degree: graph.degree(id)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            degrees,
        })
    }

    /// Sum of degrees; always twice the edge count
    pub fn total_degree(&self) -> usize {
        self.degrees.iter().map(|d| d.degree).sum()
    }
}
