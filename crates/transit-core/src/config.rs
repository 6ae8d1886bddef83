//! Network configuration for transit
//!
//! A network is described in TOML. `start` is optional and defaults to the
//! first node:
//!
//! ```toml
//! start = "A"
//! nodes = ["A", "B", "C"]
//!
//! [[edges]]
//! from = "A"
//! to = "B"
//! weight = 5
//! ```

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{Result, TransitError};
use crate::graph::Graph;

pub use types::{EdgeConfig, NetworkConfig};

impl NetworkConfig {
    /// Load a network definition from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| TransitError::io_operation("read network", path.display(), e))?;
        let config: NetworkConfig = toml::from_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            nodes = config.nodes.len(),
            edges = config.edges.len(),
            "network_loaded"
        );
        Ok(config)
    }

    /// Serialize the network definition as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| TransitError::Other(format!("failed to serialize network: {}", e)))
    }

    /// Save the network definition to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml_string()?;
        fs::write(path, content)
            .map_err(|e| TransitError::io_operation("write network", path.display(), e))?;
        Ok(())
    }

    /// Construct the graph, surfacing the first invalid node or edge
    pub fn build_graph(&self) -> Result<Graph> {
        let edges: Vec<(&str, &str, f64)> = self
            .edges
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str(), e.weight))
            .collect();
        Graph::from_edges(self.nodes.iter().cloned(), &edges)
    }

    /// Configured start node, falling back to the first node
    pub fn start_node(&self) -> Option<&str> {
        self.start
            .as_deref()
            .or_else(|| self.nodes.first().map(String::as_str))
    }

    /// Build the graph and check that an explicitly configured start node is part of it
    pub fn validate(&self) -> Result<Graph> {
        let graph = self.build_graph()?;
        if let Some(start) = &self.start {
            if !self.nodes.contains(start) {
                return Err(TransitError::unknown_node(start.clone()));
            }
        }
        Ok(graph)
    }
}
