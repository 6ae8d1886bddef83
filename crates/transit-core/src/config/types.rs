//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Network definition: nodes, weighted edges and the default start node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Node used for traversals and shortest paths unless overridden;
    /// the first node when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,

    /// Node ids in insertion order
    pub nodes: Vec<String>,

    /// Undirected edges in insertion order
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,
}

/// A single undirected weighted edge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

impl EdgeConfig {
    pub fn new(from: &str, to: &str, weight: f64) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        }
    }
}

impl Default for NetworkConfig {
    /// The 7-node city transportation network
    fn default() -> Self {
        Self {
            start: Some("A".to_string()),
            nodes: ["A", "B", "C", "D", "E", "F", "G"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            edges: vec![
                EdgeConfig::new("A", "B", 5.0),
                EdgeConfig::new("A", "C", 7.0),
                EdgeConfig::new("B", "D", 3.0),
                EdgeConfig::new("C", "D", 4.0),
                EdgeConfig::new("C", "E", 6.0),
                EdgeConfig::new("D", "F", 2.0),
                EdgeConfig::new("E", "F", 8.0),
                EdgeConfig::new("E", "G", 5.0),
                EdgeConfig::new("F", "G", 3.0),
            ],
        }
    }
}
