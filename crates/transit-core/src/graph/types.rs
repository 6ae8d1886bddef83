use serde::{Serialize, Serializer};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// An undirected weighted edge as it was added to the graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// One entry of a node's adjacency list
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor<'a> {
    pub id: &'a str,
    pub weight: f64,
}

/// Accumulated shortest-path distance from a source node
///
/// Unreachable nodes carry [`Distance::INFINITY`]. Serializes as `null`
/// when infinite so JSON output stays valid.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);
    pub const INFINITY: Distance = Distance(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Distance(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::INFINITY
    }
}

impl std::ops::Add<f64> for Distance {
    type Output = Self;

    fn add(self, weight: f64) -> Self {
        Distance(self.0 + weight)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_finite() {
            // Pad through the formatter so table alignment works
            f.pad(&self.0.to_string())
        } else {
            f.pad("inf")
        }
    }
}

impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.is_finite() {
            serializer.serialize_some(&self.0)
        } else {
            serializer.serialize_none()
        }
    }
}

/// Node id -> shortest distance from the source
pub type DistanceMap = BTreeMap<String, Distance>;

/// Node id -> node sequence from the source; empty when unreachable
pub type PathMap = BTreeMap<String, Vec<String>>;

/// Outcome of a depth-first or breadth-first traversal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VisitResult {
    pub start: String,
    /// Nodes in the order they were visited
    pub order: Vec<String>,
    /// Same nodes as `order`, for membership checks
    pub visited: BTreeSet<String>,
}

impl VisitResult {
    pub(crate) fn new(start: &str) -> Self {
        Self {
            start: start.to_string(),
            order: Vec::new(),
            visited: BTreeSet::new(),
        }
    }

    pub(crate) fn visit(&mut self, id: &str) {
        self.order.push(id.to_string());
        self.visited.insert(id.to_string());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.visited.contains(id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Single-source shortest distances and the paths that realize them
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShortestPaths {
    pub source: String,
    pub distances: DistanceMap,
    pub paths: PathMap,
}

impl ShortestPaths {
    /// Distance to `id`, or `None` if the node is not part of the graph
    pub fn distance(&self, id: &str) -> Option<Distance> {
        self.distances.get(id).copied()
    }

    /// Path to `id`; empty slice when unreachable or unknown
    pub fn path(&self, id: &str) -> &[String] {
        self.paths.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_reachable(&self, id: &str) -> bool {
        self.distance(id).is_some_and(|d| d.is_finite())
    }
}

/// Join a node path with arrows, e.g. `A -> C -> D`
pub fn format_path(path: &[String]) -> String {
    path.join(" -> ")
}
