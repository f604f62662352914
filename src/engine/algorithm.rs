//! Algorithm selection by name.

use std::str::FromStr;

use serde::Serialize;

use crate::types::GraphError;

/// The four algorithms the engine implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    /// Shortest paths, non-negative weights.
    Dijkstra,
    /// Shortest paths, negative weights allowed, reports negative cycles.
    BellmanFord,
    /// Minimum spanning tree grown from the first node.
    Prim,
    /// Minimum spanning forest via sorted edges and union-find.
    Kruskal,
}

impl Algorithm {
    /// Every algorithm, in display order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::BellmanFord,
        Algorithm::Prim,
        Algorithm::Kruskal,
    ];

    /// Return the canonical name for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dijkstra => "dijkstra",
            Self::BellmanFord => "bellman-ford",
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }

    /// Parse an algorithm from a name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "dijkstra" => Some(Self::Dijkstra),
            "bellman-ford" | "bellman_ford" | "bellmanford" => Some(Self::BellmanFord),
            "prim" => Some(Self::Prim),
            "kruskal" => Some(Self::Kruskal),
            _ => None,
        }
    }

    /// Returns true for the single-source shortest-path algorithms.
    pub fn is_shortest_path(&self) -> bool {
        matches!(self, Self::Dijkstra | Self::BellmanFord)
    }
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| GraphError::UnknownAlgorithm(s.to_string()))
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
