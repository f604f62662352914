//! Undirected weighted edges.

use serde::{Deserialize, Serialize};

/// An undirected relationship between two nodes.
///
/// `from` and `to` only record the order in which the caller supplied the
/// endpoints; an edge A-B is the same connection as B-A.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Caller-supplied edge ID. Defaults to `from` followed by `to`.
    #[serde(default)]
    pub id: String,
    /// First endpoint.
    pub from: String,
    /// Second endpoint.
    pub to: String,
    /// Edge weight. May be negative; must be finite.
    pub weight: f64,
}

impl Edge {
    /// Create an edge whose ID is the concatenation of its endpoints.
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        let from = from.into();
        let to = to.into();
        Self {
            id: format!("{}{}", from, to),
            from,
            to,
            weight,
        }
    }

    /// Create an edge with an explicit ID.
    pub fn with_id(
        id: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Given one endpoint, return the other one.
    pub fn opposite(&self, node: &str) -> Option<&str> {
        if self.from == node {
            Some(self.to.as_str())
        } else if self.to == node {
            Some(self.from.as_str())
        } else {
            None
        }
    }
}
