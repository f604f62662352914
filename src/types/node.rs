//! Graph nodes.

use serde::{Deserialize, Serialize};

/// A node: a unique ID plus a display label.
///
/// The label is carried through for callers and never used by the algorithms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Unique node ID.
    pub id: String,
    /// Display label. Defaults to the ID.
    #[serde(default)]
    pub label: String,
}

impl Node {
    /// Create a node labelled with its own ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            label: id.clone(),
            id,
        }
    }

    /// Create a node with a distinct label.
    pub fn with_label(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
