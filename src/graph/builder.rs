//! Fluent API for building WeightedGraph instances.

use crate::types::{Edge, GraphResult, Node};

use super::WeightedGraph;

/// Fluent builder for constructing a WeightedGraph.
///
/// Nothing is validated until [`build`](Self::build).
#[derive(Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node labelled with its own ID.
    pub fn add_node(&mut self, id: &str) -> &mut Self {
        self.nodes.push(Node::new(id));
        self
    }

    /// Add several nodes at once, in order.
    pub fn add_nodes(&mut self, ids: &[&str]) -> &mut Self {
        self.nodes.extend(ids.iter().map(|id| Node::new(*id)));
        self
    }

    /// Add a node with a display label.
    pub fn add_labeled_node(&mut self, id: &str, label: &str) -> &mut Self {
        self.nodes.push(Node::with_label(id, label));
        self
    }

    /// Add an undirected edge; its ID is `from` followed by `to`.
    pub fn link(&mut self, from: &str, to: &str, weight: f64) -> &mut Self {
        self.edges.push(Edge::new(from, to, weight));
        self
    }

    /// Add an undirected edge with an explicit ID.
    pub fn link_with_id(&mut self, id: &str, from: &str, to: &str, weight: f64) -> &mut Self {
        self.edges.push(Edge::with_id(id, from, to, weight));
        self
    }

    /// Build the final WeightedGraph.
    pub fn build(&self) -> GraphResult<WeightedGraph> {
        WeightedGraph::new(self.nodes.clone(), self.edges.clone())
    }
}
