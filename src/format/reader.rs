//! Reads JSON graph documents into a WeightedGraph.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::WeightedGraph;
use crate::types::{Edge, GraphResult, Node};

/// On-disk shape of a graph: ordered node and edge lists.
///
/// ```json
/// {"nodes": [{"id": "A"}, {"id": "B"}],
///  "edges": [{"from": "A", "to": "B", "weight": 4}]}
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    /// Nodes in enumeration order.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Edges in insertion order.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl GraphDocument {
    /// Fill in omitted labels and edge IDs.
    fn normalize(mut self) -> Self {
        for node in &mut self.nodes {
            if node.label.is_empty() {
                node.label = node.id.clone();
            }
        }
        for edge in &mut self.edges {
            if edge.id.is_empty() {
                edge.id = format!("{}{}", edge.from, edge.to);
            }
        }
        self
    }

    /// Validate and build the graph.
    pub fn into_graph(self) -> GraphResult<WeightedGraph> {
        let doc = self.normalize();
        WeightedGraph::new(doc.nodes, doc.edges)
    }
}

/// Reader for JSON graph documents.
pub struct GraphReader;

impl GraphReader {
    /// Read a graph document from a file.
    pub fn read_from_file(path: &Path) -> GraphResult<WeightedGraph> {
        let data = std::fs::read_to_string(path)?;
        log::debug!("Read {} bytes from {}", data.len(), path.display());
        Self::from_str(&data)
    }

    /// Read from any reader into a WeightedGraph.
    pub fn read_from(reader: &mut impl Read) -> GraphResult<WeightedGraph> {
        let doc: GraphDocument = serde_json::from_reader(reader)?;
        doc.into_graph()
    }

    /// Parse a graph document held in memory.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> GraphResult<WeightedGraph> {
        let doc: GraphDocument = serde_json::from_str(text)?;
        doc.into_graph()
    }
}
