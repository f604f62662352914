//! Error types for the pathspan library.

use thiserror::Error;

/// All errors that can occur in the pathspan library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The requested algorithm name is not implemented.
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A node ID appears more than once in the node list.
    #[error("Duplicate node ID: {0}")]
    DuplicateNode(String),

    /// An edge names a node that is not in the node list.
    #[error("Edge {edge} references unknown node ID: {node}")]
    InvalidEdgeReference { edge: String, node: String },

    /// Self-edge not allowed.
    #[error("Self-edge not allowed on node {0}")]
    SelfEdge(String),

    /// Edge weight is NaN or infinite.
    #[error("Edge {edge} has a non-finite weight: {weight}")]
    InvalidWeight { edge: String, weight: f64 },

    /// Node not found by ID.
    #[error("Node ID {0} not found")]
    NodeNotFound(String),

    /// A distance table was requested from a spanning-tree algorithm.
    #[error("Algorithm {0} does not compute shortest paths")]
    NotShortestPath(&'static str),

    /// A shortest-path request is missing its source or destination.
    #[error("Algorithm {algorithm} requires a {endpoint} node")]
    MissingEndpoint {
        algorithm: &'static str,
        endpoint: &'static str,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed graph document.
    #[error("Invalid graph document: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed configuration file.
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Convenience result type for pathspan operations.
pub type GraphResult<T> = Result<T, GraphError>;
