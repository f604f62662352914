//! pathspan — shortest paths and minimum spanning trees over weighted graphs.
//!
//! Callers build an undirected [`WeightedGraph`] from ordered node and edge
//! lists, then run one algorithm per request: Dijkstra or Bellman-Ford for
//! single-source shortest paths, Prim or Kruskal for minimum spanning trees.
//! Every algorithm is a pure function of its inputs.

pub mod cli;
pub mod config;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use config::{load_config, RunConfig};
pub use engine::{
    Algorithm, AnalysisEngine, AnalysisParams, AnalysisReport, DistanceTable, PathReport,
    TreeReport,
};
pub use format::{GraphDocument, GraphReader};
pub use graph::{
    bellman_ford, dijkstra, kruskal, prim, reconstruct_path, BellmanFordPaths, DisjointSet,
    GraphBuilder, Neighbor, ShortestPaths, SpanningTree, TreeEdge, WeightedGraph,
};
pub use types::{Distance, Edge, GraphError, GraphResult, Node, NodeIndex};
