//! Analysis executor — runs one algorithm per request.

use serde::Serialize;

use crate::graph::{
    bellman_ford, dijkstra, kruskal, prim, ShortestPaths, SpanningTree, WeightedGraph,
};
use crate::types::{Distance, GraphError, GraphResult};

use super::Algorithm;

/// Parameters for one analysis request.
#[derive(Debug, Clone)]
pub struct AnalysisParams {
    /// Which algorithm to run.
    pub algorithm: Algorithm,
    /// Source node ID. Required by shortest-path algorithms.
    pub source: Option<String>,
    /// Destination node ID. Required by shortest-path algorithms.
    pub destination: Option<String>,
}

impl AnalysisParams {
    /// Parameters for a shortest-path request.
    pub fn path(algorithm: Algorithm, source: &str, destination: &str) -> Self {
        Self {
            algorithm,
            source: Some(source.to_string()),
            destination: Some(destination.to_string()),
        }
    }

    /// Parameters for a spanning-tree request.
    pub fn tree(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            source: None,
            destination: None,
        }
    }
}

/// Result of a shortest-path request between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathReport {
    /// The algorithm that produced this report.
    pub algorithm: Algorithm,
    /// Source node ID.
    pub source: String,
    /// Destination node ID.
    pub destination: String,
    /// Distance from source to destination.
    pub distance: Distance,
    /// Node IDs from source to destination, inclusive. Empty if unreachable.
    pub path: Vec<String>,
    /// Negative-cycle flag. Only Bellman-Ford sets this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_negative_cycle: Option<bool>,
}

/// Result of a spanning-tree request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeReport {
    /// The algorithm that produced this report.
    pub algorithm: Algorithm,
    /// Selected edges and their total weight.
    #[serde(flatten)]
    pub tree: SpanningTree,
    /// True if the edges connect every node of the graph.
    pub spanning: bool,
}

/// Output of [`AnalysisEngine::run`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnalysisReport {
    /// Shortest path between two nodes.
    Path(PathReport),
    /// Minimum spanning tree or forest.
    Mst(TreeReport),
}

/// Full distance table from one source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceTable {
    /// The algorithm that produced this table.
    pub algorithm: Algorithm,
    /// Distances and predecessors.
    #[serde(flatten)]
    pub paths: ShortestPaths,
    /// Negative-cycle flag. Only Bellman-Ford sets this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_negative_cycle: Option<bool>,
}

/// The analysis engine maps algorithm selections to entry points.
///
/// Stateless: every call works on its own copy of the working data.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisEngine;

impl AnalysisEngine {
    /// Create a new analysis engine.
    pub fn new() -> Self {
        Self
    }

    /// Run the requested algorithm.
    pub fn run(
        &self,
        graph: &WeightedGraph,
        params: AnalysisParams,
    ) -> GraphResult<AnalysisReport> {
        let algorithm = params.algorithm;
        log::debug!(
            "Running {} on {} nodes, {} edges",
            algorithm,
            graph.node_count(),
            graph.edge_count()
        );

        if !algorithm.is_shortest_path() {
            let tree = match algorithm {
                Algorithm::Prim => prim(graph),
                _ => kruskal(graph),
            };
            let spanning = tree.spans(graph.node_count());
            return Ok(AnalysisReport::Mst(TreeReport {
                algorithm,
                tree,
                spanning,
            }));
        }

        let source = params.source.ok_or(GraphError::MissingEndpoint {
            algorithm: algorithm.name(),
            endpoint: "source",
        })?;
        let destination = params.destination.ok_or(GraphError::MissingEndpoint {
            algorithm: algorithm.name(),
            endpoint: "destination",
        })?;
        graph.require(&destination)?;

        let table = self.shortest_paths(graph, algorithm, &source)?;
        let distance = table.paths.distance(&destination).unwrap_or_default();
        let path = table
            .paths
            .path_to(&destination)
            .into_iter()
            .map(str::to_string)
            .collect();

        Ok(AnalysisReport::Path(PathReport {
            algorithm,
            source,
            destination,
            distance,
            path,
            has_negative_cycle: table.has_negative_cycle,
        }))
    }

    /// Compute the full distance and predecessor tables from `source`.
    pub fn shortest_paths(
        &self,
        graph: &WeightedGraph,
        algorithm: Algorithm,
        source: &str,
    ) -> GraphResult<DistanceTable> {
        match algorithm {
            Algorithm::Dijkstra => Ok(DistanceTable {
                algorithm,
                paths: dijkstra(graph, source)?,
                has_negative_cycle: None,
            }),
            Algorithm::BellmanFord => {
                let result = bellman_ford(graph, source)?;
                Ok(DistanceTable {
                    algorithm,
                    paths: result.paths,
                    has_negative_cycle: Some(result.has_negative_cycle),
                })
            }
            Algorithm::Prim | Algorithm::Kruskal => {
                Err(GraphError::NotShortestPath(algorithm.name()))
            }
        }
    }
}
