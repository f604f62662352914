//! Single-source shortest paths (Dijkstra, Bellman-Ford) and path reconstruction.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::types::{Distance, GraphResult, NodeIndex};

use super::WeightedGraph;

/// Distances and predecessors from one source node.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPaths {
    source: NodeIndex,
    /// Node IDs in enumeration order, so the result outlives the graph.
    ids: Vec<String>,
    /// Best known distance per node index.
    pub distances: Vec<Distance>,
    /// Predecessor on the best known path, per node index.
    pub previous: Vec<Option<NodeIndex>>,
}

impl ShortestPaths {
    fn init(graph: &WeightedGraph, source: NodeIndex) -> Self {
        let n = graph.node_count();
        let mut distances = vec![Distance::Unreached; n];
        distances[source] = Distance::ZERO;
        Self {
            source,
            ids: graph.nodes().iter().map(|node| node.id.clone()).collect(),
            distances,
            previous: vec![None; n],
        }
    }

    fn position(&self, id: &str) -> Option<NodeIndex> {
        self.ids.iter().position(|n| n == id)
    }

    /// Index of the source node.
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    /// ID of the source node.
    pub fn source_id(&self) -> &str {
        &self.ids[self.source]
    }

    /// Distance to a node, or `None` if the ID is unknown.
    pub fn distance(&self, id: &str) -> Option<Distance> {
        self.position(id).map(|i| self.distances[i])
    }

    /// Predecessor of a node on its best path. `None` for the source,
    /// unreached nodes, and unknown IDs.
    pub fn previous(&self, id: &str) -> Option<&str> {
        let i = self.position(id)?;
        self.previous[i].map(|p| self.ids[p].as_str())
    }

    /// Number of nodes with a known distance, the source included.
    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_reached()).count()
    }

    /// Ordered node IDs from the source to `destination`, inclusive.
    /// Empty if `destination` is unreachable.
    pub fn path_to(&self, destination: &str) -> Vec<&str> {
        let Some(dest) = self.position(destination) else {
            return Vec::new();
        };
        reconstruct_path(&self.previous, self.source, dest)
            .into_iter()
            .map(|i| self.ids[i].as_str())
            .collect()
    }
}

/// Serializes a per-index table as a map keyed by node ID.
struct ById<'a, T> {
    ids: &'a [String],
    values: &'a [T],
}

impl<T: Serialize> Serialize for ById<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.ids.len()))?;
        for (id, value) in self.ids.iter().zip(self.values) {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}

impl Serialize for ShortestPaths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let previous: Vec<Option<&str>> = self
            .previous
            .iter()
            .map(|p| p.map(|i| self.ids[i].as_str()))
            .collect();

        let mut state = serializer.serialize_struct("ShortestPaths", 3)?;
        state.serialize_field("source", self.source_id())?;
        state.serialize_field(
            "distances",
            &ById {
                ids: &self.ids,
                values: &self.distances,
            },
        )?;
        state.serialize_field(
            "previous",
            &ById {
                ids: &self.ids,
                values: &previous,
            },
        )?;
        state.end()
    }
}

/// Bellman-Ford output: shortest paths plus the negative-cycle flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BellmanFordPaths {
    /// Distances and predecessors after |V|-1 relaxation passes.
    #[serde(flatten)]
    pub paths: ShortestPaths,
    /// True if a further pass could still shorten some distance.
    pub has_negative_cycle: bool,
}

/// Heap entry for Dijkstra. Ordered so the max-heap pops the smallest
/// distance first, then the lowest node index.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    dist: f64,
    node: NodeIndex,
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Distances are finite sums of finite weights
        other
            .dist
            .partial_cmp(&self.dist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Dijkstra's single-source shortest paths.
///
/// Weights are expected to be non-negative; this is not enforced, and the
/// result is meaningless otherwise. Among equally distant unvisited nodes the
/// one listed first in the graph is settled first.
///
/// Time: O((V + E) log V)
pub fn dijkstra(graph: &WeightedGraph, source_id: &str) -> GraphResult<ShortestPaths> {
    let source = graph.require(source_id)?;
    if graph.has_negative_weight() {
        log::warn!("Running Dijkstra on a graph with negative edge weights");
    }

    let mut result = ShortestPaths::init(graph, source);
    let mut visited = vec![false; graph.node_count()];
    let mut heap = BinaryHeap::new();
    heap.push(Candidate {
        dist: 0.0,
        node: source,
    });

    while let Some(Candidate { dist, node }) = heap.pop() {
        if visited[node] {
            continue;
        }
        // Skip if we've already found a better path
        if Distance::Finite(dist) > result.distances[node] {
            continue;
        }
        visited[node] = true;

        for neighbor in graph.neighbors(node) {
            if visited[neighbor.node] {
                continue;
            }
            let candidate = dist + neighbor.weight;
            if Distance::Finite(candidate) < result.distances[neighbor.node] {
                result.distances[neighbor.node] = Distance::Finite(candidate);
                result.previous[neighbor.node] = Some(node);
                heap.push(Candidate {
                    dist: candidate,
                    node: neighbor.node,
                });
            }
        }
    }

    log::debug!(
        "Dijkstra from {}: reached {} of {} nodes",
        source_id,
        result.reached_count(),
        graph.node_count()
    );
    Ok(result)
}

/// One relaxation sweep over every adjacency entry of every reached node.
/// Returns true if any distance changed.
fn relax_all(graph: &WeightedGraph, paths: &mut ShortestPaths) -> bool {
    let mut updated = false;
    for node in 0..graph.node_count() {
        let Distance::Finite(base) = paths.distances[node] else {
            continue;
        };
        for neighbor in graph.neighbors(node) {
            let candidate = Distance::Finite(base + neighbor.weight);
            if candidate < paths.distances[neighbor.node] {
                paths.distances[neighbor.node] = candidate;
                paths.previous[neighbor.node] = Some(node);
                updated = true;
            }
        }
    }
    updated
}

/// Returns true if some reached node could still improve a neighbor.
fn can_still_relax(graph: &WeightedGraph, paths: &ShortestPaths) -> bool {
    (0..graph.node_count()).any(|node| match paths.distances[node] {
        Distance::Finite(base) => graph
            .neighbors(node)
            .iter()
            .any(|nb| Distance::Finite(base + nb.weight) < paths.distances[nb.node]),
        Distance::Unreached => false,
    })
}

/// Bellman-Ford single-source shortest paths.
///
/// Since every edge is stored in both directions, any negative edge reachable
/// from the source bounces between its endpoints and is reported as a
/// negative cycle.
///
/// Time: O(V * E)
pub fn bellman_ford(graph: &WeightedGraph, source_id: &str) -> GraphResult<BellmanFordPaths> {
    let source = graph.require(source_id)?;
    let mut paths = ShortestPaths::init(graph, source);

    let passes = graph.node_count().saturating_sub(1);
    for pass in 0..passes {
        // Early termination if no updates
        if !relax_all(graph, &mut paths) {
            log::debug!("Bellman-Ford converged after {} passes", pass + 1);
            break;
        }
    }

    let has_negative_cycle = can_still_relax(graph, &paths);
    if has_negative_cycle {
        log::warn!(
            "Bellman-Ford from {}: negative cycle reachable from source",
            source_id
        );
    }

    Ok(BellmanFordPaths {
        paths,
        has_negative_cycle,
    })
}

/// Walk predecessor links back from `destination`.
///
/// Returns the node indices from `source` to `destination` inclusive, or an
/// empty vector when the walk does not end at `source`. A predecessor chain
/// that loops (possible once a negative cycle was relaxed) also yields an
/// empty vector.
pub fn reconstruct_path(
    previous: &[Option<NodeIndex>],
    source: NodeIndex,
    destination: NodeIndex,
) -> Vec<NodeIndex> {
    let mut path = Vec::new();
    let mut current = Some(destination);

    while let Some(node) = current {
        if path.len() > previous.len() {
            return Vec::new();
        }
        path.push(node);
        current = previous.get(node).copied().flatten();
    }

    path.reverse();
    if path.first() == Some(&source) {
        path
    } else {
        Vec::new()
    }
}
