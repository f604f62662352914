//! Minimum spanning trees (Prim, Kruskal) over undirected graphs.
//!
//! Both return a spanning forest of the processed component(s) when the graph
//! is disconnected: Prim covers only the first node's component, Kruskal
//! covers every component.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use serde::Serialize;

use crate::types::NodeIndex;

use super::{DisjointSet, Neighbor, WeightedGraph};

/// An edge selected into a spanning tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TreeEdge {
    /// ID of the originating graph edge.
    pub id: String,
    /// Endpoint the algorithm reached the edge from.
    pub from: String,
    /// The other endpoint.
    pub to: String,
    /// Edge weight.
    pub weight: f64,
}

/// Selected edges in acceptance order plus their summed weight.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SpanningTree {
    /// Accepted edges, in the order the algorithm accepted them.
    pub edges: Vec<TreeEdge>,
    /// Sum of the accepted edge weights.
    pub total_weight: f64,
}

impl SpanningTree {
    fn accept(&mut self, graph: &WeightedGraph, from: NodeIndex, neighbor: &Neighbor) {
        self.edges.push(TreeEdge {
            id: graph.edges()[neighbor.edge].id.clone(),
            from: graph.id_of(from).to_string(),
            to: graph.id_of(neighbor.node).to_string(),
            weight: neighbor.weight,
        });
        self.total_weight += neighbor.weight;
    }

    /// Number of accepted edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if no edge was accepted.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns true if the tree spans all `node_count` nodes.
    pub fn spans(&self, node_count: usize) -> bool {
        self.edges.len() + 1 >= node_count
    }
}

/// Candidate edge leaving the visited set.
///
/// Ordered so the max-heap pops the lightest edge first and, among equal
/// weights, the one pushed earliest.
#[derive(Debug, Clone, Copy)]
struct FrontierEdge {
    from: NodeIndex,
    neighbor: Neighbor,
    seq: usize,
}

impl Ord for FrontierEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        // Weights are validated finite at graph construction
        other
            .neighbor
            .weight
            .partial_cmp(&self.neighbor.weight)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEdge {}

/// Frontier of Prim's algorithm: a heap plus an insertion counter for
/// stable tie-breaking.
struct Frontier {
    heap: BinaryHeap<FrontierEdge>,
    next_seq: usize,
}

impl Frontier {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Push every edge from `node` to a still-unvisited neighbor.
    fn extend_from(&mut self, graph: &WeightedGraph, node: NodeIndex, visited: &[bool]) {
        for neighbor in graph.neighbors(node) {
            if visited[neighbor.node] {
                continue;
            }
            self.heap.push(FrontierEdge {
                from: node,
                neighbor: *neighbor,
                seq: self.next_seq,
            });
            self.next_seq += 1;
        }
    }

    /// Pop the lightest edge whose target is still unvisited.
    fn pop_unvisited(&mut self, visited: &[bool]) -> Option<FrontierEdge> {
        while let Some(edge) = self.heap.pop() {
            if !visited[edge.neighbor.node] {
                return Some(edge);
            }
        }
        None
    }
}

/// Prim's minimum spanning tree, grown from the first node of the graph.
///
/// Selects the lightest frontier edge to an unvisited node each step; equal
/// weights go to the edge that entered the frontier first. Stale frontier
/// entries are dropped lazily, which selects exactly the same edges as
/// rescanning the whole frontier every step.
///
/// Time: O(E log E)
pub fn prim(graph: &WeightedGraph) -> SpanningTree {
    let mut tree = SpanningTree::default();
    let n = graph.node_count();
    if n == 0 {
        return tree;
    }

    let start = 0;
    let mut visited = vec![false; n];
    visited[start] = true;
    let mut visited_count = 1;

    let mut frontier = Frontier::new();
    frontier.extend_from(graph, start, &visited);

    while visited_count < n {
        let Some(edge) = frontier.pop_unvisited(&visited) else {
            break;
        };
        let target = edge.neighbor.node;
        visited[target] = true;
        visited_count += 1;
        tree.accept(graph, edge.from, &edge.neighbor);
        frontier.extend_from(graph, target, &visited);
    }

    if visited_count < n {
        log::debug!(
            "Prim: start node {} reaches {} of {} nodes, returning a forest",
            graph.id_of(start),
            visited_count,
            n
        );
    }
    tree
}

/// Distinct undirected edges in adjacency-scan order.
///
/// Only the first edge seen for each unordered endpoint pair survives.
fn distinct_edges(graph: &WeightedGraph) -> Vec<(NodeIndex, Neighbor)> {
    let mut seen: HashSet<(NodeIndex, NodeIndex)> = HashSet::new();
    let mut edges = Vec::with_capacity(graph.edge_count());
    for node in 0..graph.node_count() {
        for neighbor in graph.neighbors(node) {
            let key = (node.min(neighbor.node), node.max(neighbor.node));
            if seen.insert(key) {
                edges.push((node, *neighbor));
            }
        }
    }
    edges
}

/// Kruskal's minimum spanning tree (a forest on disconnected graphs).
///
/// Edges are stably sorted by weight, so equal weights keep their
/// adjacency-scan order.
///
/// Time: O(E log E) for sorting + O(E α(V)) for union-find.
pub fn kruskal(graph: &WeightedGraph) -> SpanningTree {
    let mut tree = SpanningTree::default();
    let n = graph.node_count();
    if n == 0 {
        return tree;
    }

    let mut edges = distinct_edges(graph);
    edges.sort_by(|a, b| {
        a.1.weight
            .partial_cmp(&b.1.weight)
            .unwrap_or(Ordering::Equal)
    });

    let mut sets = DisjointSet::new(n);
    for (from, neighbor) in &edges {
        if sets.union(*from, neighbor.node) {
            tree.accept(graph, *from, neighbor);
            // Stop when we have n-1 edges
            if tree.len() == n - 1 {
                break;
            }
        }
    }

    log::debug!(
        "Kruskal: accepted {} of {} distinct edges, {} component(s)",
        tree.len(),
        edges.len(),
        sets.component_count()
    );
    tree
}
