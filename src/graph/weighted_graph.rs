//! Core graph structure — nodes + undirected weighted edges with adjacency lists.

use std::collections::HashMap;

use crate::types::{Edge, GraphError, GraphResult, Node, NodeIndex};

/// One entry of a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    /// Index of the node at the other end of the edge.
    pub node: NodeIndex,
    /// Weight of the connecting edge.
    pub weight: f64,
    /// Index of the connecting edge in [`WeightedGraph::edges`].
    pub edge: usize,
}

/// An immutable undirected weighted graph.
///
/// Every edge (u, v, w) appears twice in the adjacency lists: as (v, w) under
/// u and as (u, w) under v. Parallel edges are all kept.
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    /// All nodes, in the caller's enumeration order.
    nodes: Vec<Node>,
    /// All edges, in the caller's order.
    edges: Vec<Edge>,
    /// Node ID -> position in `nodes`.
    index: HashMap<String, NodeIndex>,
    /// Adjacency lists, parallel to `nodes`.
    adjacency: Vec<Vec<Neighbor>>,
}

impl WeightedGraph {
    /// Build a graph from ordered node and edge lists.
    ///
    /// Fails on duplicate node IDs, edges naming unknown nodes, self-edges,
    /// and non-finite weights.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> GraphResult<Self> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), i).is_some() {
                return Err(GraphError::DuplicateNode(node.id.clone()));
            }
        }

        let mut adjacency: Vec<Vec<Neighbor>> = vec![Vec::new(); nodes.len()];
        for (edge_idx, edge) in edges.iter().enumerate() {
            let from = Self::resolve(&index, edge, &edge.from)?;
            let to = Self::resolve(&index, edge, &edge.to)?;

            // Validate: no self-edges
            if from == to {
                return Err(GraphError::SelfEdge(edge.from.clone()));
            }

            if !edge.weight.is_finite() {
                return Err(GraphError::InvalidWeight {
                    edge: edge.id.clone(),
                    weight: edge.weight,
                });
            }

            adjacency[from].push(Neighbor {
                node: to,
                weight: edge.weight,
                edge: edge_idx,
            });
            adjacency[to].push(Neighbor {
                node: from,
                weight: edge.weight,
                edge: edge_idx,
            });
        }

        log::debug!(
            "Built graph with {} nodes and {} edges",
            nodes.len(),
            edges.len()
        );

        Ok(Self {
            nodes,
            edges,
            index,
            adjacency,
        })
    }

    fn resolve(
        index: &HashMap<String, NodeIndex>,
        edge: &Edge,
        node: &str,
    ) -> GraphResult<NodeIndex> {
        index
            .get(node)
            .copied()
            .ok_or_else(|| GraphError::InvalidEdgeReference {
                edge: edge.id.clone(),
                node: node.to_string(),
            })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get all nodes in enumeration order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Get all edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get a node by index.
    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// ID of the node at `index`.
    ///
    /// Panics if `index` is out of range; indices handed out by this graph
    /// are always valid.
    pub fn id_of(&self, index: NodeIndex) -> &str {
        &self.nodes[index].id
    }

    /// Look up a node's index by ID.
    pub fn index_of(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    /// Like [`index_of`](Self::index_of), but fails with `NodeNotFound`.
    pub fn require(&self, id: &str) -> GraphResult<NodeIndex> {
        self.index_of(id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))
    }

    /// Adjacency list of the node at `index`.
    pub fn neighbors(&self, index: NodeIndex) -> &[Neighbor] {
        self.adjacency.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Adjacency list of a node, by ID.
    pub fn neighbors_of(&self, id: &str) -> GraphResult<&[Neighbor]> {
        Ok(self.neighbors(self.require(id)?))
    }

    /// Returns true if any edge has a negative weight.
    pub fn has_negative_weight(&self) -> bool {
        self.edges.iter().any(|e| e.weight < 0.0)
    }

    /// Number of connected components (isolated nodes count as one each).
    pub fn component_count(&self) -> usize {
        let mut sets = super::DisjointSet::new(self.node_count());
        for (u, list) in self.adjacency.iter().enumerate() {
            for n in list {
                sets.union(u, n.node);
            }
        }
        sets.component_count()
    }
}
