//! In-memory graph model and the algorithms that run over it.

pub mod builder;
pub mod disjoint_set;
pub mod shortest_path;
pub mod spanning_tree;
pub mod weighted_graph;

pub use builder::GraphBuilder;
pub use disjoint_set::DisjointSet;
pub use shortest_path::{bellman_ford, dijkstra, reconstruct_path, BellmanFordPaths, ShortestPaths};
pub use spanning_tree::{kruskal, prim, SpanningTree, TreeEdge};
pub use weighted_graph::{Neighbor, WeightedGraph};
