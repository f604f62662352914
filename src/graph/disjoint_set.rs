//! Union-find over dense node indices, with path compression and union by rank.

use crate::types::NodeIndex;

/// Disjoint-set forest over the indices `0..n`.
///
/// Owned by a single algorithm run; nothing is shared between runs.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<NodeIndex>,
    rank: Vec<u32>,
    components: usize,
}

impl DisjointSet {
    /// Create `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            components: n,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently tracked.
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Representative of `x`'s set.
    ///
    /// Every node on the walk is repointed directly at the representative.
    pub fn find(&mut self, mut x: NodeIndex) -> NodeIndex {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }

        root
    }

    /// Returns true if `a` and `b` are in the same set.
    pub fn connected(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merge the sets holding `a` and `b`.
    ///
    /// Returns false if they were already joined. On equal rank, `b`'s root
    /// goes under `a`'s root.
    pub fn union(&mut self, a: NodeIndex, b: NodeIndex) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }

        self.components -= 1;
        true
    }
}
