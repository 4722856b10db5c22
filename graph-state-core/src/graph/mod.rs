//! Adjacency storage for a graph state.

use std::collections::HashSet;

/// Per-vertex neighbor sets for an undirected, loop-free graph on `0..num_qubits`.
///
/// Symmetry (`v in adj[u] <=> u in adj[v]`) and the absence of self-loops are
/// invariants maintained by every mutator below; nothing outside this module ever
/// touches the adjacency sets directly.
#[derive(Debug, Clone)]
pub(crate) struct GraphStore {
    adjacency: Vec<HashSet<usize>>,
}

impl GraphStore {
    pub(crate) fn new(num_qubits: usize) -> Self {
        Self {
            adjacency: vec![HashSet::new(); num_qubits],
        }
    }

    pub(crate) fn num_qubits(&self) -> usize {
        self.adjacency.len()
    }

    pub(crate) fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency[u].contains(&v)
    }

    pub(crate) fn add_edge(&mut self, u: usize, v: usize) {
        if u == v {
            return;
        }
        self.adjacency[u].insert(v);
        self.adjacency[v].insert(u);
    }

    pub(crate) fn remove_edge(&mut self, u: usize, v: usize) {
        self.adjacency[u].remove(&v);
        self.adjacency[v].remove(&u);
    }

    pub(crate) fn toggle_edge(&mut self, u: usize, v: usize) {
        if self.has_edge(u, v) {
            self.remove_edge(u, v);
        } else {
            self.add_edge(u, v);
        }
    }

    pub(crate) fn neighbors(&self, v: usize) -> impl Iterator<Item = &usize> {
        self.adjacency[v].iter()
    }

    pub(crate) fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Snapshots `adj[v]` into a vector, ordered ascending by vertex index so that
    /// [`crate::engine::GraphState::local_complement`]'s pairwise edge toggles are
    /// deterministic (helps test reproducibility; correctness does not depend on order).
    pub(crate) fn snapshot_neighbors_sorted(&self, v: usize) -> Vec<usize> {
        let mut snapshot: Vec<usize> = self.adjacency[v].iter().copied().collect();
        snapshot.sort_unstable();
        snapshot
    }

    /// True iff `v` has no neighbors, or exactly one neighbor and it is `other`.
    pub(crate) fn almost_isolated(&self, v: usize, other: usize) -> bool {
        let adj = &self.adjacency[v];
        adj.is_empty() || (adj.len() == 1 && adj.contains(&other))
    }
}
