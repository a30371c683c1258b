//! Dense adjacency list.
//!
//! Variables:
//!   V       = number of vertices
//!   E       = number of directed edges
//!   adj[u]  = out-edges of vertex u, in insertion order
//!
//!   add_edge(u, e):        adj[u].push(e),  E += 1
//!   add_undirected(u,v,w): add_edge(u,(v,w)) + add_edge(v,(u,w)),  E += 2

use crate::traits::{Edge, Graph};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList<E> {
    adj: Vec<Vec<E>>,
}

impl<E: Edge> AdjacencyList<E> {
    /// Create an empty graph with `v` vertices and no edges.
    pub fn new(v: usize) -> Self {
        Self {
            adj: (0..v).map(|_| Vec::new()).collect(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    /// Add a directed edge leaving `u`.
    ///
    /// # Panics
    /// Panics if `u` is not a vertex of the graph.
    pub fn add_edge(&mut self, u: usize, edge: E) {
        self.adj[u].push(edge);
    }

    pub fn neighbours(&self, u: usize) -> &[E] {
        self.edges(u)
    }

    /// Borrow the rows for code expecting `&[Vec<E>]`.
    pub fn as_slice(&self) -> &[Vec<E>] {
        &self.adj
    }
}

impl AdjacencyList<usize> {
    /// Add undirected edge (both directions).
    pub fn add_undirected(&mut self, u: usize, v: usize) {
        self.adj[u].push(v);
        self.adj[v].push(u);
    }
}

impl<W: Copy> AdjacencyList<(usize, W)> {
    /// Add undirected weighted edge (both directions, same weight).
    pub fn add_undirected_weighted(&mut self, u: usize, v: usize, weight: W) {
        self.adj[u].push((v, weight));
        self.adj[v].push((u, weight));
    }
}

impl<E: Edge> Graph for AdjacencyList<E> {
    type Edge = E;

    fn edges(&self, node: usize) -> &[E] {
        self.adj.as_slice().edges(node)
    }
}

impl<E> From<Vec<Vec<E>>> for AdjacencyList<E> {
    fn from(adj: Vec<Vec<E>>) -> Self {
        Self { adj }
    }
}
