//! Core trait definitions: the adjacency seam consumed by the graph searches
//! and the layered-recurrence seam consumed by [`LayeredEngine`].
//!
//! Graph searches never build or own a graph. Callers hand in anything that
//! can answer "which edges leave node `u`", whether that is a sparse map keyed
//! by node id or a dense `Vec<Vec<_>>`. Nodes missing from a sparse map simply
//! have no outgoing edges.
//!
//! Dynamic programs plug into the engine by describing themselves as a chain
//! of layers:
//! - layers 0..=T, with transitions only between consecutive layers,
//! - a frontier holding every sub-problem value of one layer,
//! - a forward step mapping the frontier of layer `i` to layer `i+1`.
//!
//! [`LayeredEngine`]: crate::engine::LayeredEngine

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// An outgoing edge: plain neighbour ids for unweighted graphs, or
/// `(neighbour, weight)` pairs for weighted ones.
pub trait Edge {
    /// Node the edge points at.
    fn target(&self) -> usize;
}

impl Edge for usize {
    #[inline]
    fn target(&self) -> usize {
        *self
    }
}

impl<W> Edge for (usize, W) {
    #[inline]
    fn target(&self) -> usize {
        self.0
    }
}

/// Read-only adjacency structure.
///
/// `edges(u)` lists the edges leaving `u` in the order the caller inserted
/// them. Searches that depend on sibling order (DFS) follow that listing.
pub trait Graph {
    type Edge: Edge;

    /// Outgoing edges of `node`; empty for nodes the graph does not know.
    fn edges(&self, node: usize) -> &[Self::Edge];
}

impl<E: Edge, S: BuildHasher> Graph for HashMap<usize, Vec<E>, S> {
    type Edge = E;

    fn edges(&self, node: usize) -> &[E] {
        self.get(&node).map(Vec::as_slice).unwrap_or_default()
    }
}

impl<E: Edge> Graph for BTreeMap<usize, Vec<E>> {
    type Edge = E;

    fn edges(&self, node: usize) -> &[E] {
        self.get(&node).map(Vec::as_slice).unwrap_or_default()
    }
}

impl<E: Edge> Graph for [Vec<E>] {
    type Edge = E;

    fn edges(&self, node: usize) -> &[E] {
        self.get(node).map(Vec::as_slice).unwrap_or_default()
    }
}

impl<E: Edge> Graph for Vec<Vec<E>> {
    type Edge = E;

    fn edges(&self, node: usize) -> &[E] {
        self.as_slice().edges(node)
    }
}

impl<G: Graph + ?Sized> Graph for &G {
    type Edge = G::Edge;

    fn edges(&self, node: usize) -> &[G::Edge] {
        (**self).edges(node)
    }
}

/// A dynamic program whose table can be filled one layer at a time.
///
/// A `LayeredProblem` corresponds to a *fixed* instance: a struct holding the
/// input data (item lists, sequences). Semantics:
/// - There are `T = num_layers()` steps.
/// - `forward_step(i, frontier)` maps layer `i` to layer `i+1` and must only
///   depend on `frontier` and the fixed problem data.
/// - After T steps the final frontier holds the answer, read by
///   `extract_cost`.
pub trait LayeredProblem {
    /// Representation of all DP values on one layer (e.g. a DP row).
    type Frontier: Clone;

    /// Objective type.
    type Cost: Copy + Ord;

    /// Number of DP layers/steps `T`.
    fn num_layers(&self) -> usize;

    /// Frontier at layer 0.
    fn init_frontier(&self) -> Self::Frontier;

    /// Perform one DP step: from layer `layer` to `layer + 1`.
    fn forward_step(&self, layer: usize, frontier: &Self::Frontier) -> Self::Frontier;

    /// Read the objective from the frontier at layer T.
    fn extract_cost(&self, frontier_t: &Self::Frontier) -> Self::Cost;
}

/// Layered problems that can walk an optimal decision chain backwards.
///
/// The engine recomputes frontiers block by block and asks the problem to step
/// from a state at layer `layer + 1` back to the state it came from at layer
/// `layer`, given the frontier of layer `layer`.
pub trait Traceback: LayeredProblem {
    /// One position in a frontier (e.g. a remaining capacity).
    type State: Clone;

    /// State at layer T that attains the extracted cost.
    fn terminal_state(&self, frontier_t: &Self::Frontier) -> Self::State;

    /// Predecessor of `state` (at layer `layer + 1`) on an optimal chain.
    fn step_back(&self, layer: usize, before: &Self::Frontier, state: &Self::State)
        -> Self::State;
}

#[cfg(test)]
mod tests {
    use super::{Edge, Graph};
    use std::collections::{BTreeMap, HashMap};

    #[test]
    fn missing_nodes_have_no_edges() {
        let mut sparse: HashMap<usize, Vec<usize>> = HashMap::new();
        sparse.insert(1, vec![2, 3]);
        assert_eq!(sparse.edges(1), &[2, 3]);
        assert!(sparse.edges(9).is_empty());

        let dense: Vec<Vec<(usize, i64)>> = vec![vec![(1, 4)], vec![]];
        assert_eq!(dense.edges(0), &[(1, 4)]);
        assert!(dense.edges(5).is_empty());

        let ordered: BTreeMap<usize, Vec<usize>> = BTreeMap::from([(0, vec![4])]);
        assert_eq!(ordered.edges(0), &[4]);
    }

    #[test]
    fn weighted_edges_expose_their_target() {
        assert_eq!(7usize.target(), 7);
        assert_eq!((3usize, -2i64).target(), 3);
    }
}
