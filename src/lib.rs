//! Contest Kit
//!
//! Graph searches, shortest paths and dynamic-programming templates meant to
//! be dropped straight into contest solutions. Every routine is a pure,
//! synchronous function of its inputs: no state survives a call, and graphs
//! are only ever borrowed.
//!
//! ## Graphs
//! Searches accept anything implementing [`Graph`]: `HashMap<usize, Vec<_>>`,
//! `BTreeMap<usize, Vec<_>>`, `Vec<Vec<_>>` or [`graph::AdjacencyList`].
//! Edges are plain `usize` neighbours or `(neighbour, weight)` pairs.
//! - [`graph::bfs`] / [`graph::bfs_dense`]: hop distances.
//! - [`graph::dfs`] / [`graph::reachable`]: first-visit order, first-listed
//!   neighbour first.
//! - [`graph::dijkstra`] / [`graph::dijkstra_all_sources`]: non-negative
//!   weighted distances, [`graph::UNREACHABLE`] for unreached nodes.
//!
//! ## Dynamic programming
//! Table-style recurrences implement [`LayeredProblem`] and run on
//! [`LayeredEngine`], which keeps one row live for the optimum and about √T
//! checkpoint rows when an optimal decision chain is needed.
//!
//! ```
//! use contest_kit::problems::knapsack::knapsack_selection;
//!
//! let (value, items) = knapsack_selection(5, &[2, 3, 4], &[3, 4, 5]).unwrap();
//! assert_eq!(value, 7);
//! assert_eq!(items, vec![0, 1]);
//! ```
//!
//! ## Failure model
//! Unreachable nodes and impossible amounts are ordinary results. Inputs that
//! break a precondition (negative edge weight, mismatched item slices, zero
//! coin) are rejected up front with an [`AlgoError`].

pub mod blocks;
pub mod builder;
pub mod engine;
pub mod error;
pub mod graph;
pub mod problems;
pub mod traits;
pub mod utils;

pub use crate::builder::LayeredEngineBuilder;
pub use crate::engine::LayeredEngine;
pub use crate::error::{AlgoError, Result};
pub use crate::traits::{Edge, Graph, LayeredProblem, Traceback};
