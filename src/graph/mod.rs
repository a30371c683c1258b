//! Graph searches over caller-supplied adjacency structures.
//!
//! - [`bfs`]      : hop distances from a source (map and dense forms).
//! - [`dfs`]      : first-visit order from a source, explicit stack.
//! - [`dijkstra`] : minimum total weight from a source, non-negative weights.
//!
//! None of these build, own or mutate the graph; see [`Graph`](crate::traits::Graph)
//! for the accepted shapes and [`AdjacencyList`] for a dense builder.

pub mod adjacency;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use adjacency::AdjacencyList;
pub use bfs::{bfs, bfs_dense};
pub use dfs::{dfs, reachable};
pub use dijkstra::{dijkstra, dijkstra_all_sources};

/// Distance reported by [`dijkstra`] for nodes the source cannot reach.
pub const UNREACHABLE: i64 = i64::MAX;

/// Hop count reported by [`bfs_dense`] for nodes the source cannot reach.
pub const UNREACHABLE_HOPS: usize = usize::MAX;
