//! Breadth-first search: minimum hop count from a source.
//!
//! Nodes leave a FIFO frontier in non-decreasing distance order, so the first
//! distance assigned to a node is its shortest hop count and is never revised.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};

use super::UNREACHABLE_HOPS;
use crate::error::{AlgoError, Result};
use crate::traits::{Edge, Graph};

/// Hop distance from `source` to every node it reaches.
///
/// The source maps to 0 even when the graph does not mention it; unreachable
/// nodes are absent from the map.
pub fn bfs<G>(graph: &G, source: usize) -> HashMap<usize, usize>
where
    G: Graph + ?Sized,
{
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("bfs", source);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(source, 0);
    queue.push_back((source, 0));

    while let Some((node, d)) = queue.pop_front() {
        for edge in graph.edges(node) {
            if let Entry::Vacant(slot) = dist.entry(edge.target()) {
                slot.insert(d + 1);
                queue.push_back((edge.target(), d + 1));
            }
        }
    }
    dist
}

/// Dense variant of [`bfs`]: `out[v]` is the hop count to `v`, or
/// [`UNREACHABLE_HOPS`].
///
/// Fails with [`AlgoError::NodeOutOfRange`] if `source`, or the target of an
/// edge the search walks, is not below `node_count`.
pub fn bfs_dense<G>(graph: &G, source: usize, node_count: usize) -> Result<Vec<usize>>
where
    G: Graph + ?Sized,
{
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("bfs_dense", source, node_count);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    if source >= node_count {
        return Err(AlgoError::NodeOutOfRange {
            node: source,
            node_count,
        });
    }

    let mut dist = vec![UNREACHABLE_HOPS; node_count];
    let mut queue = VecDeque::new();
    dist[source] = 0;
    queue.push_back(source);

    while let Some(node) = queue.pop_front() {
        let next = dist[node] + 1;
        for edge in graph.edges(node) {
            let v = edge.target();
            let slot = dist.get_mut(v).ok_or(AlgoError::NodeOutOfRange {
                node: v,
                node_count,
            })?;
            if *slot == UNREACHABLE_HOPS {
                *slot = next;
                queue.push_back(v);
            }
        }
    }
    Ok(dist)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sample() -> HashMap<usize, Vec<usize>> {
        // 0 -> 1 -> 3, 0 -> 2 -> 3 -> 4, 5 isolated
        HashMap::from([(0, vec![1, 2]), (1, vec![3]), (2, vec![3]), (3, vec![4])])
    }

    #[test]
    fn layers_by_hop_count() {
        let dist = bfs(&sample(), 0);
        assert_eq!(dist.len(), 5);
        assert_eq!(dist[&0], 0);
        assert_eq!(dist[&1], 1);
        assert_eq!(dist[&2], 1);
        assert_eq!(dist[&3], 2);
        assert_eq!(dist[&4], 3);
        assert!(!dist.contains_key(&5));
    }

    #[test]
    fn absent_source_is_a_singleton() {
        let dist = bfs(&sample(), 42);
        assert_eq!(dist, HashMap::from([(42, 0)]));
    }

    #[test]
    fn cycles_do_not_revisit() {
        let g: Vec<Vec<usize>> = vec![vec![1], vec![2], vec![0]];
        let dist = bfs(&g, 1);
        assert_eq!(dist, HashMap::from([(1, 0), (2, 1), (0, 2)]));
    }

    #[test]
    fn weighted_edges_count_as_single_hops() {
        let g: Vec<Vec<(usize, i64)>> = vec![vec![(1, 100), (2, 1)], vec![], vec![(1, 1)]];
        assert_eq!(bfs(&g, 0)[&1], 1);
    }

    #[test]
    fn dense_matches_map_form() {
        let g = sample();
        let dense = bfs_dense(&g, 0, 6).unwrap();
        assert_eq!(dense, vec![0, 1, 1, 2, 3, UNREACHABLE_HOPS]);
    }

    #[test]
    fn dense_rejects_out_of_range_nodes() {
        let g = sample();
        assert_eq!(
            bfs_dense(&g, 6, 6),
            Err(AlgoError::NodeOutOfRange {
                node: 6,
                node_count: 6
            })
        );
        assert_eq!(
            bfs_dense(&g, 0, 4),
            Err(AlgoError::NodeOutOfRange {
                node: 4,
                node_count: 4
            })
        );
    }
}
