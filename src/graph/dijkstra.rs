//! Dijkstra's single-source shortest paths with a binary heap.
//!
//! The heap uses lazy deletion: a relaxed node is pushed again with its new
//! distance and the outdated entry is skipped when it surfaces. Once a node is
//! popped with its recorded distance, that distance is final. This only holds
//! for non-negative weights, which are checked up front.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::UNREACHABLE;
use crate::error::{AlgoError, Result};
use crate::traits::Graph;

#[derive(Copy, Clone, Eq, PartialEq)]
struct State {
    cost: i64,
    node: usize,
}

// Min-heap on cost, ties broken by node id.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Minimum total weight from `source` to every node in `0..node_count`.
///
/// `dist[source] == 0`; nodes the source cannot reach hold [`UNREACHABLE`].
///
/// # Errors
/// - [`AlgoError::NodeOutOfRange`] if `source` or any edge target of a node in
///   `0..node_count` is not below `node_count`.
/// - [`AlgoError::NegativeWeight`] for any negative edge weight.
///
/// Both are checked before the search starts.
pub fn dijkstra<G>(graph: &G, source: usize, node_count: usize) -> Result<Vec<i64>>
where
    G: Graph<Edge = (usize, i64)> + ?Sized,
{
    if source >= node_count {
        return Err(AlgoError::NodeOutOfRange {
            node: source,
            node_count,
        });
    }
    validate(graph, node_count)?;
    Ok(search(graph, source, node_count))
}

/// One [`dijkstra`] row per source: `out[s][v]` is the distance from `s` to `v`.
#[cfg(not(feature = "parallel"))]
pub fn dijkstra_all_sources<G>(graph: &G, node_count: usize) -> Result<Vec<Vec<i64>>>
where
    G: Graph<Edge = (usize, i64)> + ?Sized,
{
    validate(graph, node_count)?;
    Ok((0..node_count)
        .map(|source| search(graph, source, node_count))
        .collect())
}

/// One [`dijkstra`] row per source: `out[s][v]` is the distance from `s` to `v`.
///
/// Rows are independent searches and are computed on the rayon pool.
#[cfg(feature = "parallel")]
pub fn dijkstra_all_sources<G>(graph: &G, node_count: usize) -> Result<Vec<Vec<i64>>>
where
    G: Graph<Edge = (usize, i64)> + Sync + ?Sized,
{
    validate(graph, node_count)?;
    Ok((0..node_count)
        .into_par_iter()
        .map(|source| search(graph, source, node_count))
        .collect())
}

fn validate<G>(graph: &G, node_count: usize) -> Result<()>
where
    G: Graph<Edge = (usize, i64)> + ?Sized,
{
    for from in 0..node_count {
        for &(to, weight) in graph.edges(from) {
            if to >= node_count {
                return Err(AlgoError::NodeOutOfRange {
                    node: to,
                    node_count,
                });
            }
            if weight < 0 {
                return Err(AlgoError::NegativeWeight { from, to, weight });
            }
        }
    }
    Ok(())
}

fn search<G>(graph: &G, source: usize, node_count: usize) -> Vec<i64>
where
    G: Graph<Edge = (usize, i64)> + ?Sized,
{
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("dijkstra", source, node_count);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut dist = vec![UNREACHABLE; node_count];
    let mut heap = BinaryHeap::new();

    dist[source] = 0;
    heap.push(State {
        cost: 0,
        node: source,
    });

    while let Some(State { cost, node }) = heap.pop() {
        if cost > dist[node] {
            continue;
        }

        for &(next, weight) in graph.edges(node) {
            let next_cost = cost.saturating_add(weight);
            if next_cost < dist[next] {
                dist[next] = next_cost;
                heap.push(State {
                    cost: next_cost,
                    node: next,
                });
            }
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AdjacencyList;
    use std::collections::HashMap;

    fn sample() -> Vec<Vec<(usize, i64)>> {
        vec![
            vec![(1, 4), (2, 1)],
            vec![(3, 1)],
            vec![(1, 2), (3, 5)],
            vec![],
            vec![(0, 1)],
        ]
    }

    #[test]
    fn relaxes_through_cheaper_detour() {
        let dist = dijkstra(&sample(), 0, 5).unwrap();
        assert_eq!(dist, vec![0, 3, 1, 4, UNREACHABLE]);
    }

    #[test]
    fn zero_weight_edges_are_allowed() {
        let mut g = AdjacencyList::<(usize, i64)>::new(3);
        g.add_edge(0, (1, 0));
        g.add_edge(1, (2, 0));
        assert_eq!(dijkstra(&g, 0, 3).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn sparse_map_with_missing_rows() {
        let g: HashMap<usize, Vec<(usize, i64)>> = HashMap::from([(0, vec![(2, 7)])]);
        assert_eq!(dijkstra(&g, 0, 3).unwrap(), vec![0, UNREACHABLE, 7]);
    }

    #[test]
    fn large_weights_saturate_instead_of_wrapping() {
        let g: Vec<Vec<(usize, i64)>> = vec![vec![(1, i64::MAX - 1)], vec![(2, 10)], vec![]];
        let dist = dijkstra(&g, 0, 3).unwrap();
        assert_eq!(dist[1], i64::MAX - 1);
        assert_eq!(dist[2], UNREACHABLE);
    }

    #[test]
    fn negative_weight_fails_fast() {
        let g: Vec<Vec<(usize, i64)>> = vec![vec![(1, 2)], vec![(0, -1)]];
        assert_eq!(
            dijkstra(&g, 0, 2),
            Err(AlgoError::NegativeWeight {
                from: 1,
                to: 0,
                weight: -1
            })
        );
    }

    #[test]
    fn out_of_range_source_and_target() {
        assert_eq!(
            dijkstra(&sample(), 5, 5),
            Err(AlgoError::NodeOutOfRange {
                node: 5,
                node_count: 5
            })
        );
        assert_eq!(
            dijkstra(&sample(), 0, 3),
            Err(AlgoError::NodeOutOfRange {
                node: 3,
                node_count: 3
            })
        );
    }

    #[test]
    fn all_sources_rows_match_single_runs() {
        let g = sample();
        let rows = dijkstra_all_sources(&g, 5).unwrap();
        for (s, row) in rows.iter().enumerate() {
            assert_eq!(row, &dijkstra(&g, s, 5).unwrap());
        }
        assert_eq!(rows[4], vec![1, 4, 2, 5, 0]);
    }

    #[test]
    fn idempotent_across_calls() {
        let g = sample();
        assert_eq!(dijkstra(&g, 2, 5), dijkstra(&g, 2, 5));
    }
}
