//! Depth-first search with an explicit stack.
//!
//! Sibling order: the first-listed neighbour is explored first. Neighbours are
//! pushed in reverse listing order so the stack pops them in listing order,
//! which makes the visit sequence equal to the recursive pre-order.

use std::collections::{BTreeSet, HashSet};

use crate::traits::{Edge, Graph};

/// Nodes reachable from `source`, in the order they are first visited.
///
/// `source` always comes first, even when the graph does not mention it.
pub fn dfs<G>(graph: &G, source: usize) -> Vec<usize>
where
    G: Graph + ?Sized,
{
    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("dfs", source);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut visited = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![source];

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node);
        stack.extend(
            graph
                .edges(node)
                .iter()
                .rev()
                .map(Edge::target)
                .filter(|v| !visited.contains(v)),
        );
    }
    order
}

/// Set of nodes reachable from `source`, `source` included.
pub fn reachable<G>(graph: &G, source: usize) -> BTreeSet<usize>
where
    G: Graph + ?Sized,
{
    dfs(graph, source).into_iter().collect()
}
