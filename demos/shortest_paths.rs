//! Example: hop distances, visit order and weighted distances on one graph.
//!
//! Run with:
//! `cargo run --example shortest_paths`

use std::collections::HashMap;

use contest_kit::graph::{bfs, dfs, dijkstra, UNREACHABLE};

fn main() {
    // sparse form: node -> [(neighbour, weight)]
    let graph: HashMap<usize, Vec<(usize, i64)>> = HashMap::from([
        (0, vec![(1, 7), (2, 9), (5, 14)]),
        (1, vec![(2, 10), (3, 15)]),
        (2, vec![(3, 11), (5, 2)]),
        (3, vec![(4, 6)]),
        (5, vec![(4, 9)]),
    ]);

    let mut hops: Vec<_> = bfs(&graph, 0).into_iter().collect();
    hops.sort_unstable();
    println!("BFS hops: {hops:?}");
    println!("DFS order: {:?}", dfs(&graph, 0));

    match dijkstra(&graph, 0, 7) {
        Ok(dist) => {
            for (v, d) in dist.iter().enumerate() {
                if *d == UNREACHABLE {
                    println!("  {v}: unreachable");
                } else {
                    println!("  {v}: {d}");
                }
            }
        }
        Err(err) => eprintln!("dijkstra rejected the graph: {err}"),
    }
}
