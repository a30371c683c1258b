#![cfg(feature = "heavy")]
use contest_kit::graph::{bfs_dense, dijkstra, UNREACHABLE, UNREACHABLE_HOPS};
use contest_kit::problems::knapsack::{knapsack, knapsack_selection};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_graph(rng: &mut StdRng, n: usize, m: usize) -> Vec<Vec<(usize, i64)>> {
    let mut adj = vec![Vec::new(); n];
    for _ in 0..m {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        adj[u].push((v, rng.gen_range(0..1_000)));
    }
    adj
}

#[test]
fn heavy_dijkstra_is_consistent_with_edges() {
    let mut rng = StdRng::seed_from_u64(123);
    let n = 200_000;
    let adj = random_graph(&mut rng, n, 1_000_000);
    let dist = dijkstra(&adj, 0, n).unwrap();
    // every edge out of a reached node is relaxed
    for (u, edges) in adj.iter().enumerate() {
        if dist[u] == UNREACHABLE {
            continue;
        }
        for &(v, w) in edges {
            assert!(dist[v] <= dist[u] + w, "edge {u} -> {v} not relaxed");
        }
    }
    let hops = bfs_dense(&adj, 0, n).unwrap();
    for v in 0..n {
        assert_eq!(hops[v] == UNREACHABLE_HOPS, dist[v] == UNREACHABLE);
    }
}

#[test]
fn heavy_knapsack_selection_matches_value() {
    let mut rng = StdRng::seed_from_u64(7);
    let n = 2_000;
    let weights: Vec<usize> = (0..n).map(|_| rng.gen_range(1..200)).collect();
    let values: Vec<u64> = (0..n).map(|_| rng.gen_range(0..1_000)).collect();
    let capacity = 20_000;
    let (value, chosen) = knapsack_selection(capacity, &weights, &values).unwrap();
    assert_eq!(value, knapsack(capacity, &weights, &values).unwrap());
    assert!(chosen.iter().map(|&i| weights[i]).sum::<usize>() <= capacity);
    assert_eq!(chosen.iter().map(|&i| values[i]).sum::<u64>(), value);
}
