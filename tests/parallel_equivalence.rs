#![cfg(feature = "parallel")]

use contest_kit::graph::{dijkstra, dijkstra_all_sources};
use proptest::prelude::*;

proptest! {
    #[test]
    fn all_sources_rows_equal_single_runs(
        n in 1usize..12,
        edges in prop::collection::vec((0usize..12, 0usize..12, 0i64..50), 0..60),
    ) {
        let mut adj = vec![Vec::new(); n];
        for (u, v, w) in edges {
            adj[u % n].push((v % n, w));
        }
        let rows = dijkstra_all_sources(&adj, n).unwrap();
        prop_assert_eq!(rows.len(), n);
        for (s, row) in rows.iter().enumerate() {
            prop_assert_eq!(row, &dijkstra(&adj, s, n).unwrap());
        }
    }
}
