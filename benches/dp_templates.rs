use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use contest_kit::problems::{
    coin_change::coin_change,
    knapsack::{knapsack, knapsack_selection},
    lis::lis_length,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or(0, |p| p.memory())
}

fn random_items(rng: &mut StdRng, n: usize) -> (Vec<usize>, Vec<u64>) {
    (0..n)
        .map(|_| (rng.gen_range(1..100), rng.gen_range(0..1_000)))
        .unzip()
}

fn bench_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack");
    for &n in &[100usize, 500, 2_000] {
        let capacity = n * 25;
        group.bench_function(format!("value_{n}"), |b| {
            b.iter_batched(
                || random_items(&mut StdRng::seed_from_u64(42), n),
                |(w, v)| black_box(knapsack(capacity, &w, &v)),
                BatchSize::LargeInput,
            )
        });
        group.bench_function(format!("selection_{n}"), |b| {
            b.iter_batched(
                || random_items(&mut StdRng::seed_from_u64(42), n),
                |(w, v)| {
                    let before = rss_kib();
                    let out = knapsack_selection(capacity, &w, &v);
                    let after = rss_kib();
                    black_box(out);
                    // memory delta goes to stderr to keep criterion output clean
                    eprintln!(
                        "RSS KiB delta (knapsack_selection {n}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

fn bench_sequences(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequences");
    let mut rng = StdRng::seed_from_u64(7);
    let values: Vec<i64> = (0..1_000_000).map(|_| rng.gen_range(0..1_000_000)).collect();
    group.bench_function("lis_1m", |b| b.iter(|| black_box(lis_length(&values))));
    group.bench_function("coin_change_100k", |b| {
        b.iter(|| black_box(coin_change(&[7, 13, 29, 31, 97], 100_000)))
    });
    group.finish();
}

criterion_group!(benches, bench_knapsack, bench_sequences);
criterion_main!(benches);
