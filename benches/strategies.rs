use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

use sumbench::parallel::CancelToken;
use sumbench::sum::{Strategy, SumParams};

/// Smaller than the CLI default so each sample stays short
const BENCH_LIMIT: i64 = 10_000_000;

fn bench_strategies(c: &mut Criterion) {
    let params = SumParams::new(1, BENCH_LIMIT);
    let cancel = CancelToken::new();

    let mut group = c.benchmark_group("summation");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(10);

    for strategy in Strategy::lineup(&[1, 2, 4, 8, 16, 32]) {
        group.bench_with_input(
            BenchmarkId::new("strategy", strategy.label()),
            &strategy,
            |b, strategy| {
                b.iter(|| {
                    strategy
                        .calculate(black_box(params), &cancel)
                        .expect("benchmark run should not be cancelled")
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
