use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stagepipe::*;
use tokio::runtime::Runtime;

fn bench_basic_operations(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    let mut group = c.benchmark_group("basic_operations");

    for size in [1_000i64, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("map_filter", size), size, |b, &size| {
            b.to_async(&rt).iter(|| async move {
                let result = iota(0, size, 1)
                    .map(|x| black_box(x * 2))
                    .filter(|&x| black_box(x % 4 == 0))
                    .collect_vec()
                    .await;
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("reduce", size), size, |b, &size| {
            b.to_async(&rt).iter(|| async move {
                let result = iota(0, size, 1).reduce(|a, b| black_box(a + b)).pop().await;
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("chunk", size), size, |b, &size| {
            b.to_async(&rt).iter(|| async move {
                let mut groups = iota(0, size, 1).chunk(100);
                let mut count = 0;
                while let Some(group) = groups.recv().await {
                    count += group.collect_vec().await.len();
                }
                black_box(count)
            });
        });
    }

    group.finish();
}

fn bench_merge_operations(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();

    let mut group = c.benchmark_group("merge_operations");

    for size in [1_000i64, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("zip3", size), size, |b, &size| {
            b.to_async(&rt).iter(|| async move {
                let result = zip(vec![iota(0, size, 1), iota(0, size, 1), iota(0, size, 1)])
                    .collect_vec()
                    .await;
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("round_robin3", size), size, |b, &size| {
            b.to_async(&rt).iter(|| async move {
                let result = round_robin(vec![
                    iota(0, size, 1),
                    iota(0, size / 2, 1),
                    iota(0, size / 4, 1),
                ])
                .collect_vec()
                .await;
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("prefetch_depth_64", size), size, |b, &size| {
            b.to_async(&rt).iter(|| async move {
                let result = iota(0, size, 1).prefetch(64).map(|x| x + 1).collect_vec().await;
                black_box(result)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_basic_operations, bench_merge_operations);
criterion_main!(benches);
