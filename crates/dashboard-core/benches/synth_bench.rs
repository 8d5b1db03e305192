use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dashboard_core::{synthesize_monthly_series, RngSource};

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("monthly_walk");
    for &months in &[24u32, 10_000u32] {
        group.bench_with_input(BenchmarkId::from_parameter(months), &months, |b, &m| {
            b.iter_batched(
                || RngSource::seeded(11),
                |mut rng| black_box(synthesize_monthly_series(1_200_000.0, 150_000.0, m, &mut rng).unwrap()),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_walk);
criterion_main!(benches);
