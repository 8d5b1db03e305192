use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dashboard_core::{cumulative_cash_flow, derive_kpi_summary, Period, PeriodDataset};

fn gen_columns(n: usize) -> (Vec<f64>, Vec<f64>) {
    let revenue = (0..n).map(|i| 100_000.0 + (i as f64 * 0.01).sin() * 20_000.0).collect();
    let expenses = (0..n).map(|i| 70_000.0 + (i as f64 * 0.02).cos() * 10_000.0).collect();
    (revenue, expenses)
}

fn bench_cash_flow(c: &mut Criterion) {
    let mut group = c.benchmark_group("cumulative_cash_flow");
    for &n in &[1_000usize, 100_000usize] {
        let (revenue, expenses) = gen_columns(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(cumulative_cash_flow(&revenue, &expenses).unwrap()));
        });
    }
    group.finish();
}

fn bench_kpi_summary(c: &mut Criterion) {
    let ds = PeriodDataset::sample(Period::Year);
    let previous = ds.previous_total();
    c.bench_function("kpi_summary_year", |b| b.iter(|| black_box(derive_kpi_summary(&ds, previous))));
}

criterion_group!(benches, bench_cash_flow, bench_kpi_summary);
criterion_main!(benches);
