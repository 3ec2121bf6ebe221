use analytics_core::downsample::lttb;
use analytics_core::geometry::Point;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn gen_points(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| Point::new(i as f64 * 0.25, 100.0 + (i as f64 * 0.01).sin() * 40.0))
        .collect()
}

fn bench_lttb(c: &mut Criterion) {
    let mut group = c.benchmark_group("lttb");
    for &n in &[5_000usize, 50_000usize] {
        let data = gen_points(n);
        for &columns in &[320usize, 1_280usize] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}_w{columns}")), &columns, |b, &w| {
                b.iter_batched(
                    || data.clone(),
                    |d| { let _ = black_box(lttb(&d, w)); },
                    BatchSize::SmallInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_lttb);
criterion_main!(benches);
