//! Benchmarks for NFP computation.
//!
//! Measures the convolution pipeline at several boundary complexities;
//! cost grows quadratically with the edge-pair count.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nfp_core::{compute_nfp, Polygon};

fn regular_polygon(n: usize, radius: f64) -> Polygon {
    let step = std::f64::consts::TAU / n as f64;
    Polygon::new(
        (0..n)
            .map(|i| {
                let angle = i as f64 * step;
                (radius * angle.cos(), radius * angle.sin())
            })
            .collect(),
    )
}

fn bench_convex_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("nfp_convex");
    group.sample_size(10);

    for &n in &[8, 16, 32] {
        let a = regular_polygon(n, 100.0);
        let b = regular_polygon(n, 10.0);

        group.bench_with_input(BenchmarkId::new("ngon", n), &(a, b), |bencher, (a, b)| {
            bencher.iter(|| {
                let nfp = compute_nfp(black_box(a), black_box(b));
                black_box(nfp)
            })
        });
    }
    group.finish();
}

fn bench_holed_stationary(c: &mut Criterion) {
    let mut group = c.benchmark_group("nfp_holed");
    group.sample_size(10);

    let a = Polygon::rectangle(200.0, 200.0)
        .with_hole(vec![(40.0, 40.0), (90.0, 40.0), (90.0, 90.0), (40.0, 90.0)])
        .with_hole(vec![
            (120.0, 120.0),
            (170.0, 120.0),
            (170.0, 170.0),
            (120.0, 170.0),
        ]);
    let b = regular_polygon(12, 10.0);

    group.bench_function("two_holes", |bencher| {
        bencher.iter(|| {
            let nfp = compute_nfp(black_box(&a), black_box(&b));
            black_box(nfp)
        })
    });
    group.finish();
}

criterion_group!(benches, bench_convex_pairs, bench_holed_stationary);
criterion_main!(benches);
