use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use midcircle::{Circle, Point};

fn bench_perimeter(c: &mut Criterion) {
    let mut g = c.benchmark_group("perimeter");
    for radius in [8i64, 64, 512, 4096] {
        g.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &r| {
            let circle = Circle::new(Point::new(0, 0), r);
            b.iter(|| black_box(circle).rasterize());
        });
    }
    g.finish();
}

fn bench_filled(c: &mut Criterion) {
    let mut g = c.benchmark_group("filled");
    for radius in [8i64, 32, 128] {
        g.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, &r| {
            let circle = Circle::new(Point::new(0, 0), r).filled(true);
            b.iter(|| black_box(circle).rasterize());
        });
    }
    g.finish();
}

criterion_group!(benches, bench_perimeter, bench_filled);
criterion_main!(benches);
