//! Criterion benchmarks for the closeness test.
//! Inputs cover the exact-equality short cut, the relative test, infinities
//! and NaN, for each comparison method.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use isclose::{isclose, Method, Tolerance};

const INPUTS: [(&str, f64, f64); 5] = [
    ("equal", 1.5, 1.5),
    ("close", 100.0, 100.00000009),
    ("distinct", 1.0, 2.0),
    ("infinite", f64::INFINITY, 1.0),
    ("nan", f64::NAN, 1.0),
];

fn bench_isclose(c: &mut Criterion) {
    let mut group = c.benchmark_group("isclose");
    for (name, a, b) in INPUTS {
        group.bench_with_input(BenchmarkId::new("weak", name), &(a, b), |bench, &(a, b)| {
            bench.iter(|| isclose(black_box(a), black_box(b), 1e-9, 0.0))
        });
    }
    group.finish();
}

fn bench_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("method");
    for method in [
        Method::Weak,
        Method::Strong,
        Method::Asymmetric,
        Method::Average,
    ] {
        let tol = Tolerance::default().with_method(method);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{method:?}")),
            &tol,
            |bench, tol| bench.iter(|| tol.check(black_box(100.0), black_box(100.00000009))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_isclose, bench_methods);
criterion_main!(benches);
