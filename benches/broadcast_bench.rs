//! Benchmarks for the broadcast engine.
//!
//! Measures traversal overhead for flat and deeply nested values so that
//! kernel cost can be separated from the recursion itself.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numtree::{Engine, Value};

/// A flat container of `n` scalars.
fn flat(n: usize) -> Value {
    (0..n).map(|i| i as f64 * 0.5).collect()
}

/// A balanced tree with `fanout` children per level and `depth` levels.
fn nested(fanout: usize, depth: usize) -> Value {
    if depth == 0 {
        return Value::Scalar(1.25);
    }
    Value::Container((0..fanout).map(|_| nested(fanout, depth - 1)).collect())
}

/// A single scalar wrapped in `depth` containers.
fn chain(depth: usize) -> Value {
    let mut v = Value::Scalar(3.0);
    for _ in 0..depth {
        v = Value::Container(vec![v]);
    }
    v
}

// =============================================================================
// map1
// =============================================================================

fn bench_map1(c: &mut Criterion) {
    let mut group = c.benchmark_group("map1");
    let engine = Engine::default();

    for &n in &[16, 256, 4096] {
        let v = flat(n);
        group.bench_with_input(BenchmarkId::new("flat", n), &v, |b, v| {
            b.iter(|| engine.map1(black_box(v), |x| Ok(x * 2.0)).unwrap());
        });
    }

    let tree = nested(4, 6);
    group.bench_function("nested_4x6", |b| {
        b.iter(|| engine.map1(black_box(&tree), |x| Ok(x + 1.0)).unwrap());
    });

    let deep = chain(512);
    group.bench_function("chain_512", |b| {
        b.iter(|| engine.map1(black_box(&deep), |x| Ok(-x)).unwrap());
    });

    group.finish();
}

// =============================================================================
// map2
// =============================================================================

fn bench_map2(c: &mut Criterion) {
    let mut group = c.benchmark_group("map2");
    let engine = Engine::default();

    for &n in &[16, 256, 4096] {
        let v = flat(n);
        group.bench_with_input(BenchmarkId::new("pairwise", n), &v, |b, v| {
            b.iter(|| engine.map2(black_box(v), black_box(v), |x, y| Ok(x + y)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("scalar_broadcast", n), &v, |b, v| {
            let s = Value::Scalar(3.0);
            b.iter(|| engine.map2(black_box(&s), black_box(v), |x, y| Ok(x * y)).unwrap());
        });
    }

    let tree = nested(4, 6);
    group.bench_function("nested_4x6", |b| {
        b.iter(|| engine.map2(black_box(&tree), black_box(&tree), |x, y| Ok(x - y)).unwrap());
    });

    group.finish();
}

// =============================================================================
// reduce
// =============================================================================

fn bench_reduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    let engine = Engine::default();

    let v = flat(4096);
    group.bench_function("flat_4096", |b| {
        b.iter(|| engine.reduce(black_box(&v), 0.0, |acc, x| Ok(acc + x)).unwrap());
    });

    let tree = nested(4, 6);
    group.bench_function("nested_4x6", |b| {
        b.iter(|| engine.reduce(black_box(&tree), 0.0, |acc, x| Ok(acc + x)).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_map1, bench_map2, bench_reduce);
criterion_main!(benches);
