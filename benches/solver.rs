//! Benchmarks for the draughtboard solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use draughtboard::{Catalog, Engine};

/// Benchmark the complete search, resetting the engine each iteration.
fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    group.sample_size(10);
    group.bench_function("full_search", |b| {
        let mut engine = Engine::new(Catalog::standard().unwrap());
        b.iter(|| {
            engine.reset();
            black_box(engine.run_to_completion(10_000_000))
        })
    });
    group.finish();
}

/// Benchmark expanding the twelve base shapes into their orientations.
fn bench_catalog(c: &mut Criterion) {
    c.bench_function("catalog_standard", |b| b.iter(|| black_box(Catalog::standard())));
}

/// Benchmark a bounded batch of steps from the initial state.
fn bench_step_batch(c: &mut Criterion) {
    c.bench_function("step_1000", |b| {
        let mut engine = Engine::new(Catalog::standard().unwrap());
        b.iter(|| {
            engine.reset();
            for _ in 0..1000 {
                black_box(engine.step());
            }
        })
    });
}

criterion_group!(benches, bench_solve, bench_catalog, bench_step_batch);
criterion_main!(benches);
