//! Index production benchmarks.
//!
//! Measures the cost of turning items into Bloom filter bit indices for the
//! three main representations:
//!
//! - **dynamic**: hash at query time (k invocations per item, cyclic
//!   functions digest once and derive the rest)
//! - **caching**: pre-derived `(base, delta)` pairs, pure arithmetic at
//!   query time
//! - **simple**: one seed pair, the double-hashing kernel alone
//!
//! Run with `cargo bench --bench indices`.

use bloomhash::hash::{CyclicXx128, HashFunction, IterativeXx64};
use bloomhash::{CachingHasher, DynamicHasher, Hasher, IndexProducer, Shape, SimpleHasher};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_items(count: usize, length: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{:0width$}", i, width = length))
        .collect()
}

fn bench_dynamic_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("dynamic");
    let items = generate_items(100, 32);

    for k in &[3usize, 7, 14] {
        group.bench_with_input(BenchmarkId::new("cyclic", k), k, |b, &k| {
            let function = CyclicXx128::new();
            let shape = Shape::new(function.identity().clone(), k, 1 << 20).unwrap();
            let mut builder = DynamicHasher::builder(function);
            for item in &items {
                builder.with(item);
            }
            let hasher = builder.build();
            b.iter(|| {
                let producer = hasher.indices(&shape).unwrap();
                let mut sum = 0usize;
                producer.for_each_index(&mut |index| {
                    sum = sum.wrapping_add(index);
                    true
                });
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("iterative", k), k, |b, &k| {
            let function = IterativeXx64::new();
            let shape = Shape::new(function.identity().clone(), k, 1 << 20).unwrap();
            let mut builder = DynamicHasher::builder(function);
            for item in &items {
                builder.with(item);
            }
            let hasher = builder.build();
            b.iter(|| {
                let producer = hasher.indices(&shape).unwrap();
                let mut sum = 0usize;
                producer.for_each_index(&mut |index| {
                    sum = sum.wrapping_add(index);
                    true
                });
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_caching_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("caching");
    let items = generate_items(100, 32);

    for k in &[3usize, 7, 14] {
        group.bench_with_input(BenchmarkId::new("replay", k), k, |b, &k| {
            let function = CyclicXx128::new();
            let shape = Shape::new(function.identity().clone(), k, 1 << 20).unwrap();
            let mut builder = CachingHasher::builder(function).unwrap();
            for item in &items {
                builder.with(item);
            }
            let hasher = builder.build();
            b.iter(|| {
                let producer = hasher.indices(&shape).unwrap();
                let mut sum = 0usize;
                producer.for_each_index(&mut |index| {
                    sum = sum.wrapping_add(index);
                    true
                });
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_simple_kernel(c: &mut Criterion) {
    let mut group = c.benchmark_group("simple");
    let function = CyclicXx128::new();

    for k in &[3usize, 7, 14, 20] {
        group.bench_with_input(BenchmarkId::new("kernel", k), k, |b, &k| {
            let shape = Shape::new(function.identity().clone(), k, 1 << 20).unwrap();
            let hasher = SimpleHasher::new(
                function.identity().clone(),
                0x0123_4567_89ab_cdef,
                0xfedc_ba98_7654_3210,
            );
            b.iter(|| {
                let producer = hasher.indices(&shape).unwrap();
                let mut sum = 0usize;
                producer.for_each_index(&mut |index| {
                    sum = sum.wrapping_add(index);
                    true
                });
                black_box(sum)
            });
        });
    }

    group.finish();
}

fn bench_early_termination(c: &mut Criterion) {
    let mut group = c.benchmark_group("early_termination");
    let items = generate_items(100, 32);

    let function = CyclicXx128::new();
    let shape = Shape::new(function.identity().clone(), 14, 1 << 20).unwrap();
    let mut builder = DynamicHasher::builder(function);
    for item in &items {
        builder.with(item);
    }
    let hasher = builder.build();

    // Simulates a negative `contains` query that hits a zero bit immediately.
    group.bench_function("stop_after_first", |b| {
        b.iter(|| {
            let producer = hasher.indices(&shape).unwrap();
            let completed = producer.for_each_index(&mut |index| {
                black_box(index);
                false
            });
            black_box(completed)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_dynamic_hashing,
    bench_caching_replay,
    bench_simple_kernel,
    bench_early_termination,
);
criterion_main!(benches);
