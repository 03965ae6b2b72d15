//! Benchmarks for the concurrent skip set's three operations.
//!
//! The benchmark harness is an external collaborator, not part of the
//! crate's core (see the crate docs); this file exists only to validate
//! the expected O(log n) shape and is not exercised by `cargo test`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use skipset::ConcurrentSkipSet;

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");

    for size in [100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let set = ConcurrentSkipSet::new();
                for k in 0..size {
                    set.insert(k);
                }
            });
        });
    }

    group.finish();
}

fn bench_contains_hit(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_hit");

    for size in [100, 1_000, 10_000].iter() {
        let set = ConcurrentSkipSet::new();
        for k in 0..*size {
            set.insert(k);
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let key = size / 2;
            b.iter(|| black_box(set.contains(key)));
        });
    }

    group.finish();
}

fn bench_contains_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("contains_miss");

    for size in [100, 1_000, 10_000].iter() {
        let set = ConcurrentSkipSet::new();
        for k in 0..*size {
            set.insert(k);
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| black_box(set.contains(size + 1)));
        });
    }

    group.finish();
}

fn bench_mixed_concurrent(c: &mut Criterion) {
    use std::sync::Arc;
    use std::thread;

    c.bench_function("mixed_4_threads", |b| {
        b.iter(|| {
            let set = Arc::new(ConcurrentSkipSet::new());
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let set = Arc::clone(&set);
                    thread::spawn(move || {
                        for k in (t * 250)..((t + 1) * 250) {
                            set.insert(k);
                            black_box(set.contains(k));
                        }
                    })
                })
                .collect();
            for h in handles {
                h.join().unwrap();
            }
        });
    });
}

criterion_group!(
    benches,
    bench_insert,
    bench_contains_hit,
    bench_contains_miss,
    bench_mixed_concurrent
);
criterion_main!(benches);
