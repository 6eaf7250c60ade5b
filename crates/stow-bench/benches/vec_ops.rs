//! Criterion micro-benchmarks for container push, read and copy.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use stow_bench::{arena_for_pushes, bench_values};
use stow_vec::StowVec;

const N: usize = 10_000;

/// Benchmark: push 10K values onto a heap-backed container.
fn bench_push_heap_10k(c: &mut Criterion) {
    let values = bench_values(N, 42);
    c.bench_function("push_heap_10k", |b| {
        b.iter(|| {
            let mut v = StowVec::new();
            for &x in &values {
                v.push(x).unwrap();
            }
            black_box(v.len());
        });
    });
}

/// Benchmark: push 10K values into a container over a fresh, exactly sized arena.
fn bench_push_arena_10k(c: &mut Criterion) {
    let values = bench_values(N, 42);
    c.bench_function("push_arena_10k", |b| {
        b.iter(|| {
            let arena = arena_for_pushes::<u64>(N);
            let mut v: StowVec<u64> = StowVec::new_in(&arena);
            for &x in &values {
                v.push(x).unwrap();
            }
            black_box(v.len());
        });
    });
}

/// Benchmark: bounds-checked reads across 10K elements.
fn bench_at_10k(c: &mut Criterion) {
    let mut v = StowVec::new();
    v.try_extend(bench_values(N, 42)).unwrap();
    c.bench_function("at_10k", |b| {
        b.iter(|| {
            let mut sum = 0u64;
            for i in 0..v.len() {
                sum = sum.wrapping_add(*v.at(i).unwrap());
            }
            black_box(sum);
        });
    });
}

/// Benchmark: deep copy of a 10K-element heap container.
fn bench_try_clone_10k(c: &mut Criterion) {
    let mut v = StowVec::new();
    v.try_extend(bench_values(N, 42)).unwrap();
    c.bench_function("try_clone_10k", |b| {
        b.iter(|| {
            let copy = v.try_clone().unwrap();
            black_box(copy.len());
        });
    });
}

criterion_group!(
    benches,
    bench_push_heap_10k,
    bench_push_arena_10k,
    bench_at_10k,
    bench_try_clone_10k
);
criterion_main!(benches);
