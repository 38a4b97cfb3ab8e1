//! Benchmarks for the core list operations.
//!
//! Run with: cargo bench
//!
//! The erase benchmark is deliberately O(n): the predecessor scan is part
//! of the contract, and the numbers should show it scaling with length.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use forward_list::List;

const N: usize = 1_000;

// ============================================================================
// Front operations
// ============================================================================

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("front_ops");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("push_front", |b| {
        b.iter(|| {
            let mut list: List<u64> = List::new();
            for i in 0..N as u64 {
                list.push_front(black_box(i));
            }
            list
        })
    });

    group.bench_function("push_pop_cycle", |b| {
        b.iter(|| {
            let mut list: List<u64> = List::new();
            for i in 0..N as u64 {
                list.push_front(i);
            }
            while let Ok(v) = list.pop_front() {
                black_box(v);
            }
        })
    });

    group.finish();
}

// ============================================================================
// Traversal and erase
// ============================================================================

fn bench_traverse(c: &mut Criterion) {
    let list: List<u64> = (0..N as u64).collect();

    c.bench_function("iter_sum", |b| {
        b.iter(|| {
            let sum: u64 = list.iter().sum();
            black_box(sum)
        })
    });
}

fn bench_erase_back(c: &mut Criterion) {
    // Erasing near the back forces the full predecessor scan
    c.bench_function("erase_back", |b| {
        b.iter_batched(
            || {
                let mut list: List<u64> = List::new();
                let mut last = list.push_front(0);
                for i in 1..N as u64 {
                    last = list.insert_after(last, i);
                }
                (list, last)
            },
            |(mut list, last)| {
                list.erase(last).unwrap();
                list
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_push_pop, bench_traverse, bench_erase_back);
criterion_main!(benches);
