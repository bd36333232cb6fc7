//! MinHeap benchmarks
//!
//! ```bash
//! cargo bench --bench min_heap_benchmark
//! ```
//!
//! Compares repeated `insert` against O(n) bulk construction, and measures a
//! full drain, across a few input sizes.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use min_heap::MinHeap;
use std::hint::black_box;

struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }
}

fn random_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = Lcg::new(seed);
    (0..n).map(|_| rng.next() >> 33).collect()
}

const SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 18];

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &SIZES {
        let values = random_values(n, 42);

        group.bench_with_input(BenchmarkId::new("insert", n), &values, |b, values| {
            b.iter(|| {
                let mut heap = MinHeap::new();
                for &v in values {
                    heap.insert(v);
                }
                black_box(heap)
            })
        });

        group.bench_with_input(BenchmarkId::new("from_vec", n), &values, |b, values| {
            b.iter_batched(
                || values.clone(),
                |values| black_box(MinHeap::from_vec(values)),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("drain");
    for &n in &SIZES {
        let heap = MinHeap::from_vec(random_values(n, 7));

        group.bench_with_input(BenchmarkId::new("pop", n), &heap, |b, heap| {
            b.iter_batched(
                || heap.clone(),
                |mut heap| {
                    while let Ok(v) = heap.pop() {
                        black_box(v);
                    }
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_drain);
criterion_main!(benches);
