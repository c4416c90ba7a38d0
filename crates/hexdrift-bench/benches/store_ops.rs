//! Criterion micro-benchmarks for generation and the cell cache.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use hexdrift_core::{Direction, HexCoord};
use hexdrift_store::{
    CellGenerator, CellStore, CoordinateManager, RandomCellGenerator, TimeReferenceManager,
};

fn edge(len: i32) -> Vec<HexCoord> {
    (0..len).map(|i| HexCoord::new(i, 0)).collect()
}

fn store(seed: u64) -> CellStore {
    CellStore::new(
        CoordinateManager::new(1 << 20, 1 << 20).unwrap(),
        TimeReferenceManager::new(1 << 20, 64).unwrap(),
        Box::new(RandomCellGenerator::new(12, 64, seed).unwrap()),
    )
}

/// Benchmark: exact-count batch generation for a radius-64 edge (127 cells).
fn bench_generate_batch(c: &mut Criterion) {
    let mut generator = RandomCellGenerator::new(12, 64, 7).unwrap();
    let coords = edge(127);
    c.bench_function("generate_batch_127", |b| {
        b.iter(|| black_box(generator.generate_batch(&coords)));
    });
}

/// Benchmark: resolve a fresh edge every iteration while the cache ages,
/// so generation, insertion and eviction all stay on the path.
fn bench_resolve_moving_edge(c: &mut Criterion) {
    c.bench_function("resolve_moving_edge_127", |b| {
        b.iter_batched_ref(
            || (store(3), 0i32),
            |(s, row)| {
                for _ in 0..64 {
                    *row += 1;
                    s.advance(Direction::East.offset()).unwrap();
                    let coords: Vec<HexCoord> =
                        (0..127).map(|k| HexCoord::new(*row, k)).collect();
                    black_box(s.resolve(&coords));
                    black_box(s.evict_expired(|_| false));
                }
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: resolve an edge that is already cached.
fn bench_resolve_hits(c: &mut Criterion) {
    let mut s = store(5);
    let coords = edge(127);
    s.resolve(&coords);
    c.bench_function("resolve_hits_127", |b| {
        b.iter(|| black_box(s.resolve(&coords)));
    });
}

criterion_group!(
    benches,
    bench_generate_batch,
    bench_resolve_moving_edge,
    bench_resolve_hits
);
criterion_main!(benches);
