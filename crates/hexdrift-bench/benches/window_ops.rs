//! Criterion micro-benchmarks for the window shift.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hexdrift_core::{Cell, Direction, HexCoord};
use hexdrift_space::{exposed_edge, WindowManager};

fn empty_source(coords: &[HexCoord]) -> Vec<Cell> {
    coords.iter().copied().map(Cell::empty).collect()
}

/// Benchmark: one full revolution of shifts (6 moves) at several radii.
fn bench_shift_revolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift_revolution");
    for radius in [4u32, 16, 64] {
        let mut window = WindowManager::new(radius).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, _| {
            b.iter(|| {
                for d in Direction::ALL {
                    let fetched = window.shift(d, &mut empty_source).unwrap();
                    black_box(fetched);
                }
            });
        });
    }
    group.finish();
}

/// Benchmark: build a window, including the six shift plans.
fn bench_window_new(c: &mut Criterion) {
    c.bench_function("window_new_r32", |b| {
        b.iter(|| black_box(WindowManager::new(black_box(32)).unwrap()));
    });
}

/// Benchmark: binary-search lookup of every cell in a radius-32 window.
fn bench_block_lookup(c: &mut Criterion) {
    let window = WindowManager::new(32).unwrap();
    let coords: Vec<HexCoord> = window.blocks().iter().map(Cell::coord).collect();
    c.bench_function("block_lookup_r32", |b| {
        b.iter(|| {
            for &coord in &coords {
                black_box(window.block(coord).unwrap());
            }
        });
    });
}

/// Benchmark: enumerate the exposed edge for every direction.
fn bench_exposed_edge(c: &mut Criterion) {
    c.bench_function("exposed_edge_r64", |b| {
        b.iter(|| {
            for d in Direction::ALL {
                black_box(exposed_edge(64, d));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_shift_revolution,
    bench_window_new,
    bench_block_lookup,
    bench_exposed_edge
);
criterion_main!(benches);
