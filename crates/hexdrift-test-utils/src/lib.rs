//! Test fixtures for Hexdrift development.
//!
//! Deterministic [`CellGenerator`]s for engine scenarios and a
//! [`RecordingSource`] that logs what the window asks for.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use hexdrift_core::{BlockSource, Cell, HexCoord};
use hexdrift_store::CellGenerator;

pub use fixtures::{ScriptedGenerator, SharedCounter};

/// Fills every cell with content of one fixed color ("always food").
#[derive(Clone, Debug, Default)]
pub struct ContentGenerator {
    pub color: u8,
}

impl ContentGenerator {
    pub fn new(color: u8) -> Self {
        Self { color }
    }
}

impl CellGenerator for ContentGenerator {
    fn generate_one(&mut self, coord: HexCoord) -> Cell {
        Cell::content(coord, self.color)
    }
}

/// Leaves every cell empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyGenerator;

impl CellGenerator for EmptyGenerator {
    fn generate_one(&mut self, coord: HexCoord) -> Cell {
        Cell::empty(coord)
    }
}

/// Wraps a [`BlockSource`] and records every request.
pub struct RecordingSource<S> {
    inner: S,
    requested: Vec<HexCoord>,
    calls: usize,
}

impl<S> RecordingSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            requested: Vec::new(),
            calls: 0,
        }
    }

    /// Every coordinate requested so far, in request order.
    pub fn requested(&self) -> &[HexCoord] {
        &self.requested
    }

    /// Number of fetch calls.
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Forget recorded requests.
    pub fn clear(&mut self) {
        self.requested.clear();
        self.calls = 0;
    }
}

impl<S: BlockSource> BlockSource for RecordingSource<S> {
    fn fetch(&mut self, coords: &[HexCoord]) -> Vec<Cell> {
        self.calls += 1;
        self.requested.extend_from_slice(coords);
        self.inner.fetch(coords)
    }
}
