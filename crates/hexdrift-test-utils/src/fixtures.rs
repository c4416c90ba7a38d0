//! Generators with scripted or observable behavior.
//!
//! - [`ScriptedGenerator`]: content at a fixed set of world coordinates,
//!   empty everywhere else.
//! - [`SharedCounter`]: wraps another generator and counts generated cells
//!   through a handle that outlives the boxed generator.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use hexdrift_core::{Cell, HexCoord};
use hexdrift_store::CellGenerator;

/// Places content only where the script says.
#[derive(Clone, Debug, Default)]
pub struct ScriptedGenerator {
    food: HashMap<HexCoord, u8>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put content of `color` at world `coord`.
    pub fn with_food(mut self, coord: HexCoord, color: u8) -> Self {
        self.food.insert(coord, color);
        self
    }
}

impl CellGenerator for ScriptedGenerator {
    fn generate_one(&mut self, coord: HexCoord) -> Cell {
        match self.food.get(&coord) {
            Some(&color) => Cell::content(coord, color),
            None => Cell::empty(coord),
        }
    }
}

/// Counts cells produced by the wrapped generator.
pub struct SharedCounter<G> {
    inner: G,
    count: Arc<AtomicUsize>,
}

impl<G> SharedCounter<G> {
    /// Wrap `inner`; the returned handle reads the running count.
    pub fn new(inner: G) -> (Self, Arc<AtomicUsize>) {
        let count = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                count: Arc::clone(&count),
            },
            count,
        )
    }
}

impl<G: CellGenerator> CellGenerator for SharedCounter<G> {
    fn generate_one(&mut self, coord: HexCoord) -> Cell {
        self.count.fetch_add(1, Ordering::Relaxed);
        self.inner.generate_one(coord)
    }

    fn generate_batch(&mut self, coords: &[HexCoord]) -> Vec<Cell> {
        self.count.fetch_add(coords.len(), Ordering::Relaxed);
        self.inner.generate_batch(coords)
    }
}
