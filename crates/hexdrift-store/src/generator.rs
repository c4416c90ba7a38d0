//! Procedural population of newly exposed cells.

use hexdrift_core::{Cell, HexCoord};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::StoreError;

/// Produces the content of cells the world has never materialized.
///
/// Coordinates are world coordinates. Returned cells carry the requested
/// coordinate.
pub trait CellGenerator: Send {
    /// Generate one cell.
    fn generate_one(&mut self, coord: HexCoord) -> Cell;

    /// Generate one cell per coordinate, in order.
    fn generate_batch(&mut self, coords: &[HexCoord]) -> Vec<Cell> {
        coords.iter().map(|&c| self.generate_one(c)).collect()
    }
}

/// Seeded random generator with a 1-in-`frequency` occupancy rate.
///
/// Batches are exact rather than independent per cell: a batch of `n`
/// coordinates receives exactly `n / frequency` distinct occupied cells,
/// and none at all when `n < frequency`.
#[derive(Clone, Debug)]
pub struct RandomCellGenerator {
    frequency: u32,
    color_range: u32,
    rng: ChaCha8Rng,
}

impl RandomCellGenerator {
    /// Create a generator seeded with `seed`.
    pub fn new(frequency: u32, color_range: u32, seed: u64) -> Result<Self, StoreError> {
        if frequency < 2 {
            return Err(StoreError::InvalidFrequency { value: frequency });
        }
        if !(1..=256).contains(&color_range) {
            return Err(StoreError::InvalidColorRange { value: color_range });
        }
        Ok(Self {
            frequency,
            color_range,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Occupancy is 1 in `frequency`.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Content colors are drawn from `0..color_range`.
    pub fn color_range(&self) -> u32 {
        self.color_range
    }

    fn draw_color(&mut self) -> u8 {
        // color_range <= 256, so the draw fits.
        self.rng.random_range(0..self.color_range) as u8
    }
}

impl CellGenerator for RandomCellGenerator {
    fn generate_one(&mut self, coord: HexCoord) -> Cell {
        if self.rng.random_range(0..self.frequency) == 0 {
            let color = self.draw_color();
            Cell::content(coord, color)
        } else {
            Cell::empty(coord)
        }
    }

    fn generate_batch(&mut self, coords: &[HexCoord]) -> Vec<Cell> {
        let mut cells: Vec<Cell> = coords.iter().copied().map(Cell::empty).collect();
        let n = coords.len();
        let frequency = self.frequency as usize;
        if n < frequency {
            return cells;
        }

        // Partial Fisher-Yates: the first `n / frequency` slots end up holding
        // a uniform sample of distinct indices.
        let mut order: Vec<usize> = (0..n).collect();
        for slot in 0..n / frequency {
            let pick = self.rng.random_range(slot..n);
            order.swap(slot, pick);
            let index = order[slot];
            let color = self.draw_color();
            cells[index] = Cell::content(coords[index], color);
        }
        cells
    }
}
