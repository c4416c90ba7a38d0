//! Boundary traits between the window, the cell store, and renderers.

use crate::cell::Cell;
use crate::coord::HexCoord;

/// Resolves the contents of window cells.
///
/// The window calls this once per shift with every newly exposed
/// coordinate, so implementations can batch lookups and generation.
pub trait BlockSource {
    /// Return one cell per coordinate, in the same order.
    fn fetch(&mut self, coords: &[HexCoord]) -> Vec<Cell>;
}

impl<F> BlockSource for F
where
    F: FnMut(&[HexCoord]) -> Vec<Cell>,
{
    fn fetch(&mut self, coords: &[HexCoord]) -> Vec<Cell> {
        self(coords)
    }
}

/// Read side of the engine, as seen by a renderer.
pub trait RenderSource {
    /// The window cells sorted ascending by `(line_i, line_k)`.
    ///
    /// Always `1 + 3R(R - 1)` cells for `R = radius()`.
    fn blocks(&self) -> Vec<Cell>;

    /// Window radius `R`, counting the centre cell.
    fn radius(&self) -> u32;

    /// Whether the grid changed since the last call. Reading clears the flag.
    fn is_grid_updated(&self) -> bool;
}
