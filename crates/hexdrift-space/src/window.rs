//! The fixed-radius rendering window and its one-step shift.
//!
//! The window is a disk of cells about the local origin, stored sorted by
//! `(line_i, line_k)`. Cells never change position; a shift moves *content*
//! by one step, against the agent's direction of travel. Every interior cell
//! copies the content of its neighbour one step towards the agent, and only
//! the `2R - 1` newly exposed cells on the leading edge, the side the agent
//! is travelling towards, are resolved through a [`BlockSource`].
//!
//! The copy order for each direction is derived once from the disk
//! geometry and cached as a shift plan.

use hexdrift_core::{BlockSource, Cell, Direction, HexCoord};

use crate::disk;
use crate::error::WindowError;

/// Precomputed copy schedule for one shift direction.
#[derive(Clone, Debug)]
struct ShiftPlan {
    /// `(dst, src)` index pairs. Ordered by descending projection of `dst`
    /// onto the direction, so a source is always read before it is
    /// overwritten.
    copies: Vec<(usize, usize)>,
    /// Indices left without a source.
    exposed: Vec<usize>,
}

impl ShiftPlan {
    fn derive(coords: &[HexCoord], radius: u32, dir: Direction) -> Self {
        let index = |c: HexCoord| coords.binary_search(&c).ok();
        let exposed: Vec<usize> = disk::exposed_edge(radius, dir)
            .into_iter()
            .filter_map(index)
            .collect();

        let step = dir.offset();
        let mut copies: Vec<(usize, usize)> = coords
            .iter()
            .enumerate()
            .filter_map(|(dst, &c)| index(c - step).map(|src| (dst, src)))
            .collect();
        copies.sort_by_key(|&(dst, _)| std::cmp::Reverse(coords[dst].projection(&step)));

        debug_assert_eq!(copies.len() + exposed.len(), coords.len());
        Self { copies, exposed }
    }
}

/// Owns the sorted disk of cells currently rendered.
#[derive(Clone, Debug)]
pub struct WindowManager {
    radius: u32,
    cells: Vec<Cell>,
    plans: Vec<ShiftPlan>,
}

impl WindowManager {
    /// Create a window of radius `radius` filled with empty cells.
    ///
    /// Returns `Err(WindowError::InvalidRadius)` for a zero radius.
    pub fn new(radius: u32) -> Result<Self, WindowError> {
        if radius == 0 {
            return Err(WindowError::InvalidRadius { radius });
        }
        let coords = disk::disk(radius);
        let plans = Direction::ALL
            .iter()
            .map(|&d| ShiftPlan::derive(&coords, radius, d))
            .collect();
        Ok(Self {
            radius,
            cells: coords.into_iter().map(Cell::empty).collect(),
            plans,
        })
    }

    /// Window radius `R`.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Number of cells, `1 + 3R(R - 1)`.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a window holds at least its centre.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// All cells, sorted by `(line_i, line_k)`.
    pub fn blocks(&self) -> &[Cell] {
        &self.cells
    }

    /// Index of `coord` in [`blocks`](Self::blocks), by binary search.
    pub fn index_of(&self, coord: HexCoord) -> Option<usize> {
        self.cells.binary_search_by(|c| c.coord().cmp(&coord)).ok()
    }

    /// Whether `coord` lies inside the disk.
    pub fn contains(&self, coord: HexCoord) -> bool {
        coord.within_range(self.radius - 1)
    }

    /// The cell at `coord`.
    pub fn block(&self, coord: HexCoord) -> Result<&Cell, WindowError> {
        self.index_of(coord)
            .map(|i| &self.cells[i])
            .ok_or(WindowError::OutOfWindow { coord })
    }

    /// Overwrite the content at `cell.coord()`.
    pub fn set_block(&mut self, cell: Cell) -> Result<(), WindowError> {
        let coord = cell.coord();
        let i = self
            .index_of(coord)
            .ok_or(WindowError::OutOfWindow { coord })?;
        self.cells[i].assign_state(&cell);
        Ok(())
    }

    /// Move all content one step along `dir`, resolving the exposed edge
    /// through `source` in a single fetch.
    ///
    /// Returns the number of cells fetched (`2R - 1`). If the source returns
    /// the wrong number of cells the window is left untouched.
    pub fn shift<S>(&mut self, dir: Direction, source: &mut S) -> Result<usize, WindowError>
    where
        S: BlockSource + ?Sized,
    {
        let plan = &self.plans[dir.index()];
        let exposed: Vec<HexCoord> = plan
            .exposed
            .iter()
            .map(|&i| self.cells[i].coord())
            .collect();
        let fetched = source.fetch(&exposed);
        if fetched.len() != exposed.len() {
            return Err(WindowError::FetchMismatch {
                expected: exposed.len(),
                got: fetched.len(),
            });
        }

        for &(dst, src) in &plan.copies {
            let from = self.cells[src];
            self.cells[dst].assign_state(&from);
        }
        for (&i, cell) in plan.exposed.iter().zip(&fetched) {
            debug_assert_eq!(self.cells[i].coord(), cell.coord());
            self.cells[i].assign_state(cell);
        }
        Ok(exposed.len())
    }

    /// Like [`shift`](Self::shift), for an offset that must be a unit direction.
    pub fn shift_by<S>(&mut self, offset: HexCoord, source: &mut S) -> Result<usize, WindowError>
    where
        S: BlockSource + ?Sized,
    {
        let dir = Direction::try_from(offset)?;
        self.shift(dir, source)
    }

    /// Re-fetch every cell about the local origin.
    pub fn reset<S>(&mut self, source: &mut S) -> Result<(), WindowError>
    where
        S: BlockSource + ?Sized,
    {
        let coords: Vec<HexCoord> = self.cells.iter().map(Cell::coord).collect();
        let fetched = source.fetch(&coords);
        if fetched.len() != coords.len() {
            return Err(WindowError::FetchMismatch {
                expected: coords.len(),
                got: fetched.len(),
            });
        }
        for (dst, cell) in self.cells.iter_mut().zip(&fetched) {
            dst.assign_state(cell);
        }
        Ok(())
    }
}
