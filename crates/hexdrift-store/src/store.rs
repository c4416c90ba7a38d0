//! The cache-fetch path: frames, cache, and generator behind one owner.

use hexdrift_core::{BlockSource, Cell, Direction, HexCoord, HexError, Timestamp};

use crate::cache::Cache;
use crate::coordinate::CoordinateManager;
use crate::generator::CellGenerator;
use crate::time::TimeReferenceManager;

/// Which frames rebased during an [`advance`](CellStore::advance).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rebase {
    /// Stamp shift applied to the cache, if the clock rebased.
    pub time: Option<Timestamp>,
    /// Coordinate shift applied to the cache, if the origin rebased.
    pub space: Option<HexCoord>,
}

/// Counters for cells served since the last [`take_stats`](CellStore::take_stats).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Cells requested through [`BlockSource::fetch`] or [`CellStore::resolve`].
    pub fetched: usize,
    /// Cells that missed the cache and were generated.
    pub generated: usize,
}

/// Owns the world-keyed cache and the frames that keep its keys and stamps
/// bounded.
///
/// As a [`BlockSource`] it takes window-local coordinates, resolves them in
/// world space (generating misses in one batch) and answers in local
/// coordinates.
pub struct CellStore {
    coords: CoordinateManager,
    time: TimeReferenceManager,
    cache: Cache,
    generator: Box<dyn CellGenerator>,
    stats: FetchStats,
}

impl CellStore {
    /// An empty store at the origin of both frames.
    pub fn new(
        coords: CoordinateManager,
        time: TimeReferenceManager,
        generator: Box<dyn CellGenerator>,
    ) -> Self {
        Self {
            coords,
            time,
            cache: Cache::new(),
            generator,
            stats: FetchStats::default(),
        }
    }

    /// The spatial frame.
    pub fn coordinates(&self) -> &CoordinateManager {
        &self.coords
    }

    /// The clock.
    pub fn time(&self) -> &TimeReferenceManager {
        &self.time
    }

    /// The cache.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Age the clock one tick and move the origin by `offset`, re-anchoring
    /// the cache on either rebase.
    ///
    /// An invalid offset is rejected before anything changes.
    pub fn advance(&mut self, offset: HexCoord) -> Result<Rebase, HexError> {
        Direction::try_from(offset)?;
        let time = self.time.age();
        if let Some(shift) = time {
            self.cache.restamp(shift);
        }
        let space = self.coords.move_by(offset)?;
        if let Some(shift) = space {
            self.cache.rekey(shift);
        }
        Ok(Rebase { time, space })
    }

    /// Resolve world coordinates, generating and caching misses "now".
    ///
    /// A single coordinate skips the batch path.
    pub fn resolve(&mut self, world: &[HexCoord]) -> Vec<Cell> {
        self.stats.fetched += world.len();
        if let [coord] = world {
            return vec![self.resolve_one(*coord)];
        }

        let misses: Vec<HexCoord> = world
            .iter()
            .copied()
            .filter(|&c| !self.cache.contains(c))
            .collect();
        if !misses.is_empty() {
            self.stats.generated += misses.len();
            for cell in self.generator.generate_batch(&misses) {
                self.insert_generated(cell);
            }
        }
        world
            .iter()
            .map(|&c| match self.cache.get(c) {
                Some(entry) => entry.value,
                None => Cell::empty(c),
            })
            .collect()
    }

    fn resolve_one(&mut self, coord: HexCoord) -> Cell {
        if let Some(entry) = self.cache.get(coord) {
            return entry.value;
        }
        self.stats.generated += 1;
        let cell = self.generator.generate_one(coord);
        self.insert_generated(cell)
    }

    fn insert_generated(&mut self, cell: Cell) -> Cell {
        self.cache.push(self.time.stamp_now(cell));
        cell
    }

    /// The cell at world `coord`, generated on a miss.
    pub fn lookup(&mut self, coord: HexCoord) -> Cell {
        self.stats.fetched += 1;
        self.resolve_one(coord)
    }

    /// Stamp the cell at world `coord` "now", make it snake, and move it to
    /// the newest end of the cache. The cell is generated first on a miss.
    pub fn renew_as_agent(&mut self, coord: HexCoord) -> Cell {
        let now = self.time.counter();
        match self.cache.renew(coord, now, Cell::mark_agent) {
            Some(cell) => cell,
            None => {
                let cell = Cell::agent(coord);
                self.cache.push(self.time.stamp_now(cell));
                cell
            }
        }
    }

    /// Clear the snake segment that is exactly `age` ticks old. Returns the
    /// cleared cell, or `None` if no such segment is cached.
    pub fn clear_segment(&mut self, age: Timestamp) -> Option<Cell> {
        let stamp = self.time.to_absolute(age);
        let coord = self
            .cache
            .find(|e| e.stamp == stamp && e.value.is_agent_body())?
            .value
            .coord();
        self.cache.update(coord, Cell::clear)
    }

    /// Drop expired entries from the old end of the cache. Returns the
    /// number dropped.
    ///
    /// An expired entry whose local coordinate `visible` accepts is renewed
    /// "now" instead, so anything still on screen stays cached.
    pub fn evict_expired(&mut self, visible: impl Fn(HexCoord) -> bool) -> usize {
        let time = &self.time;
        let coords = &self.coords;
        self.cache.evict_or_renew(
            |e| time.is_stamp_expired(e.stamp),
            time.counter(),
            |cell| visible(coords.to_relative(cell.coord())),
        )
    }

    /// Reset both frames and leave a single snake head at the origin.
    pub fn reset_to_head(&mut self) -> Cell {
        self.coords.reset();
        self.time.reset();
        self.cache.clear();
        let head = Cell::agent(HexCoord::ZERO);
        self.cache.push(self.time.stamp_now(head));
        head
    }

    /// Return and zero the fetch counters.
    pub fn take_stats(&mut self) -> FetchStats {
        std::mem::take(&mut self.stats)
    }
}

impl BlockSource for CellStore {
    fn fetch(&mut self, coords: &[HexCoord]) -> Vec<Cell> {
        let world = self.coords.all_to_absolute(coords);
        let mut cells = self.resolve(&world);
        self.coords.cells_to_relative(&mut cells);
        cells
    }
}

impl std::fmt::Debug for CellStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellStore")
            .field("coords", &self.coords)
            .field("time", &self.time)
            .field("cache_len", &self.cache.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
