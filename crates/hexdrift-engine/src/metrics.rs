//! Per-tick metrics for the engine.
//!
//! [`TickMetrics`] is refreshed after every step; the cumulative counters
//! carry over between ticks and survive resets.

/// Timing and cache activity for the most recent tick.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// Wall-clock time for the whole step, in microseconds.
    pub total_us: u64,
    /// Cells requested from the store this tick.
    pub fetched_cells: usize,
    /// Cells that missed the cache and were generated this tick.
    pub generated_cells: usize,
    /// Cache entries evicted as expired this tick.
    pub evicted_cells: usize,
    /// Cache size after the tick.
    pub cache_len: usize,
    /// Snake length after the tick.
    pub snake_length: u32,
    /// Cumulative number of reset transitions.
    pub resets: u64,
    /// Cumulative number of origin rebases.
    pub spatial_rebases: u64,
    /// Cumulative number of clock rebases.
    pub time_rebases: u64,
}
