//! The single-owner engine: one [`Engine::step`] is one whole tick.
//!
//! A tick ages the clock, moves the origin with the agent, scrolls the
//! window the other way, and settles the head and tail in the cache:
//!
//! | head cell | result |
//! |-----------|--------|
//! | snake | reset (self-collision) |
//! | content, length would reach `expire` | reset (length overflow) |
//! | content | head renewed, length + 1 |
//! | empty | head renewed, tail cleared |
//!
//! Expired entries are then trimmed from the old end of the cache. Entries
//! still visible in the window are renewed rather than dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crossbeam_channel::{Receiver, Sender};
use hexdrift_core::{Cell, Direction, HexCoord, RenderSource};
use hexdrift_space::{WindowError, WindowManager};
use hexdrift_store::{
    CellGenerator, CellStore, CoordinateManager, RandomCellGenerator, TimeReferenceManager,
};
use tracing::{info, trace};

use crate::config::{ConfigError, EngineConfig};
use crate::error::EngineError;
use crate::metrics::TickMetrics;
use crate::notify::{Notifier, RenderReady};

/// Why the session restarted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResetCause {
    /// The head moved onto the snake's own body.
    SelfCollision,
    /// Growing would make the snake as long as the expiration horizon.
    LengthOverflow,
    /// [`Engine::reset`] was called.
    Requested,
}

/// Result of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The snake moved onto an empty cell; length unchanged.
    Moved,
    /// The snake ate content and grew by one.
    Grew,
    /// The session restarted with a length-1 snake at the origin.
    Reset {
        /// What triggered the reset.
        cause: ResetCause,
        /// Snake length just before the reset.
        length: u32,
    },
}

/// Owns the window, the cell store, and the snake length.
///
/// Every mutation goes through `&mut self`, so a tick is never observed
/// half-done. Share it across threads through
/// [`RealtimeWorld`](crate::RealtimeWorld).
pub struct Engine {
    config: EngineConfig,
    window: WindowManager,
    store: CellStore,
    snake_length: u32,
    tick: u64,
    updated: AtomicBool,
    notifier: Notifier,
    metrics: TickMetrics,
}

impl Engine {
    /// Build an engine whose cells come from a [`RandomCellGenerator`]
    /// seeded with `config.seed`.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let generator =
            RandomCellGenerator::new(config.frequency, config.color_range, config.seed)?;
        Self::with_generator(config, Box::new(generator))
    }

    /// Build an engine around a custom generator.
    ///
    /// `frequency`, `color_range` and `seed` are still validated but only
    /// [`Engine::new`] uses them.
    pub fn with_generator(
        config: EngineConfig,
        generator: Box<dyn CellGenerator>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let window = WindowManager::new(config.radius)?;
        let store = CellStore::new(
            CoordinateManager::new(config.move_limit, config.spatial_range)?,
            TimeReferenceManager::new(config.time_limit, config.expire)?,
            generator,
        );
        let mut engine = Self {
            config,
            window,
            store,
            snake_length: 1,
            tick: 0,
            updated: AtomicBool::new(false),
            notifier: Notifier::default(),
            metrics: TickMetrics::default(),
        };
        engine.restart()?;
        let stats = engine.store.take_stats();
        engine.metrics = TickMetrics {
            fetched_cells: stats.fetched,
            generated_cells: stats.generated,
            cache_len: engine.store.cache().len(),
            snake_length: 1,
            ..TickMetrics::default()
        };
        Ok(engine)
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current snake length, at least 1.
    pub fn snake_length(&self) -> u32 {
        self.snake_length
    }

    /// Number of completed ticks.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// The render window.
    pub fn window(&self) -> &WindowManager {
        &self.window
    }

    /// The cell store (cache, frames, generator).
    pub fn store(&self) -> &CellStore {
        &self.store
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &TickMetrics {
        &self.metrics
    }

    /// Receive a [`RenderReady`] after every [`move_by`](Self::move_by).
    pub fn subscribe(&mut self) -> Receiver<RenderReady> {
        self.notifier.subscribe()
    }

    pub(crate) fn add_subscriber(&mut self, tx: Sender<RenderReady>) {
        self.notifier.add(tx);
    }

    /// Run one tick towards `offset`, then flag the grid as updated and
    /// notify subscribers.
    pub fn move_by(&mut self, offset: HexCoord) -> Result<TickOutcome, EngineError> {
        let outcome = self.step(offset)?;
        self.publish();
        Ok(outcome)
    }

    /// Run one tick towards `offset` without notifying anyone.
    ///
    /// `offset` must be one of the six unit directions; anything else is
    /// rejected before any state changes.
    pub fn step(&mut self, offset: HexCoord) -> Result<TickOutcome, EngineError> {
        let start = Instant::now();
        let dir = Direction::try_from(offset)?;
        let mut metrics = TickMetrics {
            resets: self.metrics.resets,
            spatial_rebases: self.metrics.spatial_rebases,
            time_rebases: self.metrics.time_rebases,
            ..TickMetrics::default()
        };

        let rebase = self.store.advance(offset)?;
        metrics.time_rebases += u64::from(rebase.time.is_some());
        metrics.spatial_rebases += u64::from(rebase.space.is_some());

        self.window.shift(dir.opposite(), &mut self.store)?;

        let head_at = self.store.coordinates().origin();
        let head = self.store.lookup(head_at);
        let outcome = if head.is_agent_body() {
            self.reset_with(ResetCause::SelfCollision)?
        } else if head.is_content() && i64::from(self.snake_length) + 1 >= self.config.expire {
            self.reset_with(ResetCause::LengthOverflow)?
        } else if head.is_content() {
            self.store.renew_as_agent(head_at);
            self.paint(Cell::agent(HexCoord::ZERO))?;
            self.snake_length += 1;
            TickOutcome::Grew
        } else {
            self.store.renew_as_agent(head_at);
            self.paint(Cell::agent(HexCoord::ZERO))?;
            if let Some(tail) = self.store.clear_segment(i64::from(self.snake_length)) {
                let local = self.store.coordinates().cell_to_relative(tail);
                self.paint(local)?;
            }
            TickOutcome::Moved
        };
        if let TickOutcome::Reset { .. } = outcome {
            metrics.resets += 1;
        }

        let window = &self.window;
        metrics.evicted_cells = self.store.evict_expired(|local| window.contains(local));
        let stats = self.store.take_stats();
        metrics.fetched_cells = stats.fetched;
        metrics.generated_cells = stats.generated;
        metrics.cache_len = self.store.cache().len();
        metrics.snake_length = self.snake_length;
        metrics.total_us = start.elapsed().as_micros() as u64;
        self.metrics = metrics;
        self.tick += 1;

        trace!(
            tick = self.tick,
            ?outcome,
            cache_len = self.metrics.cache_len,
            "tick"
        );
        Ok(outcome)
    }

    /// Restart the session: a length-1 snake at the origin, both frames
    /// rebased, and the window refetched.
    pub fn reset(&mut self) -> Result<TickOutcome, EngineError> {
        let outcome = self.reset_quietly()?;
        self.publish();
        Ok(outcome)
    }

    /// [`reset`](Self::reset) without flagging or notifying.
    pub(crate) fn reset_quietly(&mut self) -> Result<TickOutcome, EngineError> {
        let outcome = self.reset_with(ResetCause::Requested)?;
        self.metrics.resets += 1;
        self.metrics.cache_len = self.store.cache().len();
        self.metrics.snake_length = self.snake_length;
        Ok(outcome)
    }

    fn reset_with(&mut self, cause: ResetCause) -> Result<TickOutcome, EngineError> {
        let length = self.snake_length;
        info!(?cause, length, tick = self.tick, "session reset");
        self.restart()?;
        Ok(TickOutcome::Reset { cause, length })
    }

    fn restart(&mut self) -> Result<(), WindowError> {
        self.store.reset_to_head();
        self.snake_length = 1;
        self.window.reset(&mut self.store)?;
        Ok(())
    }

    /// Mirror a cache change into the window if the cell is visible.
    fn paint(&mut self, local: Cell) -> Result<(), EngineError> {
        if self.window.contains(local.coord()) {
            self.window.set_block(local)?;
        }
        Ok(())
    }

    /// Flag the grid as updated and notify subscribers.
    pub(crate) fn publish(&mut self) {
        self.updated.store(true, Ordering::Release);
        self.notifier.notify(RenderReady { tick: self.tick });
    }
}

impl RenderSource for Engine {
    fn blocks(&self) -> Vec<Cell> {
        self.window.blocks().to_vec()
    }

    fn radius(&self) -> u32 {
        self.window.radius()
    }

    fn is_grid_updated(&self) -> bool {
        self.updated.swap(false, Ordering::AcqRel)
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("tick", &self.tick)
            .field("snake_length", &self.snake_length)
            .field("radius", &self.window.radius())
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
