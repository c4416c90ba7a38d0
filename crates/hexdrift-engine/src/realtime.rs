//! User-facing [`RealtimeWorld`]: the engine ticking on its own thread.
//!
//! ```text
//! Input thread           Tick thread ("hexdrift-tick")      Render thread
//!     |                         |                                |
//!     |--turn()---------------->| direction.offset()             |
//!     |  [DirectionManager]     | engine.step(offset)            |
//!     |                         | frame slot <- Arc<RenderFrame> |
//!     |                         | notify -------[bounded(1)]---->|
//!     |                         | park_timeout(budget - elapsed) |
//!     |                         |                    latest() / blocks()
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use hexdrift_core::{Cell, RenderSource};
use tracing::debug;

use crate::config::{ConfigError, EngineConfig};
use crate::direction::DirectionManager;
use crate::engine::Engine;
use crate::error::ControlError;
use crate::notify::RenderReady;
use crate::tick_thread::{Control, Shared, TickThreadState};

/// An immutable picture of the engine after one tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderFrame {
    /// Tick that produced the frame.
    pub tick: u64,
    /// Window radius.
    pub radius: u32,
    /// Window cells sorted by `(line_i, line_k)`.
    pub blocks: Vec<Cell>,
    /// Snake length after the tick.
    pub snake_length: u32,
}

impl RenderFrame {
    /// Capture the current state of `engine`.
    pub fn capture(engine: &Engine) -> Self {
        Self {
            tick: engine.tick(),
            radius: engine.window().radius(),
            blocks: engine.window().blocks().to_vec(),
            snake_length: engine.snake_length(),
        }
    }
}

/// Runs an [`Engine`] at `tick_rate_hz` on a dedicated thread.
///
/// Readers see whole frames only. Dropping the world shuts the thread down.
pub struct RealtimeWorld {
    shared: Shared,
    control_tx: Option<Sender<Control>>,
    tick_thread: Option<JoinHandle<Engine>>,
}

impl RealtimeWorld {
    /// Build an engine from `config` and start ticking it.
    pub fn start(config: EngineConfig) -> Result<Self, ConfigError> {
        let engine = Engine::new(config)?;
        Self::spawn(engine, Arc::new(DirectionManager::default()))
    }

    /// Start ticking `engine`, steered by `direction`.
    pub fn spawn(engine: Engine, direction: Arc<DirectionManager>) -> Result<Self, ConfigError> {
        let shared = Shared {
            frame: Arc::new(Mutex::new(Arc::new(RenderFrame::capture(&engine)))),
            updated: Arc::new(AtomicBool::new(true)),
            shutdown: Arc::new(AtomicBool::new(false)),
            direction,
        };
        let (control_tx, control_rx) = crossbeam_channel::bounded(64);

        let thread_shared = shared.clone();
        let tick_thread = thread::Builder::new()
            .name("hexdrift-tick".into())
            .spawn(move || TickThreadState::new(engine, thread_shared, control_rx).run())
            .map_err(|e| ConfigError::ThreadSpawnFailed {
                reason: format!("tick thread: {e}"),
            })?;

        Ok(Self {
            shared,
            control_tx: Some(control_tx),
            tick_thread: Some(tick_thread),
        })
    }

    /// The steering slot read by the tick thread.
    pub fn direction(&self) -> &Arc<DirectionManager> {
        &self.shared.direction
    }

    /// The most recently published frame.
    pub fn latest(&self) -> Arc<RenderFrame> {
        self.shared.load_frame()
    }

    /// Receive a [`RenderReady`] after each published frame.
    pub fn subscribe(&self) -> Result<Receiver<RenderReady>, ControlError> {
        let (tx, rx) = crossbeam_channel::bounded(1);
        self.send(Control::Subscribe(tx))?;
        Ok(rx)
    }

    /// Restart the session before the next tick.
    pub fn request_reset(&self) -> Result<(), ControlError> {
        self.send(Control::Reset)
    }

    fn send(&self, control: Control) -> Result<(), ControlError> {
        let tx = self.control_tx.as_ref().ok_or(ControlError::Shutdown)?;
        tx.try_send(control).map_err(|e| match e {
            TrySendError::Full(_) => ControlError::ChannelFull,
            TrySendError::Disconnected(_) => ControlError::Shutdown,
        })
    }

    /// Whether the tick thread is still running.
    pub fn is_running(&self) -> bool {
        self.tick_thread
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the tick thread and recover the engine.
    ///
    /// Returns `None` if already shut down or if the tick thread panicked.
    pub fn shutdown(&mut self) -> Option<Engine> {
        let handle = self.tick_thread.take()?;
        self.shared.shutdown.store(true, Ordering::Release);
        // Wake the thread if it is parked in its budget sleep.
        handle.thread().unpark();
        self.control_tx.take();
        let engine = handle.join().ok();
        debug!(recovered = engine.is_some(), "realtime world shut down");
        engine
    }
}

impl RenderSource for RealtimeWorld {
    fn blocks(&self) -> Vec<Cell> {
        self.latest().blocks.clone()
    }

    fn radius(&self) -> u32 {
        self.latest().radius
    }

    fn is_grid_updated(&self) -> bool {
        self.shared.updated.swap(false, Ordering::AcqRel)
    }
}

impl Drop for RealtimeWorld {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fast_config() -> EngineConfig {
        EngineConfig {
            radius: 4,
            tick_rate_hz: 500.0,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn publishes_frames_and_signals() {
        let mut world = RealtimeWorld::start(fast_config()).unwrap();
        let ready = world.subscribe().unwrap();
        let signal = ready.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(signal.tick >= 1);

        let frame = world.latest();
        assert_eq!(frame.radius, 4);
        assert_eq!(frame.blocks.len(), 37);
        assert!(frame.blocks.windows(2).all(|w| w[0].coord() < w[1].coord()));
        assert!(world.is_grid_updated());

        let engine = world.shutdown().unwrap();
        assert!(engine.tick() >= signal.tick);
        assert!(world.shutdown().is_none());
    }

    #[test]
    fn control_after_shutdown_is_rejected() {
        let mut world = RealtimeWorld::start(fast_config()).unwrap();
        world.shutdown();
        assert!(!world.is_running());
        assert_eq!(world.request_reset(), Err(ControlError::Shutdown));
        assert!(world.subscribe().is_err());
    }

    #[test]
    fn drop_triggers_shutdown() {
        let world = RealtimeWorld::start(fast_config()).unwrap();
        std::thread::sleep(Duration::from_millis(20));
        drop(world);
        // If this doesn't hang, shutdown worked.
    }

    #[test]
    fn slow_tick_rate_still_shuts_down_promptly() {
        let config = EngineConfig {
            tick_rate_hz: 0.5,
            ..fast_config()
        };
        let mut world = RealtimeWorld::start(config).unwrap();
        std::thread::sleep(Duration::from_millis(20));
        let start = std::time::Instant::now();
        assert!(world.shutdown().is_some());
        assert!(start.elapsed() < Duration::from_secs(1));
    }
}
