//! Tick loop and control channel draining for [`RealtimeWorld`].
//!
//! The tick thread owns the [`Engine`] exclusively (moved in via
//! `thread::Builder::spawn`). Control requests arrive over a bounded
//! crossbeam channel; frames leave as immutable `Arc<RenderFrame>`s.
//!
//! [`RealtimeWorld`]: crate::RealtimeWorld

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, trace, warn};

use crate::direction::DirectionManager;
use crate::engine::Engine;
use crate::notify::RenderReady;
use crate::realtime::RenderFrame;

/// Requests from user threads to the tick thread.
pub(crate) enum Control {
    /// Register a render-ready subscriber.
    Subscribe(Sender<RenderReady>),
    /// Restart the session before the next tick.
    Reset,
}

/// Handles shared between the tick thread and [`RealtimeWorld`](crate::RealtimeWorld).
#[derive(Clone)]
pub(crate) struct Shared {
    pub frame: Arc<Mutex<Arc<RenderFrame>>>,
    pub updated: Arc<AtomicBool>,
    pub shutdown: Arc<AtomicBool>,
    pub direction: Arc<DirectionManager>,
}

impl Shared {
    pub fn store_frame(&self, frame: RenderFrame) {
        let mut slot = self.frame.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = Arc::new(frame);
    }

    pub fn load_frame(&self) -> Arc<RenderFrame> {
        let slot = self.frame.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&slot)
    }
}

/// State held by the tick thread's main loop.
pub(crate) struct TickThreadState {
    engine: Engine,
    shared: Shared,
    control_rx: Receiver<Control>,
    tick_budget: Duration,
}

impl TickThreadState {
    pub fn new(engine: Engine, shared: Shared, control_rx: Receiver<Control>) -> Self {
        let tick_budget = Duration::from_secs_f64(1.0 / engine.config().tick_rate_hz);
        Self {
            engine,
            shared,
            control_rx,
            tick_budget,
        }
    }

    /// Main tick loop. Runs until the shutdown flag is set, then hands the
    /// engine back through the join handle.
    pub fn run(mut self) -> Engine {
        debug!(budget_us = self.tick_budget.as_micros() as u64, "tick thread started");
        loop {
            if self.shared.shutdown.load(Ordering::Acquire) {
                break;
            }
            let tick_start = Instant::now();

            // 1. Drain control requests.
            self.drain_control_channel();

            // 2. Read the steering slot once and tick.
            let offset = self.shared.direction.offset();
            match self.engine.step(offset) {
                Ok(outcome) => {
                    trace!(?outcome, "realtime tick");
                    // 3. Publish the frame before anyone hears about it.
                    self.publish();
                }
                Err(e) => warn!(error = %e, "tick failed"),
            }

            // 4. Sleep for the rest of the budget; shutdown unparks us.
            if let Some(remaining) = self.tick_budget.checked_sub(tick_start.elapsed()) {
                thread::park_timeout(remaining);
            }
        }
        debug!(ticks = self.engine.tick(), "tick thread stopped");
        self.engine
    }

    fn drain_control_channel(&mut self) {
        while let Ok(control) = self.control_rx.try_recv() {
            match control {
                Control::Subscribe(tx) => self.engine.add_subscriber(tx),
                Control::Reset => match self.engine.reset_quietly() {
                    Ok(_) => self.publish(),
                    Err(e) => warn!(error = %e, "reset failed"),
                },
            }
        }
    }

    fn publish(&mut self) {
        self.shared.store_frame(RenderFrame::capture(&self.engine));
        self.shared.updated.store(true, Ordering::Release);
        self.engine.publish();
    }
}
