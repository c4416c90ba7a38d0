//! Tick orchestration for Hexdrift.
//!
//! [`Engine`] composes the render window and the cell store into the
//! snake's tick: age, move, scroll, settle head and tail, evict.
//! [`RealtimeWorld`] drives an engine from a dedicated thread at a fixed
//! cadence, steered through a shared [`DirectionManager`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod metrics;
mod notify;
pub mod realtime;
mod tick_thread;

pub use config::{ConfigError, EngineConfig};
pub use direction::DirectionManager;
pub use engine::{Engine, ResetCause, TickOutcome};
pub use error::{ControlError, EngineError};
pub use metrics::TickMetrics;
pub use notify::RenderReady;
pub use realtime::{RealtimeWorld, RenderFrame};
