//! Hexdrift: an endless snake on a hexagonal lattice.
//!
//! The agent moves without bound while only a fixed-radius window around it
//! is materialized. Cells are generated lazily as they scroll into view,
//! cached by position, and forgotten once they age out; the snake's body
//! lives in the same cache. This facade re-exports the public API of the
//! sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use hexdrift::prelude::*;
//!
//! let config = EngineConfig { radius: 3, seed: 7, ..EngineConfig::default() };
//! let mut engine = Engine::new(config).unwrap();
//! let ready = engine.subscribe();
//!
//! engine.move_by(Direction::East.offset()).unwrap();
//! assert_eq!(ready.try_recv().unwrap().tick, 1);
//! assert!(engine.is_grid_updated());
//! assert_eq!(engine.blocks().len(), 19);
//! println!("{}", ascii_art(&engine));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `hexdrift-core` | Coordinates, cells, colors, render traits |
//! | [`space`] | `hexdrift-space` | Disk geometry and the scrolling window |
//! | [`store`] | `hexdrift-store` | Reference frames, generators, the cell cache |
//! | [`engine`] | `hexdrift-engine` | The tick, reset policy, realtime driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, cells, colors, and boundary traits (`hexdrift-core`).
pub use hexdrift_core as types;

/// Disk geometry and the scrolling window (`hexdrift-space`).
///
/// [`space::WindowManager`] shifts the window one step at a time.
pub use hexdrift_space as space;

/// Reference frames, generation, and the aging cache (`hexdrift-store`).
///
/// Implement [`store::CellGenerator`] to control what the world contains.
pub use hexdrift_store as store;

/// Tick orchestration (`hexdrift-engine`).
///
/// [`engine::Engine`] for direct stepping, [`engine::RealtimeWorld`] for a
/// background tick thread.
pub use hexdrift_engine as engine;

/// Common imports for typical Hexdrift usage.
///
/// ```rust
/// use hexdrift::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use hexdrift_core::{
        ascii_art, BlockSource, Cell, Color, Direction, HexCoord, RenderSource, Stamped,
    };

    // Generation
    pub use hexdrift_store::{CellGenerator, RandomCellGenerator};

    // Errors
    pub use hexdrift_core::HexError;
    pub use hexdrift_engine::{ConfigError, ControlError, EngineError};

    // Engine
    pub use hexdrift_engine::{
        DirectionManager, Engine, EngineConfig, RealtimeWorld, RenderFrame, RenderReady,
        ResetCause, TickMetrics, TickOutcome,
    };
}
