//! Core types and traits for the Hexdrift engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! lattice coordinates, cells and their colors, timestamped values, the
//! error types shared by every crate, and the traits at the seams between
//! the rendering window, the cell store, and renderers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod error;
pub mod glyph;
pub mod traits;

pub use cell::{Cell, Color, Stamped, Timestamp};
pub use coord::{Axis, Direction, HexCoord};
pub use error::HexError;
pub use glyph::{ascii_art, glyph};
pub use traits::{BlockSource, RenderSource};
