//! Bounded reference frames, procedural generation, and the aging cell
//! cache behind the Hexdrift window.
//!
//! The store keeps every materialized cell in world coordinates, keyed by
//! position and ordered by age. Two [`RebasingFrame`]s keep those keys and
//! stamps small: [`CoordinateManager`] for the moving origin and
//! [`TimeReferenceManager`] for the countdown clock. [`CellStore`] ties them
//! to a [`CellGenerator`] and serves the window as a
//! [`BlockSource`](hexdrift_core::BlockSource).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod coordinate;
pub mod error;
pub mod frame;
pub mod generator;
pub mod store;
pub mod time;

pub use cache::Cache;
pub use coordinate::{CoordinateManager, MAX_SPATIAL_RANGE};
pub use error::StoreError;
pub use frame::RebasingFrame;
pub use generator::{CellGenerator, RandomCellGenerator};
pub use store::{CellStore, FetchStats, Rebase};
pub use time::TimeReferenceManager;
