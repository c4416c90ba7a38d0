//! Hex disk geometry and the scrolling render window.
//!
//! [`WindowManager`] keeps the disk of cells around the agent sorted by
//! line coordinates and shifts it one hex step at a time, asking a
//! [`BlockSource`](hexdrift_core::BlockSource) only for the cells exposed
//! on the leading edge of travel. The [`disk`] module enumerates disks,
//! rings, and exposed edges about the origin.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod disk;
pub mod error;
pub mod window;

pub use disk::{disk_len, exposed_edge};
pub use error::WindowError;
pub use window::WindowManager;
