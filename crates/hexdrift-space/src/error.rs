//! Error types for window operations.

use hexdrift_core::{HexCoord, HexError};
use std::fmt;

/// Errors arising from window construction, lookup, or shifting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WindowError {
    /// The window radius must be at least 1.
    InvalidRadius {
        /// The rejected radius.
        radius: u32,
    },
    /// A coordinate outside the current disk.
    OutOfWindow {
        /// The offending coordinate.
        coord: HexCoord,
    },
    /// A shift offset that is not a unit direction.
    InvalidOffset(HexError),
    /// The block source returned the wrong number of cells.
    FetchMismatch {
        /// Cells requested.
        expected: usize,
        /// Cells returned.
        got: usize,
    },
}

impl fmt::Display for WindowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRadius { radius } => {
                write!(f, "window radius must be at least 1, got {radius}")
            }
            Self::OutOfWindow { coord } => write!(f, "coordinate {coord} is outside the window"),
            Self::InvalidOffset(e) => write!(f, "invalid shift: {e}"),
            Self::FetchMismatch { expected, got } => {
                write!(f, "block source returned {got} cells, expected {expected}")
            }
        }
    }
}

impl std::error::Error for WindowError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidOffset(e) => Some(e),
            _ => None,
        }
    }
}

impl From<HexError> for WindowError {
    fn from(e: HexError) -> Self {
        Self::InvalidOffset(e)
    }
}
