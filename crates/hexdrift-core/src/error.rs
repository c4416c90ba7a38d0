//! Error types shared across the Hexdrift workspace.

use std::error::Error;
use std::fmt;

use crate::coord::HexCoord;

/// Errors from coordinate construction and movement primitives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HexError {
    /// A raw lattice point that is not a cell centre.
    NotRepresentable {
        /// Raw `i` coordinate.
        i: i32,
        /// Raw `k` coordinate.
        k: i32,
    },
    /// A movement offset that is not one of the six unit directions.
    InvalidOffset {
        /// The rejected offset.
        offset: HexCoord,
    },
}

impl fmt::Display for HexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRepresentable { i, k } => {
                write!(f, "raw point ({i}, {k}) has no integer line coordinates")
            }
            Self::InvalidOffset { offset } => {
                write!(f, "offset {offset} is not a unit hex direction")
            }
        }
    }
}

impl Error for HexError {}
