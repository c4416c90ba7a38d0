//! Construction errors for frames and generators.

use std::error::Error;
use std::fmt;

/// A frame or generator parameter outside its valid range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// Time limit must be at least 1.
    InvalidTimeLimit {
        /// The rejected value.
        value: i64,
    },
    /// Expiration horizon must be at least 2.
    InvalidExpire {
        /// The rejected value.
        value: i64,
    },
    /// Move limit must be at least 1.
    InvalidMoveLimit {
        /// The rejected value.
        value: u64,
    },
    /// Spatial range must lie in `1..=MAX_SPATIAL_RANGE`.
    InvalidSpatialRange {
        /// The rejected value.
        value: u32,
    },
    /// Occupancy frequency must be at least 2.
    InvalidFrequency {
        /// The rejected value.
        value: u32,
    },
    /// Color range must lie in `1..=256`.
    InvalidColorRange {
        /// The rejected value.
        value: u32,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimeLimit { value } => write!(f, "time limit {value} must be >= 1"),
            Self::InvalidExpire { value } => write!(f, "expiration horizon {value} must be >= 2"),
            Self::InvalidMoveLimit { value } => write!(f, "move limit {value} must be >= 1"),
            Self::InvalidSpatialRange { value } => write!(
                f,
                "spatial range {value} must be in 1..={}",
                crate::coordinate::MAX_SPATIAL_RANGE
            ),
            Self::InvalidFrequency { value } => {
                write!(f, "occupancy frequency {value} must be >= 2")
            }
            Self::InvalidColorRange { value } => {
                write!(f, "color range {value} must be in 1..=256")
            }
        }
    }
}

impl Error for StoreError {}
