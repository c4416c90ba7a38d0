//! Hexagonal lattice coordinates in the line system.
//!
//! A [`HexCoord`] is addressed by its *line* coordinates `(I, J, K)`: the
//! indices of the three families of parallel lines that pass through every
//! cell centre, constrained by `I + J - K = 0`. Only `I` and `K` are stored;
//! `J` is derived.
//!
//! The *raw* coordinates `(i, j, k)` live on the finer lattice of cell
//! centres and vertices, constrained by `i - j + k = 0`. A raw point is a
//! cell centre iff `(i + k) mod 3 == 0`; only those convert to line form.
//!
//! ```text
//!   i = I + K          I = (2i - k) / 3
//!   k = 2K - I         K = (i + k) / 3
//!   j = i + k = 3K
//! ```

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use smallvec::SmallVec;

use crate::error::HexError;

/// Position of a cell on the infinite hexagonal lattice.
///
/// Ordering is lexicographic on `(line_i, line_k)`, the order in which the
/// rendering window keeps its cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexCoord {
    line_i: i32,
    line_k: i32,
}

impl HexCoord {
    /// The lattice origin.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a coordinate from its `I` and `K` line coordinates.
    pub const fn new(line_i: i32, line_k: i32) -> Self {
        Self { line_i, line_k }
    }

    /// Create a coordinate from all three line coordinates.
    ///
    /// Returns `None` unless `I + J - K == 0`.
    pub fn from_lines(line_i: i32, line_j: i32, line_k: i32) -> Option<Self> {
        (line_i + line_j == line_k).then_some(Self::new(line_i, line_k))
    }

    /// Convert raw lattice coordinates `(i, k)` to a cell coordinate.
    ///
    /// Returns `Err(HexError::NotRepresentable)` when the raw point is not a
    /// cell centre.
    pub fn from_raw(i: i32, k: i32) -> Result<Self, HexError> {
        let j = i + k;
        if j.rem_euclid(3) != 0 {
            return Err(HexError::NotRepresentable { i, k });
        }
        Ok(Self::new((2 * i - k) / 3, j / 3))
    }

    /// Line coordinate `I`.
    pub const fn line_i(&self) -> i32 {
        self.line_i
    }

    /// Line coordinate `J = K - I`.
    pub const fn line_j(&self) -> i32 {
        self.line_k - self.line_i
    }

    /// Line coordinate `K`.
    pub const fn line_k(&self) -> i32 {
        self.line_k
    }

    /// Raw coordinate `i`.
    pub const fn raw_i(&self) -> i32 {
        self.line_i + self.line_k
    }

    /// Raw coordinate `j = i + k`.
    pub const fn raw_j(&self) -> i32 {
        3 * self.line_k
    }

    /// Raw coordinate `k`.
    pub const fn raw_k(&self) -> i32 {
        2 * self.line_k - self.line_i
    }

    /// Hex distance from the origin: `max(|I|, |J|, |K|)`.
    pub fn magnitude(&self) -> u32 {
        self.line_i
            .unsigned_abs()
            .max(self.line_j().unsigned_abs())
            .max(self.line_k.unsigned_abs())
    }

    /// Hex distance between two cells.
    pub fn distance(&self, other: &Self) -> u32 {
        (*self - *other).magnitude()
    }

    /// Whether this cell lies within `range` steps of the origin.
    pub fn within_range(&self, range: u32) -> bool {
        self.magnitude() <= range
    }

    /// Whether the two cells share an edge.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.distance(other) == 1
    }

    /// The six neighbours, in [`Direction::ALL`] order.
    pub fn neighbours(&self) -> SmallVec<[HexCoord; 6]> {
        Direction::ALL.iter().map(|d| *self + d.offset()).collect()
    }

    /// Advance `steps` units along `axis`.
    pub fn shift(&self, axis: Axis, steps: i32) -> Self {
        *self + axis.unit().offset() * steps
    }

    /// Projection of `self` onto `other` in the three line coordinates.
    ///
    /// For a unit direction `d`, `(c + d).projection(d) == c.projection(d) + 2`.
    pub fn projection(&self, other: &Self) -> i64 {
        self.line_i as i64 * other.line_i as i64
            + self.line_j() as i64 * other.line_j() as i64
            + self.line_k as i64 * other.line_k as i64
    }
}

impl Add for HexCoord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.line_i + rhs.line_i, self.line_k + rhs.line_k)
    }
}

impl Sub for HexCoord {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.line_i - rhs.line_i, self.line_k - rhs.line_k)
    }
}

impl Neg for HexCoord {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.line_i, -self.line_k)
    }
}

impl Mul<i32> for HexCoord {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self {
        Self::new(self.line_i * rhs, self.line_k * rhs)
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.line_i, self.line_j(), self.line_k)
    }
}

/// One of the three line axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Advances `I`, keeps `J` fixed.
    I,
    /// Advances `J`, keeps `K` fixed.
    J,
    /// Advances `K`, keeps `I` fixed.
    K,
}

impl Axis {
    /// The unit direction that advances this axis by one.
    pub const fn unit(self) -> Direction {
        match self {
            Self::I => Direction::East,
            Self::J => Direction::SouthWest,
            Self::K => Direction::SouthEast,
        }
    }
}

/// The six unit steps between neighbouring cells.
///
/// Declared in rotational order; `index` and `index + 3 (mod 6)` are
/// opposite, and each opposite pair runs along one [`Axis`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `(I, J, K) = (1, 0, 1)`
    East,
    /// `(1, -1, 0)`
    NorthEast,
    /// `(0, -1, -1)`
    NorthWest,
    /// `(-1, 0, -1)`
    West,
    /// `(-1, 1, 0)`
    SouthWest,
    /// `(0, 1, 1)`
    SouthEast,
}

impl Direction {
    /// All six directions in rotational order.
    pub const ALL: [Direction; 6] = [
        Self::East,
        Self::NorthEast,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Position of this direction in [`Direction::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction at `index mod 6`.
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 6]
    }

    /// The unit offset in line coordinates.
    pub const fn offset(self) -> HexCoord {
        match self {
            Self::East => HexCoord::new(1, 1),
            Self::NorthEast => HexCoord::new(1, 0),
            Self::NorthWest => HexCoord::new(0, -1),
            Self::West => HexCoord::new(-1, -1),
            Self::SouthWest => HexCoord::new(-1, 0),
            Self::SouthEast => HexCoord::new(0, 1),
        }
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Next direction in rotational order.
    pub const fn rotated_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Previous direction in rotational order.
    pub const fn rotated_ccw(self) -> Self {
        Self::from_index(self.index() + 5)
    }

    /// The axis this direction travels along.
    pub const fn axis(self) -> Axis {
        match self {
            Self::East | Self::West => Axis::I,
            Self::SouthWest | Self::NorthEast => Axis::J,
            Self::SouthEast | Self::NorthWest => Axis::K,
        }
    }
}

impl TryFrom<HexCoord> for Direction {
    type Error = HexError;

    /// Accepts exactly the six unit offsets; the zero vector is rejected.
    fn try_from(offset: HexCoord) -> Result<Self, HexError> {
        Self::ALL
            .into_iter()
            .find(|d| d.offset() == offset)
            .ok_or(HexError::InvalidOffset { offset })
    }
}

impl From<Direction> for HexCoord {
    fn from(d: Direction) -> Self {
        d.offset()
    }
}
