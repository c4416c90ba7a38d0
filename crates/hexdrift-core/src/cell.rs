//! Cells, colors, and timestamped values.

use std::ops::{Add, Sub};

use crate::coord::HexCoord;

/// Logical timestamp used by the time reference.
pub type Timestamp = i64;

/// What a cell shows.
///
/// Consumers that predate the tagged form address colors as a single
/// integer; see [`legacy_index`](Color::legacy_index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    /// Nothing here.
    Empty,
    /// Part of the snake.
    AgentBody,
    /// Generated content ("food") with a palette index.
    Content(u8),
}

impl Color {
    /// Legacy integer for [`Color::Empty`].
    pub const EMPTY_INDEX: i32 = -1;
    /// Legacy integer for [`Color::AgentBody`].
    pub const AGENT_INDEX: i32 = -2;

    /// Encode as the legacy integer: `-1` empty, `-2` agent body, `>= 0` content.
    pub const fn legacy_index(self) -> i32 {
        match self {
            Self::Empty => Self::EMPTY_INDEX,
            Self::AgentBody => Self::AGENT_INDEX,
            Self::Content(c) => c as i32,
        }
    }

    /// Decode a legacy integer. Returns `None` outside `-2..=255`.
    pub fn from_legacy(index: i32) -> Option<Self> {
        match index {
            Self::EMPTY_INDEX => Some(Self::Empty),
            Self::AGENT_INDEX => Some(Self::AgentBody),
            _ => u8::try_from(index).ok().map(Self::Content),
        }
    }

    /// ASCII glyph for this color.
    pub fn glyph(self) -> char {
        crate::glyph::glyph(self.legacy_index())
    }
}

/// A lattice position with a color and an occupancy flag.
///
/// The constructors keep the two consistent, but both can be changed
/// independently afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    coord: HexCoord,
    color: Color,
    occupied: bool,
}

impl Cell {
    /// An unoccupied, empty cell.
    pub const fn empty(coord: HexCoord) -> Self {
        Self {
            coord,
            color: Color::Empty,
            occupied: false,
        }
    }

    /// An occupied snake segment.
    pub const fn agent(coord: HexCoord) -> Self {
        Self {
            coord,
            color: Color::AgentBody,
            occupied: true,
        }
    }

    /// An occupied content cell with palette index `color`.
    pub const fn content(coord: HexCoord, color: u8) -> Self {
        Self {
            coord,
            color: Color::Content(color),
            occupied: true,
        }
    }

    /// A cell whose color follows from `occupied` alone: agent body when
    /// occupied, empty otherwise.
    pub const fn new(coord: HexCoord, occupied: bool) -> Self {
        if occupied {
            Self::agent(coord)
        } else {
            Self::empty(coord)
        }
    }

    /// A cell with explicit color and occupancy. An unoccupied cell is
    /// always empty, whatever `color` says.
    pub const fn with_color(coord: HexCoord, color: Color, occupied: bool) -> Self {
        if occupied {
            Self {
                coord,
                color,
                occupied,
            }
        } else {
            Self::empty(coord)
        }
    }

    /// Position of the cell.
    pub const fn coord(&self) -> HexCoord {
        self.coord
    }

    /// Current color.
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Whether something occupies the cell.
    pub const fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Replace the color, leaving occupancy untouched.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Replace the occupancy flag, leaving the color untouched.
    pub fn set_occupied(&mut self, occupied: bool) {
        self.occupied = occupied;
    }

    /// Occupied and colored as snake.
    pub fn is_agent_body(&self) -> bool {
        self.occupied && self.color == Color::AgentBody
    }

    /// Occupied and colored as generated content.
    pub fn is_content(&self) -> bool {
        self.occupied && matches!(self.color, Color::Content(_))
    }

    /// Turn this cell into a snake segment in place.
    pub fn mark_agent(&mut self) {
        self.color = Color::AgentBody;
        self.occupied = true;
    }

    /// Clear this cell to empty in place.
    pub fn clear(&mut self) {
        self.color = Color::Empty;
        self.occupied = false;
    }

    /// Copy color and occupancy from `other`, keeping this cell's position.
    pub fn assign_state(&mut self, other: &Cell) {
        self.color = other.color;
        self.occupied = other.occupied;
    }

    /// The same state at a different position.
    pub const fn at(self, coord: HexCoord) -> Self {
        Self { coord, ..self }
    }
}

impl Add<HexCoord> for Cell {
    type Output = Self;

    fn add(self, rhs: HexCoord) -> Self {
        self.at(self.coord + rhs)
    }
}

impl Sub<HexCoord> for Cell {
    type Output = Self;

    fn sub(self, rhs: HexCoord) -> Self {
        self.at(self.coord - rhs)
    }
}

/// A value paired with a logical timestamp.
///
/// Orders by timestamp first, then by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Stamped<T> {
    /// Absolute timestamp in the current time frame.
    pub stamp: Timestamp,
    /// The stamped value.
    pub value: T,
}

impl<T> Stamped<T> {
    /// Pair `value` with `stamp`.
    pub const fn new(stamp: Timestamp, value: T) -> Self {
        Self { stamp, value }
    }

    /// Same value, different timestamp.
    pub fn restamped(self, stamp: Timestamp) -> Self {
        Self {
            stamp,
            value: self.value,
        }
    }
}
