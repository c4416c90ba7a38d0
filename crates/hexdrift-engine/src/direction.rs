//! The single-slot steering input shared between input and tick threads.

use std::sync::{Mutex, MutexGuard, PoisonError};

use hexdrift_core::{Direction, HexCoord};

/// Holds the direction the next tick will move in.
///
/// Writers turn the slot; the tick reads it once per tick. Turns that
/// arrive between two ticks coalesce, last write wins.
#[derive(Debug)]
pub struct DirectionManager {
    index: Mutex<usize>,
}

impl DirectionManager {
    /// A slot pointing at `initial`.
    pub fn new(initial: Direction) -> Self {
        Self {
            index: Mutex::new(initial.index()),
        }
    }

    fn slot(&self) -> MutexGuard<'_, usize> {
        // A usize cannot be left half-written, so a poisoned slot is still valid.
        self.index.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Turn one step clockwise.
    pub fn increment(&self) {
        let mut index = self.slot();
        *index = (*index + 1) % 6;
    }

    /// Turn one step counter-clockwise.
    pub fn decrement(&self) {
        let mut index = self.slot();
        *index = (*index + 5) % 6;
    }

    /// Turn one step in the given sense.
    pub fn turn(&self, clockwise: bool) {
        if clockwise {
            self.increment();
        } else {
            self.decrement();
        }
    }

    /// Synchronize with pending writers without turning.
    pub fn noop(&self) {
        drop(self.slot());
    }

    /// Point the slot at `direction`.
    pub fn set(&self, direction: Direction) {
        *self.slot() = direction.index();
    }

    /// Current direction.
    pub fn direction(&self) -> Direction {
        Direction::from_index(*self.slot())
    }

    /// Current direction as a unit offset.
    pub fn offset(&self) -> HexCoord {
        self.direction().offset()
    }
}

impl Default for DirectionManager {
    fn default() -> Self {
        Self::new(Direction::East)
    }
}
