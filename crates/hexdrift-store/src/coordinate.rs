//! The moving origin that separates window-local and world coordinates.

use hexdrift_core::{Cell, Direction, HexCoord, HexError};
use tracing::debug;

use crate::error::StoreError;
use crate::frame::RebasingFrame;

/// Largest accepted spatial range. Keeps `origin + local` far from `i32`
/// overflow for any window that fits in memory.
pub const MAX_SPATIAL_RANGE: u32 = 1 << 28;

/// Tracks where local zero sits in world space.
///
/// `world = local + origin`. The origin walks with the agent and snaps back
/// to zero after `move_limit` moves or once it leaves `spatial_range`.
#[derive(Clone, Debug)]
pub struct CoordinateManager {
    frame: RebasingFrame<HexCoord>,
    spatial_range: u32,
}

impl CoordinateManager {
    /// An origin at zero.
    pub fn new(move_limit: u64, spatial_range: u32) -> Result<Self, StoreError> {
        if move_limit == 0 {
            return Err(StoreError::InvalidMoveLimit { value: move_limit });
        }
        if spatial_range == 0 || spatial_range > MAX_SPATIAL_RANGE {
            return Err(StoreError::InvalidSpatialRange {
                value: spatial_range,
            });
        }
        Ok(Self {
            frame: RebasingFrame::new(HexCoord::ZERO, move_limit),
            spatial_range,
        })
    }

    /// Current origin in world space.
    pub fn origin(&self) -> HexCoord {
        self.frame.current()
    }

    /// Moves since the last rebase.
    pub fn moves(&self) -> u64 {
        self.frame.steps()
    }

    /// Move the origin one step by `offset`.
    ///
    /// Returns `Some(tentative_origin)` when the frame rebased to zero; the
    /// caller re-expresses each world coordinate it owns as
    /// `coord - tentative_origin`. Rejects offsets that are not a unit
    /// direction without touching the frame.
    pub fn move_by(&mut self, offset: HexCoord) -> Result<Option<HexCoord>, HexError> {
        Direction::try_from(offset)?;
        let range = self.spatial_range;
        let rebased = self
            .frame
            .advance(offset, |tentative| tentative.within_range(range));
        if let Some(shift) = rebased {
            debug!(%shift, "coordinate frame rebased");
        }
        Ok(rebased)
    }

    /// Local to world.
    pub fn to_absolute(&self, local: HexCoord) -> HexCoord {
        self.frame.to_absolute(local)
    }

    /// World to local.
    pub fn to_relative(&self, world: HexCoord) -> HexCoord {
        self.frame.to_relative(world)
    }

    /// A local cell moved to its world position.
    pub fn cell_to_absolute(&self, cell: Cell) -> Cell {
        cell + self.origin()
    }

    /// A world cell moved to its local position.
    pub fn cell_to_relative(&self, cell: Cell) -> Cell {
        cell - self.origin()
    }

    /// Element-wise [`to_absolute`](Self::to_absolute).
    pub fn all_to_absolute(&self, coords: &[HexCoord]) -> Vec<HexCoord> {
        coords.iter().map(|&c| self.to_absolute(c)).collect()
    }

    /// Element-wise [`to_relative`](Self::to_relative).
    pub fn all_to_relative(&self, coords: &[HexCoord]) -> Vec<HexCoord> {
        coords.iter().map(|&c| self.to_relative(c)).collect()
    }

    /// Element-wise [`cell_to_relative`](Self::cell_to_relative), in place.
    pub fn cells_to_relative(&self, cells: &mut [Cell]) {
        let origin = self.origin();
        for cell in cells {
            *cell = *cell - origin;
        }
    }

    /// Return the origin to zero.
    pub fn reset(&mut self) {
        self.frame.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_invalid_parameters() {
        assert!(matches!(
            CoordinateManager::new(0, 5),
            Err(StoreError::InvalidMoveLimit { .. })
        ));
        assert!(matches!(
            CoordinateManager::new(5, 0),
            Err(StoreError::InvalidSpatialRange { .. })
        ));
        assert!(CoordinateManager::new(5, MAX_SPATIAL_RANGE + 1).is_err());
    }

    #[test]
    fn rejects_non_unit_offsets_without_moving() {
        let mut m = CoordinateManager::new(10, 10).unwrap();
        assert!(m.move_by(HexCoord::ZERO).is_err());
        assert!(m.move_by(HexCoord::new(2, 0)).is_err());
        assert_eq!(m.moves(), 0);
        assert_eq!(m.origin(), HexCoord::ZERO);
    }

    #[test]
    fn rebases_after_move_limit() {
        let mut m = CoordinateManager::new(3, 100).unwrap();
        let e = Direction::East.offset();
        assert_eq!(m.move_by(e).unwrap(), None);
        assert_eq!(m.move_by(e).unwrap(), None);
        assert_eq!(m.origin(), e * 2);
        assert_eq!(m.move_by(e).unwrap(), Some(e * 3));
        assert_eq!(m.origin(), HexCoord::ZERO);
        assert_eq!(m.moves(), 0);
    }

    #[test]
    fn rebases_when_leaving_range() {
        let mut m = CoordinateManager::new(1000, 2).unwrap();
        let w = Direction::West.offset();
        assert_eq!(m.move_by(w).unwrap(), None);
        assert_eq!(m.move_by(w).unwrap(), None);
        assert_eq!(m.move_by(w).unwrap(), Some(w * 3));
    }

    #[test]
    fn rebased_world_coords_keep_their_local_position() {
        let mut m = CoordinateManager::new(2, 100).unwrap();
        let ne = Direction::NorthEast.offset();
        m.move_by(ne).unwrap();
        let local = HexCoord::new(3, -1);
        let world = m.to_absolute(local);
        let shift = m.move_by(ne).unwrap().unwrap();
        // After the move, `local` sits one step closer to the agent.
        assert_eq!(m.to_relative(world - shift), local - ne);
    }

    #[test]
    fn cell_conversion_keeps_state() {
        let mut m = CoordinateManager::new(10, 10).unwrap();
        m.move_by(Direction::SouthEast.offset()).unwrap();
        let c = Cell::content(HexCoord::new(1, 1), 3);
        let abs = m.cell_to_absolute(c);
        assert_eq!(abs.coord(), HexCoord::new(1, 2));
        assert_eq!(m.cell_to_relative(abs), c);
        let mut cells = vec![abs];
        m.cells_to_relative(&mut cells);
        assert_eq!(cells, vec![c]);
    }

    proptest! {
        #[test]
        fn origin_round_trip(
            moves in prop::collection::vec(0usize..6, 0..40),
            i in -1000i32..1000,
            k in -1000i32..1000,
        ) {
            let mut m = CoordinateManager::new(1_000, 1_000).unwrap();
            for d in moves {
                m.move_by(Direction::from_index(d).offset()).unwrap();
            }
            let x = HexCoord::new(i, k);
            prop_assert_eq!(m.to_relative(m.to_absolute(x)), x);
            prop_assert_eq!(m.to_absolute(m.to_relative(x)), x);
            prop_assert_eq!(m.all_to_relative(&m.all_to_absolute(&[x])), vec![x]);
        }
    }
}
