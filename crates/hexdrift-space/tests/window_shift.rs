//! Window shifting against a brute-force model of an infinite world.
//!
//! The world paints every absolute coordinate with a color derived from its
//! position. After any sequence of shifts, every window cell must show the
//! world content at `local + origin`, and the window must stay sorted.

use hexdrift_core::{Cell, Color, Direction, HexCoord};
use hexdrift_space::{disk_len, exposed_edge, WindowManager};
use hexdrift_test_utils::RecordingSource;
use proptest::prelude::*;

fn paint(abs: HexCoord) -> Color {
    Color::Content((abs.line_i() * 7 + abs.line_k() * 31).rem_euclid(251) as u8)
}

fn world_at(origin: HexCoord) -> impl FnMut(&[HexCoord]) -> Vec<Cell> {
    move |coords: &[HexCoord]| {
        coords
            .iter()
            .map(|&c| Cell::with_color(c, paint(c + origin), true))
            .collect()
    }
}

fn assert_matches_world(w: &WindowManager, origin: HexCoord) {
    for cell in w.blocks() {
        assert_eq!(
            cell.color(),
            paint(cell.coord() + origin),
            "cell {} disagrees with the world at origin {}",
            cell.coord(),
            origin
        );
    }
}

#[test]
fn every_direction_fetches_only_the_exposed_edge() {
    for radius in 1..6u32 {
        for d in Direction::ALL {
            let mut w = WindowManager::new(radius).unwrap();
            w.reset(&mut world_at(HexCoord::ZERO)).unwrap();

            let origin = -d.offset();
            let mut source = RecordingSource::new(world_at(origin));
            w.shift(d, &mut source).unwrap();

            assert_eq!(source.calls(), 1);
            let requested = source.requested();
            assert_eq!(requested.len(), 2 * radius as usize - 1);
            for c in requested {
                assert!(!(*c - d.offset()).within_range(radius - 1));
            }
            assert_matches_world(&w, origin);
        }
    }
}

#[test]
fn consecutive_shifts_each_fetch_their_own_edge() {
    let radius = 3;
    let mut w = WindowManager::new(radius).unwrap();
    let mut source = RecordingSource::new(|coords: &[HexCoord]| -> Vec<Cell> {
        coords.iter().copied().map(Cell::empty).collect()
    });
    w.reset(&mut source).unwrap();
    assert_eq!(source.requested().len(), disk_len(radius));

    for d in [Direction::East, Direction::East, Direction::SouthWest] {
        source.clear();
        w.shift(d, &mut source).unwrap();
        assert_eq!(source.calls(), 1);
        let mut requested = source.requested().to_vec();
        let mut edge = exposed_edge(radius, d);
        requested.sort();
        edge.sort();
        assert_eq!(requested, edge);
    }
}

#[test]
fn round_trip_restores_content() {
    let mut w = WindowManager::new(4).unwrap();
    w.reset(&mut world_at(HexCoord::ZERO)).unwrap();
    let before = w.blocks().to_vec();
    for d in Direction::ALL {
        let origin = -d.offset();
        w.shift(d, &mut world_at(origin)).unwrap();
        w.shift(d.opposite(), &mut world_at(HexCoord::ZERO)).unwrap();
    }
    assert_eq!(w.blocks(), &before[..]);
}

proptest! {
    #[test]
    fn random_walk_tracks_the_world(
        radius in 1u32..7,
        steps in prop::collection::vec(0usize..6, 0..60),
    ) {
        let mut w = WindowManager::new(radius).unwrap();
        let mut origin = HexCoord::ZERO;
        w.reset(&mut world_at(origin)).unwrap();
        for s in steps {
            let d = Direction::from_index(s);
            origin = origin - d.offset();
            prop_assert_eq!(w.shift(d, &mut world_at(origin)).unwrap(), 2 * radius as usize - 1);
            prop_assert_eq!(w.len(), disk_len(radius));
            prop_assert!(w.blocks().windows(2).all(|p| p[0].coord() < p[1].coord()));
        }
        assert_matches_world(&w, origin);
    }
}
