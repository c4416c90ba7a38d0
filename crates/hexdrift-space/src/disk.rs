//! Hex disk and ring enumeration about the origin.
//!
//! A window of radius `R` covers every cell within `R - 1` steps of the
//! origin: `1 + 3R(R - 1)` cells. Its outermost ring has index `R - 1`.

use hexdrift_core::{Direction, HexCoord};

/// Number of cells in a disk of radius `radius` (centre counted as radius 1).
pub const fn disk_len(radius: u32) -> usize {
    if radius == 0 {
        return 0;
    }
    let r = radius as usize;
    1 + 3 * r * (r - 1)
}

/// Every cell of the disk, sorted ascending by `(line_i, line_k)`.
///
/// Row `I` spans `K` in `[max(-n, I - n), min(n, I + n)]` with `n = radius - 1`,
/// so rows grow towards `I = 0` and shrink after it.
pub fn disk(radius: u32) -> Vec<HexCoord> {
    let mut out = Vec::with_capacity(disk_len(radius));
    if radius == 0 {
        return out;
    }
    let n = (radius - 1) as i32;
    for i in -n..=n {
        for k in (-n).max(i - n)..=n.min(i + n) {
            out.push(HexCoord::new(i, k));
        }
    }
    out
}

/// Cells exactly `ring` steps from the origin, in walking order.
///
/// The walk starts at the corner `ring * SouthWest` and follows the six
/// directions in [`Direction::ALL`] order, `ring` steps each, so the corner
/// `ring * d` sits at position [`corner_position`]`(ring, d)`.
pub fn ring(ring: u32) -> Vec<HexCoord> {
    if ring == 0 {
        return vec![HexCoord::ZERO];
    }
    let n = ring as i32;
    let mut out = Vec::with_capacity(6 * ring as usize);
    let mut cursor = Direction::SouthWest.offset() * n;
    for d in Direction::ALL {
        for _ in 0..n {
            out.push(cursor);
            cursor = cursor + d.offset();
        }
    }
    out
}

/// Position of the corner `ring * corner` within [`ring`]`(ring)`.
pub const fn corner_position(ring: u32, corner: Direction) -> usize {
    ((corner.index() + 2) % 6) * ring as usize
}

/// Cells whose content becomes undefined when the window contents move
/// one step along `dir`.
///
/// After the move every cell `c` takes the content of `c - dir`; the cells
/// without such a source are the outer-ring cells within `R - 1` walking
/// steps of the corner `(R - 1) * -dir`: `2R - 1` cells. The engine moves
/// content opposite to the agent, so `-dir` is the direction of travel and
/// these cells form the leading edge.
pub fn exposed_edge(radius: u32, dir: Direction) -> Vec<HexCoord> {
    if radius == 0 {
        return Vec::new();
    }
    let n = radius - 1;
    let cells = ring(n);
    if n == 0 {
        return cells;
    }
    let len = cells.len();
    let corner = corner_position(n, dir.opposite());
    (0..=2 * n as usize)
        .map(|step| cells[(corner + len + step - n as usize) % len])
        .collect()
}
