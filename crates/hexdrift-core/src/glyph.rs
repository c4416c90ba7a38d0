//! Text rendering of the legacy color namespace.
//!
//! The glyph table is a compatibility contract with text-mode consumers
//! and must not change:
//!
//! | legacy index | glyph |
//! |--------------|-------|
//! | `-2` | `X` |
//! | `-1` | `O` |
//! | `0..=9` | `0`-`9` |
//! | `10..=35` | `A`-`Z` |
//! | `36..=61` | `a`-`z` |
//! | `62` | `+` |
//! | `63` | `-` |
//! | anything else | `?` |

use crate::traits::RenderSource;

/// Map a legacy color index to its glyph.
pub fn glyph(index: i32) -> char {
    match index {
        -2 => 'X',
        -1 => 'O',
        0..=9 => char::from(b'0' + index as u8),
        10..=35 => char::from(b'A' + (index - 10) as u8),
        36..=61 => char::from(b'a' + (index - 36) as u8),
        62 => '+',
        63 => '-',
        _ => '?',
    }
}

/// Draw the window of `source` as a hexagon of glyphs, one row per line `I`.
///
/// Rows are indented by `|I|` so neighbouring rows interleave. Does not
/// consume the grid-updated flag.
pub fn ascii_art<S: RenderSource + ?Sized>(source: &S) -> String {
    let blocks = source.blocks();
    let mut out = String::with_capacity(blocks.len() * 2 + 2 * source.radius() as usize);
    for row in blocks.chunk_by(|a, b| a.coord().line_i() == b.coord().line_i()) {
        if !out.is_empty() {
            out.push('\n');
        }
        let indent = row[0].coord().line_i().unsigned_abs() as usize;
        out.extend(std::iter::repeat_n(' ', indent));
        for (n, cell) in row.iter().enumerate() {
            if n > 0 {
                out.push(' ');
            }
            out.push(cell.color().glyph());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::coord::HexCoord;

    struct Fixed(Vec<Cell>, u32);

    impl RenderSource for Fixed {
        fn blocks(&self) -> Vec<Cell> {
            self.0.clone()
        }
        fn radius(&self) -> u32 {
            self.1
        }
        fn is_grid_updated(&self) -> bool {
            false
        }
    }

    #[test]
    fn glyph_table_is_exact() {
        assert_eq!(glyph(-2), 'X');
        assert_eq!(glyph(-1), 'O');
        assert_eq!(glyph(0), '0');
        assert_eq!(glyph(9), '9');
        assert_eq!(glyph(10), 'A');
        assert_eq!(glyph(35), 'Z');
        assert_eq!(glyph(36), 'a');
        assert_eq!(glyph(61), 'z');
        assert_eq!(glyph(62), '+');
        assert_eq!(glyph(63), '-');
        assert_eq!(glyph(64), '?');
        assert_eq!(glyph(-3), '?');
        assert_eq!(glyph(i32::MAX), '?');
    }

    #[test]
    fn ascii_art_draws_a_hexagon() {
        // Radius 2 disk, sorted by (I, K).
        let coords = [
            (-1, -1),
            (-1, 0),
            (0, -1),
            (0, 0),
            (0, 1),
            (1, 0),
            (1, 1),
        ];
        let mut cells: Vec<Cell> = coords
            .iter()
            .map(|&(i, k)| Cell::empty(HexCoord::new(i, k)))
            .collect();
        cells[3] = Cell::agent(HexCoord::ZERO);
        cells[6] = Cell::content(HexCoord::new(1, 1), 11);
        let art = ascii_art(&Fixed(cells, 2));
        assert_eq!(art, " O O\nO X O\n O B");
    }
}
