//! Text rendering for finished grids
//!
//! Turns a tile grid into a symbolic character stream, one glyph per cell,
//! one line per row.

mod glyphs;

pub use glyphs::{BasicGlyphMapper, CustomGlyphMapper, GlyphMapper};

use crate::grid::DungeonGrid;
use crate::hex::Offset;

/// Render a grid as text, one line per row
///
/// Rows appear top to bottom in row order; the hex layout's half-cell
/// column shifts are not drawn.
///
/// # Example
///
/// ```
/// use hex_dungeon_walk::*;
///
/// let grid = DungeonGrid::new(3, 2);
/// let text = render_text(&grid, &BasicGlyphMapper);
/// assert_eq!(text, "###\n###");
/// ```
pub fn render_text<M: GlyphMapper>(grid: &DungeonGrid, mapper: &M) -> String {
    let mut out = String::with_capacity((grid.width() as usize + 1) * grid.height() as usize);

    for row in 0..grid.height() as i32 {
        if row > 0 {
            out.push('\n');
        }
        for col in 0..grid.width() as i32 {
            // get() cannot miss inside the loop bounds
            if let Some(tile) = grid.get(Offset::new(row, col)) {
                out.push(mapper.map_glyph(&tile));
            }
        }
    }
    out
}
