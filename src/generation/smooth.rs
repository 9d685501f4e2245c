//! Cellular-automata smoothing pass

use crate::grid::DungeonGrid;
use crate::hex::Offset;
use crate::tile::Tile;

/// Neighbor-count thresholds for the smoothing rule
///
/// A wall with at most `open_max_walls` wall neighbors opens into pavement;
/// a carved cell with more than `close_min_walls` wall neighbors closes
/// back into wall. Cells outside the grid count as walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmoothRule {
    /// Highest wall-neighbor count at which a wall still opens
    pub open_max_walls: u32,
    /// Lowest wall-neighbor count above which a carved cell closes
    pub close_min_walls: u32,
}

impl Default for SmoothRule {
    fn default() -> Self {
        Self {
            open_max_walls: 3,
            close_min_walls: 4,
        }
    }
}

/// Apply one smoothing pass over the whole grid, in place
///
/// Cells are visited row-major and rewritten as they are visited, so
/// neighbor counts for later cells already see earlier rewrites of the same
/// pass. Opening a wall requires three carved neighbors, so opened cells
/// attach to existing carved territory; closing only ever removes dead-end
/// stubs. Neither rewrite can split a connected dungeon.
pub fn smooth(grid: &mut DungeonGrid, rule: SmoothRule) {
    for row in 0..grid.height() as i32 {
        for col in 0..grid.width() as i32 {
            let cell = Offset::new(row, col);
            let walls = grid.wall_neighbor_count(cell);

            // get() cannot miss inside the loop bounds
            match grid.get(cell) {
                Some(Tile::Wall) if walls <= rule.open_max_walls => {
                    grid.set(cell, Tile::Pavement);
                }
                Some(tile) if tile.is_carved() && walls > rule.close_min_walls => {
                    grid.set(cell, Tile::Wall);
                }
                _ => {}
            }
        }
    }
}
