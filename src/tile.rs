//! Tile states for dungeon grid cells

/// Tile states a grid cell can take
///
/// Every grid starts as solid `Wall`; the carving passes replace walls with
/// the walkable variants below. Anything that is not a wall counts as
/// carved, walkable space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    /// Uncarved rock, the initial state of every cell
    #[default]
    Wall,
    /// Ordinary carved floor
    Pavement,
    /// First cell of a walk
    PavementStart,
    /// Final cell of a walk that used up its full length
    PavementEnd,
    /// Corridor stitched between a disconnected walk and carved territory
    Grass,
}

impl Tile {
    /// Check if this tile is solid wall
    #[inline]
    pub fn is_wall(&self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// Check if this tile has been carved (any walkable variant)
    #[inline]
    pub fn is_carved(&self) -> bool {
        !self.is_wall()
    }
}
