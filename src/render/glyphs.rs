//! Glyph mapping for tile states

use crate::tile::Tile;

/// Trait for mapping tile states to display characters
pub trait GlyphMapper {
    /// Map a tile state to a single character
    fn map_glyph(&self, tile: &Tile) -> char;
}

/// Default glyph mapper
///
/// Renders every carved variant identically: walls are `#`, everything
/// walkable is `.`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicGlyphMapper;

impl GlyphMapper for BasicGlyphMapper {
    fn map_glyph(&self, tile: &Tile) -> char {
        match tile {
            Tile::Wall => '#',
            _ => '.',
        }
    }
}

/// Glyph mapper with a configurable character per tile state
///
/// The defaults give each state its own glyph, useful for debugging walk
/// endpoints and repair corridors.
#[derive(Debug, Clone)]
pub struct CustomGlyphMapper {
    pub wall: char,
    pub pavement: char,
    pub pavement_start: char,
    pub pavement_end: char,
    pub grass: char,
}

impl Default for CustomGlyphMapper {
    fn default() -> Self {
        Self {
            wall: '#',
            pavement: '.',
            pavement_start: '*',
            pavement_end: '~',
            grass: '@',
        }
    }
}

impl GlyphMapper for CustomGlyphMapper {
    fn map_glyph(&self, tile: &Tile) -> char {
        match tile {
            Tile::Wall => self.wall,
            Tile::Pavement => self.pavement,
            Tile::PavementStart => self.pavement_start,
            Tile::PavementEnd => self.pavement_end,
            Tile::Grass => self.grass,
        }
    }
}
