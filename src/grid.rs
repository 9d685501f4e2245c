//! Dungeon grid storage and neighbor queries

use std::collections::{HashSet, VecDeque};

use crate::hex::{Cube, Offset};
use crate::tile::Tile;

/// A rectangular hex grid of tiles
///
/// Cells are addressed by [`Offset`] coordinates and stored row-major.
/// Dimensions are fixed at construction; every cell starts as [`Tile::Wall`].
/// All access is bounds-checked, so no write can land outside the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DungeonGrid {
    width: u32,
    height: u32,
    tiles: Vec<Tile>,
}

impl DungeonGrid {
    /// Create a wall-filled grid with the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::Wall; width as usize * height as usize],
        }
    }

    /// Grid width in columns
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in rows
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether a cell lies inside the grid
    #[inline]
    pub fn in_bounds(&self, cell: Offset) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as u32) < self.height
            && (cell.col as u32) < self.width
    }

    /// Clamp a cell component-wise into the grid
    pub fn clamp(&self, cell: Offset) -> Offset {
        Offset::new(
            cell.row.clamp(0, self.height.saturating_sub(1) as i32),
            cell.col.clamp(0, self.width.saturating_sub(1) as i32),
        )
    }

    fn index(&self, cell: Offset) -> usize {
        cell.row as usize * self.width as usize + cell.col as usize
    }

    /// Get the tile at a cell, or `None` outside the grid
    pub fn get(&self, cell: Offset) -> Option<Tile> {
        if self.in_bounds(cell) {
            Some(self.tiles[self.index(cell)])
        } else {
            None
        }
    }

    /// Set the tile at a cell
    ///
    /// Returns whether the write landed inside the grid; out-of-bounds
    /// writes are rejected.
    pub fn set(&mut self, cell: Offset, tile: Tile) -> bool {
        if self.in_bounds(cell) {
            let index = self.index(cell);
            self.tiles[index] = tile;
            true
        } else {
            false
        }
    }

    /// The six neighboring cells in direction-table order
    ///
    /// Neighbors may lie outside the grid; callers filter with
    /// [`in_bounds`](Self::in_bounds) as needed.
    pub fn neighbors(&self, cell: Offset) -> [Offset; 6] {
        let cube = Cube::from(cell);
        let mut cells = [Offset::new(0, 0); 6];
        for (direction, slot) in cells.iter_mut().enumerate() {
            *slot = Offset::from(cube.neighbor(direction));
        }
        cells
    }

    /// Count wall-state neighbors of a cell
    ///
    /// Cells outside the grid count as walls.
    pub fn wall_neighbor_count(&self, cell: Offset) -> u32 {
        self.neighbors(cell)
            .iter()
            .filter(|n| self.get(**n).map_or(true, |tile| tile.is_wall()))
            .count() as u32
    }

    /// Number of carved (non-wall) cells
    pub fn carved_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_carved()).count()
    }

    /// Check that the carved cells form one connected region
    ///
    /// Flood-fills from an arbitrary carved cell over hex adjacency and
    /// compares the reach against the carved census. A grid with no carved
    /// cells counts as connected.
    pub fn is_fully_connected(&self) -> bool {
        let start = match self.first_carved() {
            Some(cell) => cell,
            None => return true,
        };

        let mut visited = HashSet::new();
        let mut frontier = VecDeque::new();
        visited.insert(start);
        frontier.push_back(start);

        while let Some(current) = frontier.pop_front() {
            for neighbor in self.neighbors(current) {
                let carved = self
                    .get(neighbor)
                    .map_or(false, |tile| tile.is_carved());
                if carved && visited.insert(neighbor) {
                    frontier.push_back(neighbor);
                }
            }
        }

        visited.len() == self.carved_count()
    }

    fn first_carved(&self) -> Option<Offset> {
        self.tiles.iter().position(|t| t.is_carved()).map(|index| {
            Offset::new(
                (index / self.width as usize) as i32,
                (index % self.width as usize) as i32,
            )
        })
    }
}
