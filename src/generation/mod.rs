//! Core dungeon carving pipeline
//!
//! Runs a configured number of biased random walks over the grid, tracks
//! which walks connected to already-carved territory, and stitches the
//! isolated ones back with a straight hex-line corridor.

pub mod sampler;
pub mod smooth;
pub mod walker;

pub use sampler::{BlockedRegion, DirectionWeights, BOUNDARY_ALPHA};
pub use smooth::{smooth, SmoothRule};
pub use walker::{carve_walk, WalkOutcome};

use std::collections::HashSet;
use std::time::Instant;

use rand::Rng;

use crate::config::{DungeonConfig, MapType};
use crate::error::Result;
use crate::grid::DungeonGrid;
use crate::hex::{lerp, HexCoord, Offset};
use crate::tile::Tile;

/// Cells carved by any walk so far
///
/// Backs two queries: membership (did a walk step onto old territory) and
/// a uniform draw of a repair target. Members are kept in insertion order
/// so the draw is reproducible for a seeded generator.
#[derive(Debug, Clone, Default)]
pub struct VisitedSet {
    members: Vec<Offset>,
    index: HashSet<Offset>,
}

impl VisitedSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell; returns whether it was new
    pub fn insert(&mut self, cell: Offset) -> bool {
        if self.index.insert(cell) {
            self.members.push(cell);
            true
        } else {
            false
        }
    }

    /// Check whether a cell has been carved by an earlier walk
    #[inline]
    pub fn contains(&self, cell: Offset) -> bool {
        self.index.contains(&cell)
    }

    /// Number of distinct carved cells
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check whether no cell has been carved yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Draw a uniformly random member, or `None` when empty
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Offset> {
        if self.members.is_empty() {
            None
        } else {
            Some(self.members[rng.gen_range(0..self.members.len())])
        }
    }
}

/// Everything the carving pipeline produced besides the grid itself
#[derive(Debug, Clone)]
pub struct CarveReport {
    /// One path per walk, in carve order, plus one extra path per repair
    /// corridor (inserted right after the walk it stitched)
    pub paths: Vec<Vec<Offset>>,
    /// How many walks needed a repair corridor
    pub repaired_walks: u32,
}

/// Carve all configured walks into the grid and repair connectivity
///
/// Each walk starts from a random grid cell (for [`MapType::Alley`], from a
/// random cell of an earlier path once one exists) and runs with fresh
/// uniform direction weights. A walk that never touches earlier carved
/// territory is stitched to a random visited cell with a straight
/// [`Tile::Grass`] line, clamped to the grid. The walk's start cell is
/// stamped [`Tile::PavementStart`] last, after any repair.
pub fn carve_dungeon<R: Rng + ?Sized>(
    grid: &mut DungeonGrid,
    config: &DungeonConfig,
    rng: &mut R,
) -> Result<CarveReport> {
    let total_start = Instant::now();
    eprintln!(
        "[carve] Starting: {}x{} grid, {} walks, max length {}, {} map",
        config.width,
        config.height,
        config.walks,
        config.max_walk_length,
        config.map_type.name()
    );

    let blocked = BlockedRegion::default();
    let alpha = config.map_type.continuity_alpha();
    let mut visited = VisitedSet::new();
    let mut paths: Vec<Vec<Offset>> = Vec::with_capacity(config.walks as usize);
    let mut repaired_walks = 0;

    for walk_index in 0..config.walks {
        let start = pick_start(grid, config, &paths, rng);
        let target = visited.random(rng).unwrap_or(start);

        let outcome = carve_walk(
            grid,
            &visited,
            start,
            config.max_walk_length,
            alpha,
            &blocked,
            rng,
        );
        for &cell in &outcome.path {
            visited.insert(cell);
        }

        let needs_repair = walk_index > 0 && !outcome.touched_carved;
        eprintln!(
            "[carve] Walk {}: {} cells from {:?}, touched={}, repair={}",
            walk_index + 1,
            outcome.path.len(),
            start,
            outcome.touched_carved,
            needs_repair
        );
        paths.push(outcome.path);

        if needs_repair {
            paths.push(carve_repair_line(grid, start, target)?);
            repaired_walks += 1;
        }

        grid.set(start, Tile::PavementStart);
    }

    eprintln!(
        "[carve] Finished: {} paths, {} carved cells, {} repairs, total={:?}",
        paths.len(),
        grid.carved_count(),
        repaired_walks,
        total_start.elapsed()
    );

    Ok(CarveReport {
        paths,
        repaired_walks,
    })
}

/// Choose the next walk's start cell
///
/// Alley maps grow off earlier paths: after the first walk, the start is a
/// uniformly random cell over everything carved so far. Otherwise, any grid
/// cell, row drawn before column.
fn pick_start<R: Rng + ?Sized>(
    grid: &DungeonGrid,
    config: &DungeonConfig,
    paths: &[Vec<Offset>],
    rng: &mut R,
) -> Offset {
    if config.map_type == MapType::Alley {
        let total: usize = paths.iter().map(Vec::len).sum();
        if total > 0 {
            let mut index = rng.gen_range(0..total);
            for path in paths {
                if index < path.len() {
                    return path[index];
                }
                index -= path.len();
            }
        }
    }

    Offset::new(
        rng.gen_range(0..grid.height() as i32),
        rng.gen_range(0..grid.width() as i32),
    )
}

/// Carve a straight grass corridor from `start` to `target`
///
/// The interpolated line can stray past the grid edge by at most one cell,
/// so each cell is clamped before carving; clamping keeps consecutive
/// cells adjacent and the corridor contiguous.
fn carve_repair_line(
    grid: &mut DungeonGrid,
    start: Offset,
    target: Offset,
) -> Result<Vec<Offset>> {
    let line = lerp(HexCoord::Offset(start), HexCoord::Offset(target))?;

    let mut corridor = Vec::with_capacity(line.len());
    for coord in line {
        let cell = grid.clamp(Offset::from(coord.to_cube()));
        grid.set(cell, Tile::Grass);
        corridor.push(cell);
    }
    Ok(corridor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DungeonConfigBuilder;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn carve_with_seed(config: &DungeonConfig, seed: u64) -> (DungeonGrid, CarveReport) {
        let mut grid = DungeonGrid::new(config.width, config.height);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let report = carve_dungeon(&mut grid, config, &mut rng).unwrap();
        (grid, report)
    }

    fn cells_with(grid: &DungeonGrid, tile: Tile) -> usize {
        (0..grid.height() as i32)
            .flat_map(|row| (0..grid.width() as i32).map(move |col| Offset::new(row, col)))
            .filter(|&c| grid.get(c) == Some(tile))
            .count()
    }

    #[test]
    fn test_visited_set() {
        let mut visited = VisitedSet::new();
        assert!(visited.is_empty());
        assert!(visited.random(&mut ChaCha8Rng::seed_from_u64(0)).is_none());

        assert!(visited.insert(Offset::new(1, 2)));
        assert!(!visited.insert(Offset::new(1, 2)), "duplicates are ignored");
        assert!(visited.insert(Offset::new(0, 0)));

        assert_eq!(visited.len(), 2);
        assert!(visited.contains(Offset::new(1, 2)));
        assert!(!visited.contains(Offset::new(3, 3)));

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let drawn = visited.random(&mut rng).unwrap();
        assert!(visited.contains(drawn));
    }

    #[test]
    fn test_carve_produces_paths_and_starts() {
        let config = DungeonConfigBuilder::new()
            .seed(1)
            .dimensions(20, 12)
            .unwrap()
            .walks(4)
            .unwrap()
            .max_walk_length(10)
            .unwrap()
            .build()
            .unwrap();

        let (grid, report) = carve_with_seed(&config, config.seed);

        assert!(report.paths.len() >= 4, "one path per walk at minimum");
        assert!(grid.carved_count() > 0);

        let starts = cells_with(&grid, Tile::PavementStart);
        assert!(starts >= 1);
        assert!(starts <= 4);
    }

    #[test]
    fn test_carve_is_deterministic() {
        let config = DungeonConfigBuilder::new()
            .seed(77)
            .dimensions(25, 15)
            .unwrap()
            .walks(5)
            .unwrap()
            .build()
            .unwrap();

        let (first_grid, first) = carve_with_seed(&config, config.seed);
        let (second_grid, second) = carve_with_seed(&config, config.seed);

        assert_eq!(first_grid, second_grid);
        assert_eq!(first.paths, second.paths);
        assert_eq!(first.repaired_walks, second.repaired_walks);
    }

    #[test]
    fn test_carved_region_is_connected() {
        for seed in [3, 19, 1234] {
            let config = DungeonConfigBuilder::new()
                .seed(seed)
                .dimensions(30, 14)
                .unwrap()
                .walks(6)
                .unwrap()
                .max_walk_length(12)
                .unwrap()
                .build()
                .unwrap();

            let (grid, _) = carve_with_seed(&config, seed);
            assert!(grid.is_fully_connected(), "disconnected for seed {}", seed);
        }
    }

    #[test]
    fn test_repair_carves_grass() {
        // With many short walks on a large grid, at least one walk lands
        // away from carved territory and needs stitching.
        let config = DungeonConfigBuilder::new()
            .seed(5)
            .dimensions(40, 20)
            .unwrap()
            .walks(8)
            .unwrap()
            .max_walk_length(4)
            .unwrap()
            .build()
            .unwrap();

        let (grid, report) = carve_with_seed(&config, config.seed);
        assert!(report.repaired_walks > 0);
        assert!(cells_with(&grid, Tile::Grass) > 0, "repair corridors carve grass");
        assert!(grid.is_fully_connected());
    }

    #[test]
    fn test_alley_walks_start_on_earlier_paths() {
        let config = DungeonConfigBuilder::new()
            .seed(9)
            .dimensions(30, 15)
            .unwrap()
            .walks(5)
            .unwrap()
            .map_type(MapType::Alley)
            .build()
            .unwrap();

        let (grid, report) = carve_with_seed(&config, config.seed);
        assert!(grid.carved_count() > 0);

        // Every path after the first begins on a cell some earlier path
        // already contains.
        let mut seen: HashSet<Offset> = report.paths[0].iter().copied().collect();
        for path in &report.paths[1..] {
            let first = path[0];
            assert!(seen.contains(&first), "{:?} not on an earlier path", first);
            seen.extend(path.iter().copied());
        }
    }

    #[test]
    fn test_single_walk_never_repairs() {
        let config = DungeonConfigBuilder::new()
            .seed(2)
            .dimensions(10, 10)
            .unwrap()
            .walks(1)
            .unwrap()
            .build()
            .unwrap();

        let (_, report) = carve_with_seed(&config, config.seed);
        assert_eq!(report.repaired_walks, 0);
        assert_eq!(report.paths.len(), 1);
    }
}
