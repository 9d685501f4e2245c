//! Single random-walk carving pass

use rand::Rng;

use crate::generation::sampler::{BlockedRegion, DirectionWeights, BOUNDARY_ALPHA};
use crate::generation::VisitedSet;
use crate::grid::DungeonGrid;
use crate::hex::{Cube, Offset};
use crate::tile::Tile;

/// Result of one carving walk
#[derive(Debug, Clone)]
pub struct WalkOutcome {
    /// Cells visited, in carving order
    pub path: Vec<Offset>,
    /// Whether the walk stepped onto territory carved by an earlier walk
    pub touched_carved: bool,
}

fn step(cell: Offset, direction: usize) -> Offset {
    Offset::from(Cube::from(cell).neighbor(direction))
}

/// Carve one bounded random walk into the grid
///
/// Starting from `start` with fresh uniform weights, the walk marks its
/// cell, samples a direction, rescales the weights with `continuity_alpha`
/// and advances, for at most `max_length` steps. The final cell is marked
/// [`Tile::PavementEnd`]. Leaving the grid truncates the walk: the bounds
/// check precedes every write, so nothing lands outside.
///
/// A step that would exit the grid triggers one resample after rescaling
/// with [`BOUNDARY_ALPHA`]; the resampled direction is taken as-is, and a
/// second boundary hit simply truncates on the next iteration.
pub fn carve_walk<R: Rng + ?Sized>(
    grid: &mut DungeonGrid,
    visited: &VisitedSet,
    start: Offset,
    max_length: u32,
    continuity_alpha: f64,
    blocked: &BlockedRegion,
    rng: &mut R,
) -> WalkOutcome {
    let mut weights = DirectionWeights::uniform();
    let mut path = Vec::new();
    let mut touched_carved = false;
    let mut current = start;
    let mut remaining = max_length;

    loop {
        if !grid.in_bounds(current) {
            break;
        }

        if remaining == 0 {
            grid.set(current, Tile::PavementEnd);
            if visited.contains(current) {
                touched_carved = true;
            }
            path.push(current);
            break;
        }

        grid.set(current, Tile::Pavement);
        if visited.contains(current) {
            touched_carved = true;
        }
        path.push(current);

        let mut direction = weights.sample(rng);
        if !grid.in_bounds(step(current, direction)) {
            weights.recompute(direction, blocked, BOUNDARY_ALPHA);
            direction = weights.sample(rng);
        }
        weights.recompute(direction, blocked, continuity_alpha);

        current = step(current, direction);
        remaining -= 1;
    }

    WalkOutcome {
        path,
        touched_carved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn walk_on(
        grid: &mut DungeonGrid,
        visited: &VisitedSet,
        start: Offset,
        max_length: u32,
        seed: u64,
    ) -> WalkOutcome {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        carve_walk(
            grid,
            visited,
            start,
            max_length,
            0.0,
            &BlockedRegion::default(),
            &mut rng,
        )
    }

    #[test]
    fn test_out_of_bounds_start_is_truncated_to_nothing() {
        let mut grid = DungeonGrid::new(3, 3);
        let outcome = walk_on(&mut grid, &VisitedSet::new(), Offset::new(5, 5), 10, 1);

        assert!(outcome.path.is_empty());
        assert!(!outcome.touched_carved);
        assert_eq!(grid.carved_count(), 0);
    }

    #[test]
    fn test_zero_length_walk_marks_single_end() {
        let mut grid = DungeonGrid::new(3, 3);
        let start = Offset::new(1, 1);
        let outcome = walk_on(&mut grid, &VisitedSet::new(), start, 0, 1);

        assert_eq!(outcome.path, vec![start]);
        assert_eq!(grid.get(start), Some(Tile::PavementEnd));
        assert_eq!(grid.carved_count(), 1);
    }

    #[test]
    fn test_walk_far_from_edges_runs_full_length() {
        // Three steps cannot reach the edge from the center of a 20x20
        // grid, so the walk always uses its whole budget.
        let mut grid = DungeonGrid::new(20, 20);
        let start = Offset::new(10, 10);
        let outcome = walk_on(&mut grid, &VisitedSet::new(), start, 3, 99);

        assert_eq!(outcome.path.len(), 4);
        assert_eq!(outcome.path[0], start);
        assert!(!outcome.touched_carved);

        let last = *outcome.path.last().unwrap();
        assert_eq!(grid.get(last), Some(Tile::PavementEnd));
        for &cell in &outcome.path {
            assert!(grid.in_bounds(cell));
            if cell != last {
                assert_eq!(grid.get(cell), Some(Tile::Pavement));
            }
        }
    }

    #[test]
    fn test_walk_path_is_contiguous() {
        let mut grid = DungeonGrid::new(30, 30);
        let outcome = walk_on(&mut grid, &VisitedSet::new(), Offset::new(15, 15), 12, 5);

        for pair in outcome.path.windows(2) {
            let a = Cube::from(pair[0]);
            let b = Cube::from(pair[1]);
            assert_eq!(a.distance(b), 1);
        }
    }

    #[test]
    fn test_walk_on_tiny_grid_stays_in_bounds() {
        for seed in 0..8 {
            let mut grid = DungeonGrid::new(2, 2);
            let outcome = walk_on(&mut grid, &VisitedSet::new(), Offset::new(0, 0), 10, seed);

            assert!(!outcome.path.is_empty());
            for &cell in &outcome.path {
                assert!(grid.in_bounds(cell), "cell {:?} escaped (seed {})", cell, seed);
            }
        }
    }

    #[test]
    fn test_walk_reports_touching_carved_territory() {
        let mut grid = DungeonGrid::new(3, 3);
        let start = Offset::new(1, 1);

        let mut visited = VisitedSet::new();
        visited.insert(start);

        let outcome = walk_on(&mut grid, &visited, start, 2, 3);
        assert!(outcome.touched_carved);

        let mut fresh_grid = DungeonGrid::new(30, 30);
        let outcome = walk_on(&mut fresh_grid, &VisitedSet::new(), Offset::new(15, 15), 2, 3);
        assert!(!outcome.touched_carved);
    }

    #[test]
    fn test_walk_is_deterministic_for_a_seed() {
        let mut first_grid = DungeonGrid::new(12, 12);
        let first = walk_on(&mut first_grid, &VisitedSet::new(), Offset::new(6, 6), 20, 11);

        let mut second_grid = DungeonGrid::new(12, 12);
        let second = walk_on(&mut second_grid, &VisitedSet::new(), Offset::new(6, 6), 20, 11);

        assert_eq!(first.path, second.path);
        assert_eq!(first_grid, second_grid);
    }
}
