//! Weighted direction sampling
//!
//! Each walk keeps a probability weight per hex direction. After every
//! step the weights are rescaled by how far each candidate direction lies
//! from the one just taken, measured as a breadth-first walk around a
//! blocked region; the exponent's sign turns that into momentum or
//! avoidance.

use std::collections::HashSet;

use rand::Rng;

use crate::hex::{ring, shortest_path_len, Cube};

/// Weight-recompute exponent applied when a step would leave the grid
///
/// Strongly negative, so the resample is steered away from the direction
/// group that just hit the boundary.
pub const BOUNDARY_ALPHA: f64 = -10.0;

/// Heuristic distance assigned to direction pairs with no path between
/// them. Strictly larger than any distance the default region produces.
const UNREACHABLE_DISTANCE: u32 = 6;

/// Obstacle mask for the direction-distance heuristic
///
/// The default region is the origin plus its radius-2 ring. That pens the
/// six direction cells into a closed loop, so their pairwise breadth-first
/// distances become loop-walk distances: 1 for adjacent directions, 2 for
/// two apart, 3 for opposite.
#[derive(Debug, Clone)]
pub struct BlockedRegion {
    cells: HashSet<Cube>,
}

impl BlockedRegion {
    /// Create a region from an explicit cell set
    pub fn new(cells: HashSet<Cube>) -> Self {
        Self { cells }
    }

    /// The blocked cells
    #[inline]
    pub fn cells(&self) -> &HashSet<Cube> {
        &self.cells
    }

    /// Check whether a cell is blocked
    #[inline]
    pub fn contains(&self, cell: Cube) -> bool {
        self.cells.contains(&cell)
    }

    /// Number of blocked cells
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check whether the region is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Default for BlockedRegion {
    fn default() -> Self {
        let mut cells: HashSet<Cube> = ring(Cube::ORIGIN, 2).into_iter().collect();
        cells.insert(Cube::ORIGIN);
        Self { cells }
    }
}

/// Probability weights over the six hex directions
///
/// Weights stay normalized: they sum to 1 and the sampling bins cover the
/// whole unit interval, so every draw maps to a direction index.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionWeights {
    weights: [f64; 6],
}

impl DirectionWeights {
    /// Equal probability for every direction
    pub fn uniform() -> Self {
        Self {
            weights: [1.0 / 6.0; 6],
        }
    }

    /// Current weight of one direction
    #[inline]
    pub fn get(&self, direction: usize) -> f64 {
        self.weights[direction]
    }

    /// Draw a direction index according to the current weights
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.pick_bin(rng.gen::<f64>())
    }

    /// Map a unit-interval draw onto a direction via prefix-sum bins
    ///
    /// The final bin absorbs everything past the last edge, so accumulated
    /// floating-point error can never push a draw out of range.
    fn pick_bin(&self, u: f64) -> usize {
        let mut edge = 0.0;
        for (direction, weight) in self.weights.iter().enumerate().take(5) {
            edge += weight;
            if u < edge {
                return direction;
            }
        }
        5
    }

    /// Rescale the weights after a step in direction `chosen`
    ///
    /// Every direction `d` is multiplied by `exp(-alpha * h)` where `h` is
    /// the heuristic distance from `chosen` to `d` around `blocked`, then
    /// the vector is renormalized. Positive `alpha` suppresses directions
    /// far from the last step (momentum); negative `alpha` favors them
    /// (avoidance, see [`BOUNDARY_ALPHA`]).
    pub fn recompute(&mut self, chosen: usize, blocked: &BlockedRegion, alpha: f64) {
        for (direction, weight) in self.weights.iter_mut().enumerate() {
            let h = direction_distance(chosen, direction, blocked);
            *weight *= (-alpha * f64::from(h)).exp();
        }
        self.normalize();
    }

    fn normalize(&mut self) {
        let total: f64 = self.weights.iter().sum();
        if total > 0.0 {
            for weight in &mut self.weights {
                *weight /= total;
            }
        }
    }
}

/// Heuristic distance between two direction cells, walking around `blocked`
///
/// Unreachable pairs count as [`UNREACHABLE_DISTANCE`]; the result is never
/// below 1, so the chosen direction itself still sees a full step.
fn direction_distance(from: usize, to: usize, blocked: &BlockedRegion) -> u32 {
    shortest_path_len(Cube::DIRECTIONS[from], Cube::DIRECTIONS[to], blocked.cells())
        .unwrap_or(UNREACHABLE_DISTANCE)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn assert_normalized(weights: &DirectionWeights) {
        let total: f64 = (0..6).map(|d| weights.get(d)).sum();
        assert!((total - 1.0).abs() < 1e-9, "weights sum to {}", total);
    }

    #[test]
    fn test_uniform_weights() {
        let weights = DirectionWeights::uniform();
        assert_normalized(&weights);
        for direction in 0..6 {
            assert!((weights.get(direction) - 1.0 / 6.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_pick_bin_covers_unit_interval() {
        let weights = DirectionWeights::uniform();
        assert_eq!(weights.pick_bin(0.0), 0);
        assert_eq!(weights.pick_bin(0.5), 3);
        assert_eq!(weights.pick_bin(0.999_999), 5);

        // The last bin is a catch-all even past the final edge
        assert_eq!(weights.pick_bin(1.0), 5);
        assert_eq!(weights.pick_bin(2.0), 5);
    }

    #[test]
    fn test_pick_bin_skips_zero_weights() {
        let weights = DirectionWeights {
            weights: [0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
        };
        assert_eq!(weights.pick_bin(0.0), 2);
        assert_eq!(weights.pick_bin(0.7), 2);
    }

    #[test]
    fn test_default_blocked_region() {
        let region = BlockedRegion::default();
        assert_eq!(region.len(), 13);
        assert!(region.contains(Cube::ORIGIN));
        for cell in ring(Cube::ORIGIN, 2) {
            assert!(region.contains(cell));
        }
        for dir in Cube::DIRECTIONS {
            assert!(!region.contains(dir), "direction cells stay open");
        }
    }

    #[test]
    fn test_direction_distances_follow_the_loop() {
        let region = BlockedRegion::default();
        assert_eq!(direction_distance(0, 0, &region), 1, "self distance is floored");
        assert_eq!(direction_distance(0, 1, &region), 1);
        assert_eq!(direction_distance(0, 2, &region), 2);
        assert_eq!(direction_distance(0, 3, &region), 3);
        assert_eq!(direction_distance(0, 4, &region), 2);
        assert_eq!(direction_distance(0, 5, &region), 1);
    }

    #[test]
    fn test_direction_distance_unreachable() {
        // Blocking the direction cells themselves leaves no path at all
        let region = BlockedRegion::new(ring(Cube::ORIGIN, 1).into_iter().collect());
        assert_eq!(direction_distance(0, 3, &region), UNREACHABLE_DISTANCE);
    }

    #[test]
    fn test_recompute_zero_alpha_is_identity() {
        let mut weights = DirectionWeights::uniform();
        weights.recompute(2, &BlockedRegion::default(), 0.0);
        for direction in 0..6 {
            assert!((weights.get(direction) - 1.0 / 6.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_recompute_positive_alpha_keeps_heading() {
        let mut weights = DirectionWeights::uniform();
        weights.recompute(0, &BlockedRegion::default(), 0.5);
        assert_normalized(&weights);

        // Nearer directions keep more weight than farther ones
        assert!(weights.get(0) > weights.get(2));
        assert!(weights.get(2) > weights.get(3));
        assert!((weights.get(1) - weights.get(5)).abs() < 1e-12, "loop is symmetric");
        assert!((weights.get(2) - weights.get(4)).abs() < 1e-12);
    }

    #[test]
    fn test_recompute_negative_alpha_flees_heading() {
        let mut weights = DirectionWeights::uniform();
        weights.recompute(0, &BlockedRegion::default(), BOUNDARY_ALPHA);
        assert_normalized(&weights);

        // The opposite direction dominates after a boundary hit
        for direction in 0..6 {
            if direction != 3 {
                assert!(weights.get(3) > weights.get(direction));
            }
        }
    }

    #[test]
    fn test_sampled_frequencies_match_weights() {
        let weights = DirectionWeights {
            weights: [0.5, 0.2, 0.1, 0.1, 0.05, 0.05],
        };
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let draws = 60_000usize;
        let mut counts = [0usize; 6];
        for _ in 0..draws {
            counts[weights.sample(&mut rng)] += 1;
        }

        // Chi-squared statistic against the expected counts; 20.5 is the
        // 99.9% quantile for five degrees of freedom.
        let chi2: f64 = counts
            .iter()
            .enumerate()
            .map(|(direction, &count)| {
                let expected = weights.get(direction) * draws as f64;
                (count as f64 - expected).powi(2) / expected
            })
            .sum();
        assert!(chi2 < 20.5, "chi-squared statistic too large: {}", chi2);
    }

    #[test]
    fn test_sampling_is_deterministic_for_a_seed() {
        let weights = DirectionWeights::uniform();
        let mut a = ChaCha8Rng::seed_from_u64(7);
        let mut b = ChaCha8Rng::seed_from_u64(7);

        let first: Vec<usize> = (0..32).map(|_| weights.sample(&mut a)).collect();
        let second: Vec<usize> = (0..32).map(|_| weights.sample(&mut b)).collect();
        assert_eq!(first, second);
    }
}
