//! Breadth-first shortest path on the hex lattice

use std::collections::{HashSet, VecDeque};

use crate::hex::Cube;

/// Length of the shortest path from `a` to `b` that avoids `blocked`
///
/// Expands the unbounded lattice breadth-first over the six-direction
/// adjacency, visiting each cell at most once. Returns `None` when no path
/// exists: either endpoint blocked, or the target sealed off. Since the
/// lattice is unbounded, the search stops expanding past
/// `distance(a, b) + 2 * blocked.len() + 2` steps and treats anything
/// farther as unreachable; a detour around the blocked set fits inside
/// that bound.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use hex_dungeon_walk::{shortest_path_len, Cube};
///
/// let open = HashSet::new();
/// assert_eq!(
///     shortest_path_len(Cube::ORIGIN, Cube::new(3, -1), &open),
///     Some(3)
/// );
/// ```
pub fn shortest_path_len(a: Cube, b: Cube, blocked: &HashSet<Cube>) -> Option<u32> {
    if blocked.contains(&a) || blocked.contains(&b) {
        return None;
    }
    if a == b {
        return Some(0);
    }

    let horizon = a.distance(b) + 2 * blocked.len() as u32 + 2;

    let mut visited = HashSet::new();
    let mut frontier = VecDeque::new();
    visited.insert(a);
    frontier.push_back((a, 0u32));

    while let Some((current, steps)) = frontier.pop_front() {
        for direction in 0..6 {
            let next = current.neighbor(direction);
            if next == b {
                return Some(steps + 1);
            }
            if steps + 1 >= horizon || blocked.contains(&next) || !visited.insert(next) {
                continue;
            }
            frontier.push_back((next, steps + 1));
        }
    }

    None
}
