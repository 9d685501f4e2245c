//! Line interpolation between hex coordinates
//!
//! Lines are sampled in fractional cube space and rounded back onto the
//! integer lattice, one sample per unit of hex distance.

use glam::Vec3;

use crate::error::{DungeonError, Result};
use crate::hex::{Cube, HexCoord};

fn to_vec3(cube: Cube) -> Vec3 {
    Vec3::new(cube.q() as f32, cube.r() as f32, cube.s() as f32)
}

/// Round a fractional cube coordinate onto the integer lattice
///
/// Rounds each component, then restores the q + r + s = 0 invariant by
/// recomputing the component whose rounding error is largest. Ties resolve
/// in a fixed order: q only when strictly largest, then r over s.
pub fn cube_round(frac: Vec3) -> Cube {
    let rounded = frac.round();
    let mut q = rounded.x;
    let mut r = rounded.y;

    let dq = (rounded.x - frac.x).abs();
    let dr = (rounded.y - frac.y).abs();
    let ds = (rounded.z - frac.z).abs();

    if dq > dr && dq > ds {
        q = -rounded.y - rounded.z;
    } else if dr > ds {
        r = -rounded.x - rounded.z;
    }
    // Otherwise s absorbs the error, which Cube::new derives anyway.

    Cube::new(q as i32, r as i32)
}

/// Sample the straight line between two cubes, inclusive of both ends
///
/// Produces `distance + 1` cells; consecutive cells are adjacent. The
/// samples are taken at even fractions along the ray and rounded with
/// [`cube_round`], so the cells trace the tightest lattice walk between
/// the endpoints.
pub fn cube_line(a: Cube, b: Cube) -> Vec<Cube> {
    let n = a.distance(b);
    if n == 0 {
        return vec![a];
    }

    let va = to_vec3(a);
    let vb = to_vec3(b);

    let mut cells = Vec::with_capacity(n as usize + 1);
    for i in 0..=n {
        let t = i as f32 / n as f32;
        cells.push(cube_round(va.lerp(vb, t)));
    }
    cells
}

/// Interpolate a contiguous line of hexes from `a` to `b` (inclusive)
///
/// Both endpoints must use the same coordinate representation; the line is
/// returned in that representation.
///
/// # Errors
///
/// Returns `IncompatibleRepresentation` when the endpoint forms differ.
///
/// # Example
///
/// ```
/// use hex_dungeon_walk::{lerp, HexCoord, Offset};
///
/// let a = HexCoord::Offset(Offset::new(0, 0));
/// let b = HexCoord::Offset(Offset::new(3, 0));
/// let line = lerp(a, b).unwrap();
/// assert_eq!(line.first(), Some(&a));
/// assert_eq!(line.last(), Some(&b));
/// ```
pub fn lerp(a: HexCoord, b: HexCoord) -> Result<Vec<HexCoord>> {
    if a.form() != b.form() {
        return Err(DungeonError::IncompatibleRepresentation {
            a: a.form(),
            b: b.form(),
        });
    }

    let form = a.form();
    let line = cube_line(a.to_cube(), b.to_cube())
        .into_iter()
        .map(|cube| HexCoord::Cube(cube).convert(form))
        .collect();
    Ok(line)
}
