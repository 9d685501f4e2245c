//! Hex coordinate math
//!
//! Cube, axial and offset coordinate forms with lossless conversions,
//! distances, ring enumeration and the shared direction table.
//!
//! Offsets use the odd-q vertical layout throughout: flat-top hexes, odd
//! columns shifted one half-hex down, rows growing downward.

mod line;
mod search;

pub use line::{cube_line, cube_round, lerp};
pub use search::shortest_path_len;

use std::ops::Add;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Cube coordinate on the hex lattice
///
/// The canonical arithmetic form. Components always satisfy q + r + s = 0;
/// constructors derive `s`, so the invariant cannot be broken from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    q: i32,
    r: i32,
    s: i32,
}

impl Cube {
    /// The six unit direction vectors, in the order every weight vector,
    /// ring walk and neighbor query indexes them
    pub const DIRECTIONS: [Cube; 6] = [
        Cube::new(1, 0),
        Cube::new(1, -1),
        Cube::new(0, -1),
        Cube::new(-1, 0),
        Cube::new(-1, 1),
        Cube::new(0, 1),
    ];

    /// The lattice origin
    pub const ORIGIN: Cube = Cube::new(0, 0);

    /// Create a cube coordinate from its first two components
    ///
    /// The third component is derived as `-q - r`.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r, s: -q - r }
    }

    /// First component
    #[inline]
    pub fn q(&self) -> i32 {
        self.q
    }

    /// Second component
    #[inline]
    pub fn r(&self) -> i32 {
        self.r
    }

    /// Third (derived) component
    #[inline]
    pub fn s(&self) -> i32 {
        self.s
    }

    /// Scale this coordinate by an integer factor
    pub fn scale(self, factor: i32) -> Self {
        Self::new(self.q * factor, self.r * factor)
    }

    /// The adjacent cell one step along a direction index (0..6)
    #[inline]
    pub fn neighbor(self, direction: usize) -> Self {
        self + Self::DIRECTIONS[direction]
    }

    /// Hex distance: the minimum number of steps between two cells
    pub fn distance(self, other: Cube) -> u32 {
        let dq = (self.q - other.q).abs();
        let dr = (self.r - other.r).abs();
        let ds = (self.s - other.s).abs();
        ((dq + dr + ds) / 2) as u32
    }
}

impl Add for Cube {
    type Output = Cube;

    fn add(self, rhs: Cube) -> Cube {
        Cube::new(self.q + rhs.q, self.r + rhs.r)
    }
}

/// Axial coordinate: cube form with the redundant component dropped
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Axial {
    /// First component (matches cube q)
    pub q: i32,
    /// Second component (matches cube r)
    pub r: i32,
}

impl Axial {
    /// Create an axial coordinate
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }
}

impl From<Cube> for Axial {
    fn from(cube: Cube) -> Self {
        Self::new(cube.q, cube.r)
    }
}

impl From<Axial> for Cube {
    fn from(axial: Axial) -> Self {
        Cube::new(axial.q, axial.r)
    }
}

/// Offset coordinate: the grid-facing row/column form (odd-q layout)
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Row index, growing downward
    pub row: i32,
    /// Column index
    pub col: i32,
}

impl Offset {
    /// Create an offset coordinate
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl From<Cube> for Offset {
    fn from(cube: Cube) -> Self {
        let col = cube.q;
        let row = cube.r + (cube.q - (cube.q & 1)) / 2;
        Self::new(row, col)
    }
}

impl From<Offset> for Cube {
    fn from(offset: Offset) -> Self {
        let q = offset.col;
        let r = offset.row - (offset.col - (offset.col & 1)) / 2;
        Cube::new(q, r)
    }
}

/// Names a coordinate representation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordForm {
    /// Three-component cube form
    Cube,
    /// Two-component axial form
    Axial,
    /// Row/column offset form
    Offset,
}

/// A hex coordinate tagged with its representation
///
/// Conversions between forms are lossless in every direction. Operations
/// over two coordinates require matching forms; see [`lerp`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HexCoord {
    /// Cube form
    Cube(Cube),
    /// Axial form
    Axial(Axial),
    /// Offset form
    Offset(Offset),
}

impl HexCoord {
    /// The representation this coordinate uses
    pub fn form(&self) -> CoordForm {
        match self {
            HexCoord::Cube(_) => CoordForm::Cube,
            HexCoord::Axial(_) => CoordForm::Axial,
            HexCoord::Offset(_) => CoordForm::Offset,
        }
    }

    /// This coordinate in cube form
    pub fn to_cube(self) -> Cube {
        match self {
            HexCoord::Cube(cube) => cube,
            HexCoord::Axial(axial) => axial.into(),
            HexCoord::Offset(offset) => offset.into(),
        }
    }

    /// This coordinate re-expressed in another representation
    pub fn convert(self, form: CoordForm) -> HexCoord {
        let cube = self.to_cube();
        match form {
            CoordForm::Cube => HexCoord::Cube(cube),
            CoordForm::Axial => HexCoord::Axial(cube.into()),
            CoordForm::Offset => HexCoord::Offset(cube.into()),
        }
    }
}

impl From<Cube> for HexCoord {
    fn from(cube: Cube) -> Self {
        HexCoord::Cube(cube)
    }
}

impl From<Axial> for HexCoord {
    fn from(axial: Axial) -> Self {
        HexCoord::Axial(axial)
    }
}

impl From<Offset> for HexCoord {
    fn from(offset: Offset) -> Self {
        HexCoord::Offset(offset)
    }
}

/// Enumerate the cells at exactly `radius` steps from `center`
///
/// Starts at `center + DIRECTIONS[4] * radius` and walks `radius` steps in
/// each direction in table order, yielding `6 * radius` distinct cells. A
/// radius of zero yields the center itself.
///
/// # Example
///
/// ```
/// use hex_dungeon_walk::{ring, Cube};
///
/// let cells = ring(Cube::ORIGIN, 2);
/// assert_eq!(cells.len(), 12);
/// assert!(cells.iter().all(|c| Cube::ORIGIN.distance(*c) == 2));
/// ```
pub fn ring(center: Cube, radius: u32) -> Vec<Cube> {
    if radius == 0 {
        return vec![center];
    }

    let mut cells = Vec::with_capacity(6 * radius as usize);
    let mut hex = center + Cube::DIRECTIONS[4].scale(radius as i32);
    for direction in 0..6 {
        for _ in 0..radius {
            cells.push(hex);
            hex = hex.neighbor(direction);
        }
    }
    cells
}
