//! Board coordinates and cells.
//!
//! ## Cell Values
//!
//! Every cell is worth one of `{1, 3, 5, 7}`, fixed by the parity of its
//! coordinates:
//!
//! ```text
//!            y even   y odd
//! x even       1        7
//! x odd        3        5
//! ```
//!
//! ## Transit
//!
//! Two cells transit each other when they lie on a common diagonal: the
//! x and y displacement between them have equal magnitude. The relation is
//! symmetric and reflexive but not transitive.
//!
//! ```
//! use sagids::board::{Cell, Spot};
//!
//! let a = Cell::new(Spot::new(0, 0));
//! let b = Cell::new(Spot::new(3, 3));
//! let c = Cell::new(Spot::new(1, 3));
//!
//! assert_eq!(a.value(), 1);
//! assert!(a.transits(&b));
//! assert!(!a.transits(&c));
//! ```

use serde::{Deserialize, Serialize};

/// Integer coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Spot {
    pub x: i32,
    pub y: i32,
}

impl Spot {
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The 2x2 quadrant containing this spot.
    #[must_use]
    pub const fn quadrant(self) -> Quadrant {
        Quadrant {
            x: self.x.div_euclid(2),
            y: self.y.div_euclid(2),
        }
    }
}

impl std::fmt::Display for Spot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Spot {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Index of a 2x2 block of the board. A marker's zone is its quadrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quadrant {
    pub x: i32,
    pub y: i32,
}

impl Quadrant {
    /// Spots covered by this quadrant, x-major, ignoring board bounds.
    pub fn spots(self) -> impl Iterator<Item = Spot> {
        let (x0, y0) = (self.x * 2, self.y * 2);
        (x0..x0 + 2).flat_map(move |x| (y0..y0 + 2).map(move |y| Spot::new(x, y)))
    }
}

/// Value of a cell by `(x mod 2, y mod 2)`.
const VALUE_TABLE: [[u8; 2]; 2] = [[1, 7], [3, 5]];

/// One immutable board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub spot: Spot,
}

impl Cell {
    #[must_use]
    pub const fn new(spot: Spot) -> Self {
        Self { spot }
    }

    /// Fixed value of this cell, one of `{1, 3, 5, 7}`.
    #[must_use]
    pub const fn value(&self) -> u8 {
        VALUE_TABLE[self.spot.x.rem_euclid(2) as usize][self.spot.y.rem_euclid(2) as usize]
    }

    /// Whether `other` lies on one of this cell's diagonals (or is this cell).
    #[must_use]
    pub fn transits(&self, other: &Cell) -> bool {
        let dx = (other.spot.x - self.spot.x).abs();
        let dy = (other.spot.y - self.spot.y).abs();
        dx == dy
    }

    #[must_use]
    pub const fn quadrant(&self) -> Quadrant {
        self.spot.quadrant()
    }
}

impl From<Spot> for Cell {
    fn from(spot: Spot) -> Self {
        Self::new(spot)
    }
}
