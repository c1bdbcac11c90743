//! Markers: the players of the game.
//!
//! A marker carries a rational value and, once placed, occupies one cell.
//! Its zone (the cells it may move between) is the quadrant of that cell.
//! Markers do not hold a reference to their grid; zone lookups borrow the
//! grid for the duration of the call.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::{Cell, Quadrant};
use super::grid::Grid;
use crate::core::Fraction;

/// Cells of one quadrant. At most four, fewer on the edge of odd-sized boards.
pub type Zone = SmallVec<[Cell; 4]>;

/// Unique marker identifier within a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarkerId(pub u32);

impl MarkerId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MarkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub id: MarkerId,

    /// Current value.
    pub value: Fraction,

    /// Occupied cell; `None` until the grid is marked.
    pub cell: Option<Cell>,
}

impl Marker {
    /// Create an unplaced marker.
    #[must_use]
    pub fn new(id: MarkerId, value: Fraction) -> Self {
        Self { id, value, cell: None }
    }

    /// Quadrant of the occupied cell.
    #[must_use]
    pub fn quadrant(&self) -> Option<Quadrant> {
        self.cell.map(|c| c.quadrant())
    }

    /// Cells of this marker's quadrant on `grid`; empty when unplaced.
    #[must_use]
    pub fn zone(&self, grid: &Grid) -> Zone {
        self.quadrant()
            .map(|q| grid.quadrant_cells(q))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_placed(&self) -> bool {
        self.cell.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Spot;

    #[test]
    fn test_unplaced_marker() {
        let marker = Marker::new(MarkerId::new(1), Fraction::new(2, 9));
        assert!(!marker.is_placed());
        assert_eq!(marker.quadrant(), None);
    }

    #[test]
    fn test_quadrant_follows_cell() {
        let mut marker = Marker::new(MarkerId::new(1), Fraction::new(2, 9));
        marker.cell = Some(Cell::new(Spot::new(3, 0)));
        assert_eq!(marker.quadrant(), Some(Quadrant { x: 1, y: 0 }));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", MarkerId::new(3)), "Player 3");
    }
}
