//! Move options: every candidate move for a marker.
//!
//! For a marker and a destination cell, each candidate result (see
//! [`ResultSequence`]) produces:
//! - one plain option (the marker just takes the result), followed by
//! - one combined option per *other* marker whose cell transits the
//!   destination, with `total = result * transit value`.
//!
//! Results form the outer loop and transit markers the inner one; nothing
//! is sorted.

use serde::{Deserialize, Serialize};

use crate::board::{Cell, Grid, MarkerId};
use crate::core::{Fraction, GameError, GameRng, GridError, ResultSequence};

/// The marker a move combines with, and its value at the time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transit {
    pub marker: MarkerId,
    pub value: Fraction,
}

/// One candidate move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOption {
    /// Acting marker.
    pub marker: MarkerId,

    /// Destination.
    pub cell: Cell,

    /// Value the marker takes on arrival.
    pub result: Fraction,

    /// Marker combined with, if any.
    pub transit: Option<Transit>,

    /// `result * transit.value`; `None` without a transit.
    pub total: Option<Fraction>,
}

impl MoveOption {
    /// A move that combines with nobody.
    #[must_use]
    pub fn plain(marker: MarkerId, cell: Cell, result: Fraction) -> Self {
        Self {
            marker,
            cell,
            result,
            transit: None,
            total: None,
        }
    }

    /// A move combined with a transiting marker.
    #[must_use]
    pub fn combined(marker: MarkerId, cell: Cell, result: Fraction, transit: Transit) -> Self {
        Self {
            marker,
            cell,
            result,
            transit: Some(transit),
            total: Some(result * transit.value),
        }
    }

    /// Whether this move's total is exactly `goal`.
    #[must_use]
    pub fn reaches(&self, goal: Fraction) -> bool {
        self.total == Some(goal)
    }
}

/// Options for moving `marker` onto `cell`.
///
/// Every other marker must be placed.
pub fn options(grid: &Grid, marker: MarkerId, cell: Cell) -> Result<Vec<MoveOption>, GameError> {
    let acting = grid.marker(marker).ok_or(GridError::UnknownMarker(marker))?;

    let mut transits = Vec::new();
    for other in grid.markers().iter().filter(|m| m.id != marker) {
        let other_cell = other.cell.ok_or(GameError::UnplacedMarker(other.id))?;
        if other_cell.transits(&cell) {
            transits.push(Transit {
                marker: other.id,
                value: other.value,
            });
        }
    }

    let mut out = Vec::new();
    for result in ResultSequence::new(acting.value, i64::from(cell.value())) {
        out.push(MoveOption::plain(marker, cell, result));
        out.extend(
            transits
                .iter()
                .map(|&t| MoveOption::combined(marker, cell, result, t)),
        );
    }
    Ok(out)
}

/// Options across the marker's whole zone, excluding its current cell.
pub fn zone_options(grid: &Grid, marker: MarkerId) -> Result<Vec<MoveOption>, GameError> {
    let acting = grid.marker(marker).ok_or(GridError::UnknownMarker(marker))?;
    let current = acting.cell.ok_or(GameError::UnplacedMarker(marker))?;

    let mut out = Vec::new();
    for cell in acting.zone(grid).into_iter().filter(|&c| c != current) {
        out.extend(options(grid, marker, cell)?);
    }
    Ok(out)
}

/// Pick a move: the first one reaching `goal`, else a uniformly random one.
///
/// Returns `None` only when `options` is empty.
pub fn select_option<'a>(
    options: &'a [MoveOption],
    goal: Fraction,
    rng: &mut GameRng,
) -> Option<&'a MoveOption> {
    options
        .iter()
        .find(|o| o.reaches(goal))
        .or_else(|| rng.choose(options))
}
