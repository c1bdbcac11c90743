//! Initial territory assignment.
//!
//! Each marker needs a starting cell such that:
//! - no two starting cells share a quadrant (zones never overlap), and
//! - no two starting cells transit each other.
//!
//! Cells are drawn uniformly from a shrinking pool. Accepting a cell removes
//! its whole quadrant from the pool; a cell that conflicts with an accepted
//! one is dropped, since accepted cells are never withdrawn and the conflict
//! would persist. Every attempt therefore ends within one draw per cell.
//! An attempt that empties the pool early is restarted from scratch, up to
//! a configured number of attempts.

use tracing::debug;

use super::cell::Cell;
use super::grid::Grid;
use crate::core::{GameRng, GridError};

impl Grid {
    /// Choose one starting cell per marker, in placement order.
    ///
    /// Pass the result to [`Grid::mark`]. Fails with
    /// `GridError::PartitionStarvation` when `max_attempts` attempts all run
    /// out of cells.
    pub fn partition(&self, rng: &mut GameRng, max_attempts: u32) -> Result<Vec<Cell>, GridError> {
        let required = self.marker_count();
        let mut best = 0;

        for attempt in 1..=max_attempts {
            match self.partition_attempt(rng, required) {
                Ok(cells) => {
                    debug!(attempt, markers = required, "partitioned board");
                    return Ok(cells);
                }
                Err(placed) => {
                    debug!(attempt, placed, required, "partition attempt starved, restarting");
                    best = best.max(placed);
                }
            }
        }

        Err(GridError::PartitionStarvation {
            placed: best,
            required,
            attempts: max_attempts,
        })
    }

    /// One pass over a fresh pool. On starvation returns how many were placed.
    fn partition_attempt(&self, rng: &mut GameRng, required: usize) -> Result<Vec<Cell>, usize> {
        let mut pool: Vec<Cell> = self.cells().copied().collect();
        let mut placed: Vec<Cell> = Vec::with_capacity(required);

        while placed.len() < required {
            if pool.is_empty() {
                return Err(placed.len());
            }

            let i = rng.gen_index(pool.len());
            let cell = pool[i];

            if conflicts_with_any(&cell, &placed) {
                pool.swap_remove(i);
                continue;
            }

            let quadrant = cell.quadrant();
            pool.retain(|c| c.quadrant() != quadrant);
            placed.push(cell);
        }

        Ok(placed)
    }
}

fn conflicts(a: &Cell, b: &Cell) -> bool {
    a.quadrant() == b.quadrant() || a.transits(b)
}

fn conflicts_with_any(cell: &Cell, placed: &[Cell]) -> bool {
    placed.iter().any(|p| conflicts(cell, p))
}

/// Check that no two cells share a quadrant or transit each other.
#[must_use]
pub fn is_valid_partition(cells: &[Cell]) -> bool {
    cells
        .iter()
        .enumerate()
        .all(|(i, a)| cells[i + 1..].iter().all(|b| !conflicts(a, b)))
}
