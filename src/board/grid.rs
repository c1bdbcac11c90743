//! The grid: owner of all cells and markers.
//!
//! ## Lifecycle
//!
//! 1. [`Grid::build`] creates a `size x size` board and one unplaced marker
//!    per sector, each with a distinct value sampled from the configured pool.
//! 2. [`Grid::partition`] picks a non-conflicting starting cell per marker.
//! 3. [`Grid::mark`] places the markers on those cells.
//! 4. The game moves markers with [`Grid::move_marker`].
//!
//! ```
//! use sagids::board::Grid;
//! use sagids::core::{GameConfig, GameRng};
//!
//! let config = GameConfig::default();
//! let mut rng = GameRng::new(config.seed);
//!
//! let mut grid = Grid::build(&config, &mut rng).unwrap();
//! let cells = grid.partition(&mut rng, config.max_partition_attempts).unwrap();
//! grid.mark(&cells).unwrap();
//!
//! assert_eq!(grid.size(), 4);
//! assert!(grid.markers().iter().all(|m| m.is_placed()));
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::cell::{Cell, Quadrant, Spot};
use super::marker::{Marker, MarkerId, Zone};
use crate::core::{ConfigError, Fraction, GameConfig, GameRng, GridError};

/// Board and markers of one game.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,

    /// Cell lookup by coordinate.
    cells: FxHashMap<Spot, Cell>,

    /// Spots in board order: x-major, then y.
    spots: Vec<Spot>,

    /// Markers in canonical (creation) order.
    markers: Vec<Marker>,

    /// Marker id to position in `markers`.
    index: FxHashMap<MarkerId, usize>,
}

impl Grid {
    /// Create a `size x size` board holding the given markers.
    ///
    /// Marker order is preserved as the canonical turn order.
    pub fn new(size: usize, markers: Vec<Marker>) -> Result<Self, GridError> {
        let side = size as i32;
        let spots: Vec<Spot> = (0..side)
            .flat_map(|x| (0..side).map(move |y| Spot::new(x, y)))
            .collect();
        let cells = spots.iter().map(|&s| (s, Cell::new(s))).collect();

        let mut index = FxHashMap::default();
        for (i, marker) in markers.iter().enumerate() {
            if index.insert(marker.id, i).is_some() {
                return Err(GridError::DuplicateMarker(marker.id));
            }
            if let Some(cell) = marker.cell {
                if !spots.contains(&cell.spot) {
                    return Err(GridError::UnknownCell(cell.spot));
                }
            }
        }

        Ok(Self {
            size,
            cells,
            spots,
            markers,
            index,
        })
    }

    /// Build a grid from a configuration.
    ///
    /// Markers get ids `1..=n_sectors` and distinct values drawn from
    /// `allowed_values`; none is placed yet.
    pub fn build(config: &GameConfig, rng: &mut GameRng) -> Result<Self, GridError> {
        config.validate()?;

        let values = Self::sample_values(config, rng)?;
        let markers = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| Marker::new(MarkerId::new(i as u32 + 1), value))
            .collect();

        Self::new(config.board_size(), markers)
    }

    fn sample_values(config: &GameConfig, rng: &mut GameRng) -> Result<Vec<Fraction>, GridError> {
        rng.sample(&config.allowed_values, config.n_sectors).ok_or_else(|| {
            ConfigError::NotEnoughValues {
                requested: config.n_sectors,
                available: config.allowed_values.len(),
            }
            .into()
        })
    }

    /// Side length of the board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// All cells in board order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.spots.iter().filter_map(|s| self.cells.get(s))
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.spots.len()
    }

    /// Look up the cell at a coordinate.
    #[must_use]
    pub fn cell(&self, spot: Spot) -> Option<&Cell> {
        self.cells.get(&spot)
    }

    /// Markers in canonical order.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Marker ids in canonical order.
    pub fn marker_ids(&self) -> impl Iterator<Item = MarkerId> + '_ {
        self.markers.iter().map(|m| m.id)
    }

    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn marker(&self, id: MarkerId) -> Option<&Marker> {
        self.index.get(&id).map(|&i| &self.markers[i])
    }

    fn marker_mut(&mut self, id: MarkerId) -> Result<&mut Marker, GridError> {
        let i = *self.index.get(&id).ok_or(GridError::UnknownMarker(id))?;
        Ok(&mut self.markers[i])
    }

    /// Cells of a quadrant that exist on this board, in board order.
    #[must_use]
    pub fn quadrant_cells(&self, quadrant: Quadrant) -> Zone {
        quadrant
            .spots()
            .filter_map(|s| self.cells.get(&s).copied())
            .collect()
    }

    /// Zone of a marker; empty when it has no cell.
    pub fn zone(&self, id: MarkerId) -> Result<Zone, GridError> {
        self.marker(id)
            .map(|m| m.zone(self))
            .ok_or(GridError::UnknownMarker(id))
    }

    /// Place markers on cells, pairing them positionally in canonical order.
    ///
    /// Exactly one cell per marker is required.
    pub fn mark(&mut self, cells: &[Cell]) -> Result<&mut Self, GridError> {
        if cells.len() != self.markers.len() {
            return Err(GridError::MarkerMiscount {
                cells: cells.len(),
                markers: self.markers.len(),
            });
        }

        let resolved = cells
            .iter()
            .map(|c| self.cell(c.spot).copied().ok_or(GridError::UnknownCell(c.spot)))
            .collect::<Result<Vec<_>, _>>()?;

        for (marker, cell) in self.markers.iter_mut().zip(resolved) {
            marker.cell = Some(cell);
        }
        Ok(self)
    }

    /// Move a marker to a cell and give it a new value.
    pub fn move_marker(&mut self, id: MarkerId, spot: Spot, value: Fraction) -> Result<(), GridError> {
        let cell = *self.cell(spot).ok_or(GridError::UnknownCell(spot))?;
        let marker = self.marker_mut(id)?;
        marker.cell = Some(cell);
        marker.value = value;
        Ok(())
    }

    /// Serializable view of the whole grid.
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot {
            size: self.size,
            markers: self.markers.clone(),
            cells: self
                .cells()
                .map(|c| CellSnapshot {
                    spot: c.spot,
                    value: c.value(),
                })
                .collect(),
        }
    }
}

/// Plain-data copy of a grid, for printing or storing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub size: usize,
    pub markers: Vec<Marker>,
    pub cells: Vec<CellSnapshot>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub spot: Spot,
    pub value: u8,
}
