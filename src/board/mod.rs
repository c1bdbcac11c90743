//! The board: cells, markers, the grid that owns them, and partitioning.

pub mod cell;
pub mod grid;
pub mod marker;
pub mod partition;

pub use cell::{Cell, Quadrant, Spot};
pub use grid::{CellSnapshot, Grid, GridSnapshot};
pub use marker::{Marker, MarkerId, Zone};
pub use partition::is_valid_partition;
