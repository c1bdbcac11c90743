//! Error types for configuration, board setup and play.

use thiserror::Error;

use super::value::Fraction;
use crate::board::{MarkerId, Spot};

/// A configuration that cannot produce a game.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("a game needs at least one marker")]
    NoMarkers,

    #[error("{n_sectors} sectors and {n_regions} regions give an empty board")]
    EmptyBoard { n_sectors: usize, n_regions: usize },

    #[error("{requested} markers need distinct values but only {available} are allowed")]
    NotEnoughValues { requested: usize, available: usize },

    #[error("partitioning needs at least one attempt")]
    NoPartitionAttempts,

    /// Starting values must be `n/d` with `0 <= n < 10` and `0 < d < 10`.
    #[error("starting value {value} is outside the single-digit range")]
    ValueOutOfRange { value: Fraction },
}

/// Failures building, partitioning or marking a grid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// `mark` was given a different number of cells than there are markers.
    #[error("got {cells} cells for {markers} markers")]
    MarkerMiscount { cells: usize, markers: usize },

    #[error("no cell at {0}")]
    UnknownCell(Spot),

    #[error("unknown marker: {0}")]
    UnknownMarker(MarkerId),

    #[error("{0} appears twice")]
    DuplicateMarker(MarkerId),

    /// Every partition attempt ran out of cells before placing all markers.
    #[error(
        "cannot partition the board for {required} markers: best attempt placed {placed} after {attempts} attempts"
    )]
    PartitionStarvation {
        placed: usize,
        required: usize,
        attempts: u32,
    },
}

/// Failures while playing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("{0} has no cell")]
    UnplacedMarker(MarkerId),

    #[error("{0} has no legal option in its zone")]
    NoCandidateOptions(MarkerId),
}

impl From<ConfigError> for GameError {
    fn from(err: ConfigError) -> Self {
        GameError::Grid(GridError::Config(err))
    }
}
