//! Core types: value domain, RNG, configuration and errors.
//!
//! Nothing in here knows about the board; `board`, `rules` and `game`
//! build on these pieces.

pub mod config;
pub mod error;
pub mod rng;
pub mod value;

pub use config::{default_allowed_values, EmptyZonePolicy, GameConfig};
pub use error::{ConfigError, GameError, GridError};
pub use rng::{GameRng, GameRngState};
pub use value::{checked_fraction, parse_fraction, Fraction, ResultSequence, RESULT_MODULUS};
