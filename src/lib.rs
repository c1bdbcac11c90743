//! # sagids
//!
//! A turn-based game on a square grid. Markers (players) each hold an exact
//! rational value and move between cells of their own 2x2 zone; every move
//! perturbs the marker's value, optionally combining it with another marker
//! on a shared diagonal. The first move whose combined total equals the goal
//! wins.
//!
//! ## Design Principles
//!
//! 1. **Exact values**: all values are reduced rationals, compared exactly.
//!
//! 2. **Injected randomness**: every random draw goes through a seeded
//!    `GameRng` passed in by the caller. A seed reproduces a run.
//!
//! 3. **Structured reporting**: the game emits events to a `GameObserver`
//!    instead of formatting text.
//!
//! ## Modules
//!
//! - `core`: rational values, RNG, configuration, errors
//! - `board`: cells, markers, grid, partitioning
//! - `rules`: move options and selection
//! - `game`: the game loop, events and batch runs
//!
//! ## Example
//!
//! ```
//! use sagids::{simulate, GameConfig, GameStatus, NullObserver};
//!
//! let config = GameConfig::default().with_turn_limit(100).with_seed(3);
//! let outcome = simulate(&config, &mut NullObserver).unwrap();
//!
//! assert!(outcome.move_count() <= 100 * 4);
//! if let GameStatus::Won { .. } = outcome.status {
//!     let last = outcome.moves.last().unwrap();
//!     assert_eq!(last.option.total, Some(config.goal));
//! }
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    EmptyZonePolicy, Fraction, GameConfig, GameRng, GameRngState,
    ConfigError, GameError, GridError,
};

pub use crate::board::{Cell, Grid, GridSnapshot, Marker, MarkerId, Quadrant, Spot, Zone};

pub use crate::rules::{MoveOption, Transit};

pub use crate::game::{
    Game, GameOutcome, GameStatus, MoveRecord,
    GameObserver, GameEvent, MoveEvent, WinEvent, SkipEvent,
    EventLog, NullObserver, TracingObserver,
    simulate, run_batch, BatchSummary,
};
