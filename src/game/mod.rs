//! Playing the game.
//!
//! - `runner`: the [`Game`] state machine and its outcome
//! - `events`: structured events for reporting collaborators
//! - `session`: build-and-play entry points and batch runs

pub mod events;
pub mod runner;
pub mod session;

pub use events::{EventLog, GameEvent, GameObserver, MoveEvent, NullObserver, SkipEvent, TracingObserver, WinEvent};
pub use runner::{Game, GameOutcome, GameStatus, MoveRecord};
pub use session::{play, play_from, run_batch, setup, simulate, BatchSummary};
