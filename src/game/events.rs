//! Structured game events for reporting collaborators.
//!
//! The game never formats text itself. It hands each applied move, skipped
//! turn and win to a [`GameObserver`]; what happens next is up to the
//! observer. [`TracingObserver`] logs through `tracing`, [`EventLog`] keeps
//! the events in memory and [`NullObserver`] drops them.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::board::{MarkerId, Spot};
use crate::core::Fraction;

/// A marker moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEvent {
    /// Turn number, starting at 1.
    pub turn: u64,
    pub marker: MarkerId,
    pub destination: Spot,
    /// Value the marker took.
    pub result: Fraction,
}

/// A move reached the goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinEvent {
    pub turn: u64,
    pub winner: MarkerId,
    pub winner_value: Fraction,
    pub transit: MarkerId,
    pub transit_value: Fraction,
    pub total: Fraction,
}

/// A marker had nothing to do and passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipEvent {
    pub turn: u64,
    pub marker: MarkerId,
}

/// Any event, as recorded by [`EventLog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Move(MoveEvent),
    Win(WinEvent),
    Skip(SkipEvent),
}

/// Receives game events as they happen.
///
/// All methods default to doing nothing.
pub trait GameObserver {
    fn on_move(&mut self, _event: &MoveEvent) {}

    fn on_win(&mut self, _event: &WinEvent) {}

    fn on_skip(&mut self, _event: &SkipEvent) {}
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {}

/// Logs events at `info` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn on_move(&mut self, event: &MoveEvent) {
        info!(
            turn = event.turn,
            "{} moves to {}. Takes value {}.",
            event.marker,
            event.destination,
            event.result
        );
    }

    fn on_win(&mut self, event: &WinEvent) {
        info!(
            turn = event.turn,
            total = %event.total,
            "{} wins against player {}. ({} * {}).",
            event.winner,
            event.transit.raw(),
            event.winner_value,
            event.transit_value
        );
    }

    fn on_skip(&mut self, event: &SkipEvent) {
        info!(turn = event.turn, "{} has no move and passes.", event.marker);
    }
}

/// Keeps every event in order.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    pub events: Vec<GameEvent>,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn moves(&self) -> impl Iterator<Item = &MoveEvent> {
        self.events.iter().filter_map(|e| match e {
            GameEvent::Move(m) => Some(m),
            _ => None,
        })
    }

    #[must_use]
    pub fn win(&self) -> Option<&WinEvent> {
        self.events.iter().find_map(|e| match e {
            GameEvent::Win(w) => Some(w),
            _ => None,
        })
    }
}

impl GameObserver for EventLog {
    fn on_move(&mut self, event: &MoveEvent) {
        self.events.push(GameEvent::Move(*event));
    }

    fn on_win(&mut self, event: &WinEvent) {
        self.events.push(GameEvent::Win(*event));
    }

    fn on_skip(&mut self, event: &SkipEvent) {
        self.events.push(GameEvent::Skip(*event));
    }
}
