//! The game loop as a step-wise state machine.
//!
//! ## States
//!
//! - `Running`: moves remain.
//! - `Won`: a move's total equalled the goal. Terminal.
//! - `Exhausted`: the turn limit passed without a win. Terminal.
//!
//! A turn is one pass over all markers in canonical order; each
//! [`Game::step`] plays exactly one marker of the current turn.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::events::{GameObserver, MoveEvent, SkipEvent, WinEvent};
use crate::board::{Grid, MarkerId};
use crate::core::{EmptyZonePolicy, Fraction, GameConfig, GameError, GameRng, GameRngState};
use crate::rules::{select_option, zone_options, MoveOption};

/// Where a game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Running,
    /// `winner` reached the goal by combining with `transit`.
    Won { winner: MarkerId, transit: MarkerId },
    Exhausted,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Running)
    }
}

/// An applied move with its position in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number, starting at 1.
    pub turn: u64,

    /// Index of this move in the log.
    pub sequence: u64,

    /// The option that was applied.
    pub option: MoveOption,
}

/// A game in progress.
pub struct Game {
    grid: Grid,
    goal: Fraction,
    turn_limit: u64,
    policy: EmptyZonePolicy,
    rng: GameRng,

    /// Canonical marker order.
    order: Vec<MarkerId>,

    /// Completed turns.
    turn: u64,

    /// Next marker to play within the current turn.
    cursor: usize,

    status: GameStatus,
    moves: Vector<MoveRecord>,
}

impl Game {
    /// Start a game on a marked grid.
    ///
    /// Every marker must already have a cell.
    pub fn new(grid: Grid, config: &GameConfig, rng: GameRng) -> Result<Self, GameError> {
        if let Some(unplaced) = grid.markers().iter().find(|m| !m.is_placed()) {
            return Err(GameError::UnplacedMarker(unplaced.id));
        }

        let order: Vec<MarkerId> = grid.marker_ids().collect();
        let status = if config.turn_limit == 0 || order.is_empty() {
            GameStatus::Exhausted
        } else {
            GameStatus::Running
        };

        Ok(Self {
            grid,
            goal: config.goal,
            turn_limit: config.turn_limit,
            policy: config.empty_zone_policy,
            rng,
            order,
            turn: 0,
            cursor: 0,
            status,
            moves: Vector::new(),
        })
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn goal(&self) -> Fraction {
        self.goal
    }

    /// Move log so far. Cloning is O(1).
    #[must_use]
    pub fn moves(&self) -> &Vector<MoveRecord> {
        &self.moves
    }

    /// Number of fully completed turns.
    #[must_use]
    pub fn turns_played(&self) -> u64 {
        self.turn
    }

    /// Play the next marker's move.
    ///
    /// Does nothing once the game is over.
    pub fn step(&mut self, observer: &mut dyn GameObserver) -> Result<GameStatus, GameError> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        let id = self.order[self.cursor];
        let turn = self.turn + 1;
        let candidates = zone_options(&self.grid, id)?;
        trace!(marker = id.raw(), turn, candidates = candidates.len(), "enumerated options");

        match select_option(&candidates, self.goal, &mut self.rng).copied() {
            Some(chosen) => {
                if let Some(status) = self.apply(chosen, turn, observer)? {
                    self.status = status;
                    return Ok(status);
                }
            }
            None => match self.policy {
                EmptyZonePolicy::Skip => {
                    debug!(marker = id.raw(), turn, "no candidate options, skipping");
                    observer.on_skip(&SkipEvent { turn, marker: id });
                }
                EmptyZonePolicy::Fail => return Err(GameError::NoCandidateOptions(id)),
            },
        }

        self.advance();
        Ok(self.status)
    }

    /// Apply a chosen option; returns the new status if it won.
    fn apply(
        &mut self,
        chosen: MoveOption,
        turn: u64,
        observer: &mut dyn GameObserver,
    ) -> Result<Option<GameStatus>, GameError> {
        self.grid
            .move_marker(chosen.marker, chosen.cell.spot, chosen.result)?;
        self.moves.push_back(MoveRecord {
            turn,
            sequence: self.moves.len() as u64,
            option: chosen,
        });

        observer.on_move(&MoveEvent {
            turn,
            marker: chosen.marker,
            destination: chosen.cell.spot,
            result: chosen.result,
        });

        match (chosen.transit, chosen.total) {
            (Some(transit), Some(total)) if total == self.goal => {
                observer.on_win(&WinEvent {
                    turn,
                    winner: chosen.marker,
                    winner_value: chosen.result,
                    transit: transit.marker,
                    transit_value: transit.value,
                    total,
                });
                Ok(Some(GameStatus::Won {
                    winner: chosen.marker,
                    transit: transit.marker,
                }))
            }
            _ => Ok(None),
        }
    }

    fn advance(&mut self) {
        self.cursor += 1;
        if self.cursor == self.order.len() {
            self.cursor = 0;
            self.turn += 1;
            if self.turn >= self.turn_limit {
                self.status = GameStatus::Exhausted;
            }
        }
    }

    /// Play until the game is won or exhausted.
    pub fn run(mut self, observer: &mut dyn GameObserver) -> Result<GameOutcome, GameError> {
        while !self.status.is_terminal() {
            self.step(observer)?;
        }
        Ok(self.finish())
    }

    /// Stop here and hand back the current state.
    #[must_use]
    pub fn finish(self) -> GameOutcome {
        GameOutcome {
            status: self.status,
            moves: self.moves,
            turns_played: self.turn,
            rng_state: self.rng.state(),
            grid: self.grid,
        }
    }
}

/// Final state of a game.
#[derive(Clone, Debug)]
pub struct GameOutcome {
    pub status: GameStatus,

    /// Every applied move, in order.
    pub moves: Vector<MoveRecord>,

    pub turns_played: u64,

    /// Play RNG position at the end.
    pub rng_state: GameRngState,

    pub grid: Grid,
}

impl GameOutcome {
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// The move that won, if any.
    #[must_use]
    pub fn winning_move(&self) -> Option<&MoveRecord> {
        match self.status {
            GameStatus::Won { .. } => self.moves.last(),
            _ => None,
        }
    }
}
