//! Whole-game entry points: set up a board from a configuration and play it.
//!
//! One seed drives a game through three independent streams, so changing
//! how often one phase draws never shifts the others:
//! - `"setup"`: marker values,
//! - `"partition"`: starting cells,
//! - `"play"`: choice among non-winning options.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::events::GameObserver;
use super::runner::{Game, GameOutcome, GameStatus};
use crate::board::Grid;
use crate::core::{GameConfig, GameError, GameRng};

/// Build, partition and mark a grid from `config`, drawing from `rng`'s streams.
pub fn setup(config: &GameConfig, rng: &GameRng) -> Result<Grid, GameError> {
    let mut grid = Grid::build(config, &mut rng.for_context("setup"))?;
    let cells = grid.partition(&mut rng.for_context("partition"), config.max_partition_attempts)?;
    grid.mark(&cells)?;
    Ok(grid)
}

/// Set up and play one game seeded from `rng`.
pub fn play(config: &GameConfig, rng: &GameRng, observer: &mut dyn GameObserver) -> Result<GameOutcome, GameError> {
    let grid = setup(config, rng)?;
    play_from(grid, config, rng, observer)
}

/// Play a grid returned by [`setup`] with the same `rng`, on its `"play"` stream.
pub fn play_from(
    grid: Grid,
    config: &GameConfig,
    rng: &GameRng,
    observer: &mut dyn GameObserver,
) -> Result<GameOutcome, GameError> {
    Game::new(grid, config, rng.for_context("play"))?.run(observer)
}

/// Set up and play one game seeded from `config.seed`.
pub fn simulate(config: &GameConfig, observer: &mut dyn GameObserver) -> Result<GameOutcome, GameError> {
    config.validate()?;
    play(config, &GameRng::new(config.seed), observer)
}

/// Tally of several games.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub games: usize,
    pub won: usize,
    pub exhausted: usize,
    pub total_moves: usize,
    /// Fewest moves among won games.
    pub fastest_win: Option<usize>,
}

impl BatchSummary {
    fn record(&mut self, outcome: &GameOutcome) {
        self.games += 1;
        self.total_moves += outcome.move_count();
        match outcome.status {
            GameStatus::Won { .. } => {
                self.won += 1;
                let moves = outcome.move_count();
                self.fastest_win = Some(self.fastest_win.map_or(moves, |f| f.min(moves)));
            }
            GameStatus::Exhausted => self.exhausted += 1,
            GameStatus::Running => {}
        }
    }

    /// Average moves per game.
    #[must_use]
    pub fn mean_moves(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.games as f64
        }
    }

    /// Fraction of games won.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.won as f64 / self.games as f64
        }
    }
}

/// Play `games` independent games, each from its own fork of `config.seed`.
pub fn run_batch(
    config: &GameConfig,
    games: usize,
    observer: &mut dyn GameObserver,
) -> Result<BatchSummary, GameError> {
    config.validate()?;

    let mut root = GameRng::new(config.seed);
    let mut summary = BatchSummary::default();

    for game in 0..games {
        let rng = root.fork();
        let outcome = play(config, &rng, observer)?;
        debug!(game, status = ?outcome.status, moves = outcome.move_count(), "game finished");
        summary.record(&outcome);
    }

    info!(
        games = summary.games,
        won = summary.won,
        exhausted = summary.exhausted,
        mean_moves = summary.mean_moves(),
        "batch finished"
    );
    Ok(summary)
}
