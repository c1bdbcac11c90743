//! Game configuration.
//!
//! Board shape, the pool of starting values, the goal and the turn limit are
//! fixed parameters of a run, collected in a [`GameConfig`]. Defaults
//! reproduce the classic four-player game on a 4x4 board.
//!
//! ```
//! use sagids::core::{Fraction, GameConfig};
//!
//! let config = GameConfig::default()
//!     .with_goal(Fraction::new(3, 16))
//!     .with_turn_limit(500)
//!     .with_seed(7);
//!
//! assert_eq!(config.board_size(), 4);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::value::{Fraction, RESULT_MODULUS};

/// What a marker does when its zone offers no legal option.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmptyZonePolicy {
    /// Pass the turn to the next marker.
    #[default]
    Skip,
    /// Abort the run with `GameError::NoCandidateOptions`.
    Fail,
}

/// Complete configuration of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of markers (players).
    pub n_sectors: usize,

    /// Regions per sector; with `n_sectors` determines the board size.
    pub n_regions: usize,

    /// Values markers may start with. Each marker gets a distinct one.
    pub allowed_values: Vec<Fraction>,

    /// Total that wins the game.
    pub goal: Fraction,

    /// Maximum number of full turns (one move per marker each).
    pub turn_limit: u64,

    /// How many times partitioning may restart before giving up.
    pub max_partition_attempts: u32,

    /// Behaviour when a marker has no option.
    pub empty_zone_policy: EmptyZonePolicy,

    /// Seed for every random stream of the run.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            n_sectors: 4,
            n_regions: 4,
            allowed_values: default_allowed_values(),
            goal: Fraction::new(3, 16),
            turn_limit: 100_000,
            max_partition_attempts: 64,
            empty_zone_policy: EmptyZonePolicy::Skip,
            seed: 42,
        }
    }
}

/// The starting values `n/9` for `n` in `{1, 2, 4, 5, 7, 8}`.
#[must_use]
pub fn default_allowed_values() -> Vec<Fraction> {
    [1, 2, 4, 5, 7, 8].iter().map(|&n| Fraction::new(n, 9)).collect()
}

impl GameConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of markers.
    #[must_use]
    pub fn with_sectors(mut self, n_sectors: usize) -> Self {
        self.n_sectors = n_sectors;
        self
    }

    /// Set the number of regions.
    #[must_use]
    pub fn with_regions(mut self, n_regions: usize) -> Self {
        self.n_regions = n_regions;
        self
    }

    /// Replace the pool of starting values.
    #[must_use]
    pub fn with_allowed_values(mut self, values: Vec<Fraction>) -> Self {
        self.allowed_values = values;
        self
    }

    /// Set the winning total.
    #[must_use]
    pub fn with_goal(mut self, goal: Fraction) -> Self {
        self.goal = goal;
        self
    }

    /// Set the maximum number of turns.
    #[must_use]
    pub fn with_turn_limit(mut self, turn_limit: u64) -> Self {
        self.turn_limit = turn_limit;
        self
    }

    /// Set the partition restart bound.
    #[must_use]
    pub fn with_max_partition_attempts(mut self, attempts: u32) -> Self {
        self.max_partition_attempts = attempts;
        self
    }

    /// Set the empty-zone policy.
    #[must_use]
    pub fn with_empty_zone_policy(mut self, policy: EmptyZonePolicy) -> Self {
        self.empty_zone_policy = policy;
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Side length of the board: `floor(sqrt(n_sectors) * sqrt(n_regions))`.
    #[must_use]
    pub fn board_size(&self) -> usize {
        integer_sqrt(self.n_sectors.saturating_mul(self.n_regions))
    }

    /// Check the configuration can produce a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_sectors == 0 {
            return Err(ConfigError::NoMarkers);
        }
        if self.board_size() == 0 {
            return Err(ConfigError::EmptyBoard {
                n_sectors: self.n_sectors,
                n_regions: self.n_regions,
            });
        }
        if self.allowed_values.len() < self.n_sectors {
            return Err(ConfigError::NotEnoughValues {
                requested: self.n_sectors,
                available: self.allowed_values.len(),
            });
        }
        if self.max_partition_attempts == 0 {
            return Err(ConfigError::NoPartitionAttempts);
        }
        if let Some(&value) = self.allowed_values.iter().find(|v| !is_digit_fraction(v)) {
            return Err(ConfigError::ValueOutOfRange { value });
        }
        Ok(())
    }
}

/// Numerator in `0..10`, denominator in `1..10`, after reduction.
///
/// Deserialized ratios are not normalized, so the raw denominator is checked
/// for zero before reducing.
fn is_digit_fraction(value: &Fraction) -> bool {
    if *value.denom() == 0 {
        return false;
    }
    let value = value.reduced();
    (0..RESULT_MODULUS).contains(value.numer()) && (1..RESULT_MODULUS).contains(value.denom())
}

/// Largest `r` with `r * r <= n`.
fn integer_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root.saturating_mul(root) > n {
        root -= 1;
    }
    while (root + 1).saturating_mul(root + 1) <= n {
        root += 1;
    }
    root
}
