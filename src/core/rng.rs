//! Deterministic random number generation for board setup and play.
//!
//! Randomness is the only nondeterminism in a game: the initial marker
//! values, the partition of the board and the choice among non-winning
//! options. All three draw from a `GameRng` that is passed in explicitly,
//! so a seed fully determines a run.
//!
//! ```
//! use sagids::core::GameRng;
//!
//! let rng = GameRng::new(42);
//!
//! // Independent streams for independent concerns
//! let mut setup = rng.for_context("setup");
//! let mut play = rng.for_context("play");
//! let a: Vec<_> = (0..10).map(|_| setup.gen_index(1000)).collect();
//! let b: Vec<_> = (0..10).map(|_| play.gen_index(1000)).collect();
//! assert_ne!(a, b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backed by ChaCha8.
///
/// Supports forking (one stream per game in a batch) and context streams
/// (separate sequences for setup, partitioning and play).
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// on every platform and toolchain: the stream seed is an FNV-1a hash of
    /// the seed's little-endian bytes followed by the context bytes.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        Self::new(context_seed(self.seed, context))
    }

    /// Generate a random index in `0..len`.
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Sample `amount` distinct elements from a slice, in random order.
    ///
    /// Returns `None` when the slice holds fewer than `amount` elements.
    #[must_use]
    pub fn sample<T: Clone>(&mut self, slice: &[T], amount: usize) -> Option<Vec<T>> {
        if amount > slice.len() {
            return None;
        }
        let picked = rand::seq::index::sample(&mut self.inner, slice.len(), amount);
        Some(picked.into_iter().map(|i| slice[i].clone()).collect())
    }

    /// Seed, fork count and stream position, for logging where a run ended.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

fn context_seed(seed: u64, context: &str) -> u64 {
    seed.to_le_bytes()
        .iter()
        .chain(context.as_bytes())
        .fold(FNV_OFFSET, |hash, &byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME))
}

/// Serializable RNG position, recorded with each game outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_index(1000), rng2.gen_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic_and_distinct() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let mut a = rng1.fork();
        let mut b = rng2.fork();
        assert_eq!(a.seed(), b.seed());

        let mut c = rng1.fork();
        let seq_a: Vec<_> = (0..10).map(|_| a.gen_index(1000)).collect();
        let seq_b: Vec<_> = (0..10).map(|_| b.gen_index(1000)).collect();
        let seq_c: Vec<_> = (0..10).map(|_| c.gen_index(1000)).collect();

        assert_eq!(seq_a, seq_b);
        assert_ne!(seq_a, seq_c);
    }

    #[test]
    fn test_context_streams() {
        let rng = GameRng::new(42);
        let mut setup = rng.for_context("setup");
        let mut play = rng.for_context("play");
        let mut setup_again = GameRng::new(42).for_context("setup");

        let seq1: Vec<_> = (0..10).map(|_| setup.gen_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| play.gen_index(1000)).collect();
        let seq3: Vec<_> = (0..10).map(|_| setup_again.gen_index(1000)).collect();

        assert_ne!(seq1, seq2);
        assert_eq!(seq1, seq3);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items).unwrap();
        assert!(items.contains(chosen));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_sample_distinct() {
        let mut rng = GameRng::new(7);
        let items = vec![10, 20, 30, 40, 50, 60];

        let mut picked = rng.sample(&items, 4).unwrap();
        assert_eq!(picked.len(), 4);
        picked.sort();
        picked.dedup();
        assert_eq!(picked.len(), 4);
        assert!(picked.iter().all(|p| items.contains(p)));

        assert!(rng.sample(&items, 7).is_none());
        assert_eq!(rng.sample(&items, 0), Some(vec![]));
    }

    #[test]
    fn test_context_seeds_are_pinned() {
        // Saved seeds must replay identically on any toolchain
        assert_eq!(GameRng::new(42).for_context("setup").seed(), 0x0c26_375f_bbbc_b010);
        assert_eq!(GameRng::new(42).for_context("partition").seed(), 0x8ae4_3d24_595b_b29b);
        assert_eq!(GameRng::new(42).for_context("play").seed(), 0xee38_ed77_bf95_021d);
    }

    #[test]
    fn test_state_tracks_position() {
        let mut rng = GameRng::new(42);
        let fresh = rng.state();
        assert_eq!(fresh.word_pos, 0);

        for _ in 0..100 {
            rng.gen_index(1000);
        }
        let _ = rng.fork();

        let state = rng.state();
        assert_eq!(state.seed, 42);
        assert_eq!(state.fork_counter, 1);
        assert!(state.word_pos > fresh.word_pos);

        let mut again = GameRng::new(42);
        for _ in 0..100 {
            again.gen_index(1000);
        }
        let _ = again.fork();
        assert_eq!(again.state(), state);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
