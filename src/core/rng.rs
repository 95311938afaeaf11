//! Injectable randomness for tile spawning.
//!
//! The engine draws exactly two kinds of random numbers: a float in `[0, 1)`
//! to decide between a 2 and a 4, and an index to pick the empty cell. Both
//! go through the [`RandomSource`] trait so sessions can run on a seeded
//! [`GameRng`] in production and on a [`ScriptedRng`] in tests.
//!
//! ```
//! use rust_2048::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//! assert_eq!(rng.next_index(16), replay.next_index(16));
//!
//! // Forks are independent but deterministic.
//! let mut episode = rng.fork();
//! let mut episode_replay = replay.fork();
//! assert_eq!(episode.next_float(), episode_replay.next_float());
//! ```

use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of the random draws a session needs.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_float(&mut self) -> f64;

    /// Uniform index in `[0, n)`. Callers never pass `n == 0`.
    fn next_index(&mut self, n: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_float(&mut self) -> f64 {
        (**self).next_float()
    }

    fn next_index(&mut self, n: usize) -> usize {
        (**self).next_index(n)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_float(&mut self) -> f64 {
        (**self).next_float()
    }

    fn next_index(&mut self, n: usize) -> usize {
        (**self).next_index(n)
    }
}

/// Deterministic RNG with forking for per-episode streams.
///
/// Uses ChaCha8 for speed while keeping a reproducible sequence per seed.
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

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    /// The RL environment forks once per episode.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Derive a stream for a named consumer, e.g. an agent's policy.
    ///
    /// The stream depends only on the seed and `context`, never on how many
    /// forks were taken, so it does not overlap the per-episode forks.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RandomSource for GameRng {
    fn next_float(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    fn next_index(&mut self, n: usize) -> usize {
        self.inner.gen_range(0..n)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture and restore are O(1)
/// regardless of how many numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// Replays fixed sequences of draws, cycling when exhausted.
///
/// Indices are reduced modulo the requested bound so a script written for
/// one board stays in range on another. An empty script yields `0.0` and `0`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    floats: Vec<f64>,
    indices: Vec<usize>,
    float_pos: usize,
    index_pos: usize,
}

impl ScriptedRng {
    /// Create a source replaying the given floats and indices.
    #[must_use]
    pub fn new(floats: Vec<f64>, indices: Vec<usize>) -> Self {
        Self {
            floats,
            indices,
            float_pos: 0,
            index_pos: 0,
        }
    }

    /// Always draws the same float and index.
    #[must_use]
    pub fn constant(float: f64, index: usize) -> Self {
        Self::new(vec![float], vec![index])
    }
}

impl RandomSource for ScriptedRng {
    fn next_float(&mut self) -> f64 {
        if self.floats.is_empty() {
            return 0.0;
        }
        let value = self.floats[self.float_pos % self.floats.len()];
        self.float_pos += 1;
        value
    }

    fn next_index(&mut self, n: usize) -> usize {
        if self.indices.is_empty() || n == 0 {
            return 0;
        }
        let value = self.indices[self.index_pos % self.indices.len()];
        self.index_pos += 1;
        value % n
    }
}
