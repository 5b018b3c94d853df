//! Deterministic random number generation for story selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical story picks
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use flames::core::StoryRng;
//!
//! let mut a = StoryRng::new(42);
//! let mut b = StoryRng::new(42);
//! assert_eq!(a.gen_index(3), b.gen_index(3));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used to pick result stories.
///
/// Uses ChaCha8 so a session seeded with the same value tells the same
/// stories in the same order, on every platform.
#[derive(Clone, Debug)]
pub struct StoryRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl StoryRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate an index in `0..len`. Returns `None` for `len == 0`.
    pub fn gen_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.inner.gen_range(0..len))
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> StoryRngState {
        StoryRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &StoryRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
