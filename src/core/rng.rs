//! Deterministic random number generation for opponent moves.
//!
//! ## Key Features
//!
//! - **Injectable**: The engine only sees the `RandomSource` trait, so tests
//!   can script exact sequences
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Create independent branches, one per story opponent
//!
//! ```
//! use rust_rps::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.any_move(), b.any_move());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::moves::Move;

/// Source of randomness for opponent move selection.
pub trait RandomSource {
    /// Returns `true` with the given probability, expressed in percent.
    ///
    /// Values of 100 or more always return `true`; 0 always returns `false`.
    fn chance(&mut self, percent: u8) -> bool;

    /// A uniformly random move.
    fn any_move(&mut self) -> Move;
}

/// Seeded RNG backed by ChaCha8.
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

    /// Create an RNG with a seed drawn from the thread-local generator.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created from.
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
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }
}

impl RandomSource for GameRng {
    fn chance(&mut self, percent: u8) -> bool {
        match percent {
            0 => false,
            p if p >= 100 => true,
            p => self.inner.gen_bool(f64::from(p) / 100.0),
        }
    }

    fn any_move(&mut self) -> Move {
        Move::ALL[self.inner.gen_range(0..Move::ALL.len())]
    }
}
