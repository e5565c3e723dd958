//! The single deterministic random source of a run.
//!
//! # Determinism strategy
//!
//! Every probabilistic decision of the engine (placement, trait draws,
//! movement jitter, infection and death rolls, attendance sampling, travel)
//! draws from one `SimRng` that the caller owns and threads through
//! `initialize` and `step`.  The engine processes agents in ascending
//! `AgentId` order, so the same seed always yields the same run.
//!
//! `SimRng` is `Clone`: cloning forks the exact generator state, which is how
//! a caller resumes a run from a snapshot along the same trajectory.

use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts.  Replicate runs each get their own
/// `SimRng::new(seed)`.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: Distribution<T>,
    {
        self.0.r#gen()
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Symmetric uniform jitter in `[-half, half)`.  Returns 0 for `half <= 0`.
    #[inline]
    pub fn jitter(&mut self, half: f64) -> f64 {
        if half > 0.0 { self.0.gen_range(-half..half) } else { 0.0 }
    }

    /// Draw one value from any `rand` distribution.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        self.0.sample(dist)
    }

    /// `amount` distinct indices from `0..length`, uniformly without
    /// replacement, in selection order.
    ///
    /// # Panics
    /// Panics if `amount > length`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, length, amount).into_vec()
    }

    /// A uniformly chosen element of `items`; `None` if it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        items.choose(&mut self.0)
    }
}
