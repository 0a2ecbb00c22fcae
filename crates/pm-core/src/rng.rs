//! Deterministic RNG plumbing for the auction driver and agents.
//!
//! # Determinism strategy
//!
//! The driver owns a single [`MasterRng`] seeded from the simulation seed —
//! the run's sole source of randomness.  Every agent callback receives a
//! freshly drawn 32-bit seed instead of a shared generator, so an agent's
//! random decisions depend only on the documented call order, never on how
//! much entropy other agents consumed.  Two runs with the same seed and the
//! same factory output are bit-identical.
//!
//! Agents that want more than one random draw per callback wrap their seed
//! in a [`CallRng`].  The seed is spread across the 64-bit state space with
//! the golden-ratio constant so consecutive seeds produce uncorrelated
//! streams.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── MasterRng ─────────────────────────────────────────────────────────────────

/// The driver-owned master generator.
///
/// Exclusively owned by the simulation loop; agents never see it.  Its only
/// job is drawing per-callback seeds.
pub struct MasterRng(SmallRng);

impl MasterRng {
    pub fn new(seed: u64) -> Self {
        MasterRng(SmallRng::seed_from_u64(seed))
    }

    /// Draw a fresh 32-bit seed for one callback invocation.
    #[inline]
    pub fn next_seed(&mut self) -> u32 {
        self.0.r#gen()
    }
}

// ── CallRng ───────────────────────────────────────────────────────────────────

/// Per-callback RNG an agent builds from its received seed.
///
/// Intentionally `!Sync`; callback-local by construction.
pub struct CallRng(SmallRng);

impl CallRng {
    /// Expand a 32-bit callback seed into a full generator.
    pub fn from_seed(seed: u32) -> Self {
        CallRng(SmallRng::seed_from_u64(
            (seed as u64).wrapping_mul(MIXING_CONSTANT),
        ))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
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

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
