//! An agent that never trades.

use pm_core::{Region, Tick};

use crate::Agent;

/// An [`Agent`] that submits nothing and retires at a configured tick.
///
/// Useful as a placeholder in tests or for passive populations that merely
/// keep the simulation alive.
pub struct IdleAgent {
    retire_at: Tick,
}

impl IdleAgent {
    /// Idle until `retire_at`, then stop.
    pub fn until(retire_at: Tick) -> Self {
        Self { retire_at }
    }

    /// Stop at the first poll.
    pub fn immediate() -> Self {
        Self::until(Tick::ZERO)
    }
}

impl<R: Region> Agent<R> for IdleAgent {
    fn stop(&mut self, t: Tick, _seed: u32) -> bool {
        t >= self.retire_at
    }
}
