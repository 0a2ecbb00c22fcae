//! Driver configuration.

use pm_core::Tick;

// ── StopCriteria ──────────────────────────────────────────────────────────────

/// When the simulation loop terminates.  Evaluated after each tick's advance
/// phase; evaluation is side-effect free.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopCriteria {
    /// Stop once no agent remains active.
    #[default]
    NoAgents,
    /// Stop once the clock has passed the threshold (`t0 > T`).
    TimeThreshold(Tick),
}

// ── SimOpts ───────────────────────────────────────────────────────────────────

/// Top-level simulation options.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimOpts {
    /// If set, slots with `t > t0 + time_window` are not addressable.
    /// `None` leaves the future unbounded (memory then grows with the
    /// furthest tick agents touch).
    pub time_window: Option<u64>,

    /// Termination rule.  Default: run until no agents remain.
    pub stop: StopCriteria,
}
