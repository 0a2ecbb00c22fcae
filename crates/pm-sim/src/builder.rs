//! Fluent builder for constructing a [`Sim`].

use std::collections::HashSet;

use pm_agent::AgentFactory;
use pm_core::{AgentId, MasterRng, Region, Tick, Value};
use pm_ledger::{Ledger, PermitState};

use crate::{Sim, SimError, SimOpts, SimResult, StopCriteria};

/// What an initial grant seeds a slot with.
enum Grant {
    /// `Used { owner }` — the agent starts the run holding the permit.
    Owned(AgentId),
    /// `OnSale { owner, reserve }` — the slot starts the run listed.
    Listed(Option<AgentId>, Value),
}

/// Fluent builder for [`Sim<R, S, F>`].
///
/// # Required inputs
///
/// - `F: AgentFactory<R, S>` — produces each tick's batch of new agents
/// - `space: S` — the world handed to factories and telemetry
/// - `seed: u64` — master seed; the run's sole source of randomness
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                                 |
/// |-----------------|-----------------------------------------|
/// | `.opts(o)`      | unbounded window, stop on no agents     |
/// | `.window(w)`    | unbounded                               |
/// | `.stop(c)`      | `StopCriteria::NoAgents`                |
/// | `.endow(..)`    | no pre-owned slots                      |
/// | `.list(..)`     | no pre-seeded listings                  |
///
/// Initial grants exist because trades are the only in-protocol path to
/// ownership: a scenario that starts with an owned or reserve-priced slot
/// must seed it before the first tick.  Grant IDs refer to the agents the
/// factory will create, in creation order.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(factory, space, 42)
///     .window(16)
///     .stop(StopCriteria::TimeThreshold(Tick(1_000)))
///     .endow(AgentId(0), home_cell, Tick(5))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<R: Region, S, F: AgentFactory<R, S>> {
    factory: F,
    space: S,
    seed: u64,
    opts: SimOpts,
    grants: Vec<(R, Tick, Grant)>,
}

impl<R: Region, S, F: AgentFactory<R, S>> SimBuilder<R, S, F> {
    /// Create a builder with all required inputs.
    pub fn new(factory: F, space: S, seed: u64) -> Self {
        Self {
            factory,
            space,
            seed,
            opts: SimOpts::default(),
            grants: Vec::new(),
        }
    }

    /// Replace the full option set.
    pub fn opts(mut self, opts: SimOpts) -> Self {
        self.opts = opts;
        self
    }

    /// Bound the addressable future to `[t0, t0 + window]`.
    pub fn window(mut self, window: u64) -> Self {
        self.opts.time_window = Some(window);
        self
    }

    /// Set the termination rule.
    pub fn stop(mut self, stop: StopCriteria) -> Self {
        self.opts.stop = stop;
        self
    }

    /// Seed `(region, t)` as owned by `owner` before the first tick.
    pub fn endow(mut self, owner: AgentId, region: R, t: Tick) -> Self {
        self.grants.push((region, t, Grant::Owned(owner)));
        self
    }

    /// Seed `(region, t)` as listed at `reserve` before the first tick.
    ///
    /// `owner` is `None` for a never-owned listing.
    pub fn list(mut self, owner: Option<AgentId>, region: R, t: Tick, reserve: Value) -> Self {
        self.grants.push((region, t, Grant::Listed(owner, reserve)));
        self
    }

    /// Validate grants, seed the ledger, and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<R, S, F>> {
        let mut ledger = Ledger::new(self.opts.time_window);

        // ── Validate and apply initial grants ─────────────────────────────
        //
        // Each slot may be granted at most once; two grants for one key
        // would silently drop the first and mask a scenario bug.
        let mut seen: HashSet<(R, Tick)> = HashSet::new();
        for (region, t, grant) in self.grants {
            if !seen.insert((region.clone(), t)) {
                return Err(SimError::DuplicateGrant {
                    region: format!("{region:?}"),
                    t,
                });
            }
            let entry = ledger
                .entry_mut(&region, t)
                .ok_or_else(|| SimError::GrantOutOfWindow {
                    region: format!("{region:?}"),
                    t,
                })?;
            entry.state = match grant {
                Grant::Owned(owner) => PermitState::Used { owner },
                Grant::Listed(owner, reserve) => match owner {
                    Some(owner) => PermitState::listed(owner, reserve),
                    None => PermitState::OnSale {
                        owner: None,
                        min_value: reserve,
                        highest_bidder: None,
                        highest_bid: Value::ZERO,
                    },
                },
            };
        }

        Ok(Sim::from_parts(
            self.factory,
            self.space,
            MasterRng::new(self.seed),
            self.opts,
            ledger,
        ))
    }
}
