//! The `Sim` struct and its tick loop.

use pm_agent::{AgentFactory, Ask, AskMarket, BidMarket, BoxedAgent};
use pm_core::{AgentId, MasterRng, Region, Tick};
use pm_ledger::{Ledger, PermitState};

use crate::{SimError, SimObserver, SimOpts, SimResult, StopCriteria, Trade};

/// The auction driver.
///
/// `Sim<R, S, F>` owns all simulation state — the ledger, the roster, the
/// space, the factory, and the master RNG — and drives the seven-phase tick
/// loop documented at the [crate root](crate).
///
/// The roster is append-only and indexed by [`AgentId`]: retired agents are
/// retained so that a late `on_sold` for a listing they never finished
/// selling is always deliverable.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<R: Region, S, F: AgentFactory<R, S>> {
    space: S,
    factory: F,
    opts: SimOpts,
    rng: MasterRng,

    /// Every agent ever admitted, in creation order.
    roster: Vec<BoxedAgent<R>>,
    /// Agents participating in the current tick, in roster order.
    active: Vec<AgentId>,

    ledger: Ledger<R>,
}

impl<R: Region, S, F: AgentFactory<R, S>> Sim<R, S, F> {
    pub(crate) fn from_parts(
        factory: F,
        space: S,
        rng: MasterRng,
        opts: SimOpts,
        ledger: Ledger<R>,
    ) -> Self {
        Self {
            space,
            factory,
            opts,
            rng,
            roster: Vec::new(),
            active: Vec::new(),
            ledger,
        }
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// The current tick — the lower bound of the addressable window.
    #[inline]
    pub fn t0(&self) -> Tick {
        self.ledger.t0()
    }

    /// Read-only ledger access (telemetry, tests).
    #[inline]
    pub fn ledger(&self) -> &Ledger<R> {
        &self.ledger
    }

    /// The space agents inhabit.
    #[inline]
    pub fn space(&self) -> &S {
        &self.space
    }

    /// Number of agents active in the upcoming tick.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Number of agents ever admitted, retired included.
    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    /// Run ticks until the stop criterion holds.
    ///
    /// The criterion is evaluated after each tick's advance phase, so at
    /// least one tick always runs.
    pub fn run<O: SimObserver<R, S>>(&mut self, observer: &mut O) -> SimResult<()> {
        loop {
            self.step(observer)?;
            if self.should_stop() {
                break;
            }
        }
        observer.on_sim_end(self.t0());
        Ok(())
    }

    /// Execute exactly one tick (ignores the stop criterion).
    ///
    /// Useful for tests and incremental stepping.
    pub fn step<O: SimObserver<R, S>>(&mut self, observer: &mut O) -> SimResult<()> {
        let t0 = self.t0();

        // ── Phase 0: telemetry ────────────────────────────────────────────
        observer.on_tick_start(t0, &self.space, &self.ledger);

        // ── Phase 1: ingest new agents ────────────────────────────────────
        let seed = self.rng.next_seed();
        for agent in self.factory.spawn(t0, &self.space, seed) {
            let id = AgentId(self.roster.len() as u32);
            self.roster.push(agent);
            self.active.push(id);
        }

        // ── Phase 2: bid ──────────────────────────────────────────────────
        //
        // Bids mutate listings in place, so an agent later in roster order
        // sees (and must beat) earlier agents' standing bids.  `pending`
        // collects each key's first bid this tick; settlement walks it in
        // that order.
        let mut keep_active = Vec::with_capacity(self.active.len());
        let mut to_finished = Vec::new();
        let mut pending: Vec<(R, Tick)> = Vec::new();

        for &id in &self.active {
            let seed = self.rng.next_seed();
            {
                let mut market = BidMarket::new(&mut self.ledger, id, &mut pending);
                self.roster[id.index()].bid_phase(t0, &mut market, seed);
            }

            let seed = self.rng.next_seed();
            if self.roster[id.index()].stop(t0, seed) {
                to_finished.push(id);
            } else {
                keep_active.push(id);
            }
        }

        // ── Phase 3: settlement ───────────────────────────────────────────
        //
        // Every pending key must still be an open listing with a standing
        // bidder; the bid path never removes a bidder and nothing else
        // writes during the bid phase.  Anything else is a driver bug.
        let mut trades = 0usize;
        for (region, t) in pending {
            let entry =
                self.ledger
                    .entry_mut(&region, t)
                    .ok_or_else(|| SimError::SettlementConflict {
                        region: format!("{region:?}"),
                        t,
                    })?;

            let (seller, min_value, buyer, price) = match entry.state {
                PermitState::OnSale {
                    owner,
                    min_value,
                    highest_bidder: Some(buyer),
                    highest_bid,
                } => (owner, min_value, buyer, highest_bid),
                _ => {
                    return Err(SimError::SettlementConflict {
                        region: format!("{region:?}"),
                        t,
                    })
                }
            };

            entry.settle(min_value, price, buyer);

            let trade = Trade {
                tick: t0,
                seller,
                buyer,
                region: region.clone(),
                t,
                price,
            };
            observer.on_trade(&trade);
            trades += 1;

            self.roster[buyer.index()].on_bought(&region, t, price);
            if let Some(seller) = seller {
                // The seller may be retiring this very tick, or may be the
                // buyer itself (self-trade); both still get notified.
                self.roster[seller.index()].on_sold(&region, t, price);
            }
        }

        // ── Phase 4: ask ──────────────────────────────────────────────────
        //
        // Settlement may have changed ownership since phase 2, so an agent
        // that just won a permit can immediately relist it.  Listings are
        // recorded during the loop and applied afterwards in submission
        // order; a key asked twice ends up with the last submission.
        let mut asks: Vec<Ask<R>> = Vec::new();
        for &id in &self.active {
            let seed = self.rng.next_seed();
            let mut market = AskMarket::new(&mut self.ledger, id, &mut asks);
            self.roster[id.index()].ask_phase(t0, &mut market, seed);
        }

        for ask in asks {
            if let Some(entry) = self.ledger.entry_mut(&ask.region, ask.t) {
                entry.state = PermitState::listed(ask.lister, ask.min_value);
            }
        }

        // ── Phase 5: retirement ───────────────────────────────────────────
        for &id in &to_finished {
            self.roster[id.index()].on_finished(id, t0);
        }

        // ── Phase 6: advance ──────────────────────────────────────────────
        self.active = keep_active;
        self.ledger.advance();
        observer.on_tick_end(t0, trades);

        Ok(())
    }

    fn should_stop(&self) -> bool {
        match self.opts.stop {
            StopCriteria::NoAgents => self.active.is_empty(),
            StopCriteria::TimeThreshold(threshold) => self.t0() > threshold,
        }
    }
}

// ── simulate ──────────────────────────────────────────────────────────────────

/// One-shot driver entry point: build a [`Sim`] from `factory`, `space`,
/// `seed`, and `opts`, then run it to completion.
///
/// Equivalent to [`SimBuilder`][crate::SimBuilder] + [`Sim::run`] for
/// callers that need no initial grants.
pub fn simulate<R, S, F, O>(
    factory: F,
    space: S,
    seed: u64,
    opts: SimOpts,
    observer: &mut O,
) -> SimResult<()>
where
    R: Region,
    F: AgentFactory<R, S>,
    O: SimObserver<R, S>,
{
    crate::SimBuilder::new(factory, space, seed)
        .opts(opts)
        .build()?
        .run(observer)
}
