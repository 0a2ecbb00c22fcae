//! The `Agent` trait — the main extension point for user code.

use pm_core::{AgentId, Region, Tick, Value};

use crate::{AskMarket, BidMarket};

/// Pluggable auction participant.
///
/// Implement this trait to define how an agent trades.  The driver moves
/// concrete agents into `Box<dyn Agent<R>>` handles and owns them
/// exclusively; there is no sharing between agents.
///
/// # Required methods
///
/// Only [`stop`][Self::stop] is required — an agent that cannot say when it
/// is finished cannot participate, and the type checker enforces that at the
/// boundary where concrete agents are adapted.  The phase and notification
/// hooks have no-op defaults so simple agents implement only what they use.
///
/// # Determinism
///
/// Every callback receives a freshly drawn 32-bit `seed` from the driver's
/// master generator.  Agents needing randomness expand it with
/// [`CallRng::from_seed`][pm_core::CallRng::from_seed]; agents that draw
/// nothing simply ignore it.  Either way, behavior depends only on the
/// driver's documented call order.
///
/// # Example
///
/// ```rust,ignore
/// struct Sniper { budget: Value }
///
/// impl<R: Region> Agent<R> for Sniper {
///     fn bid_phase(&mut self, t: Tick, market: &mut BidMarket<'_, R>, _seed: u32) {
///         for target in self.targets() {
///             let reserve = match market.status(&target, t) {
///                 PublicStatus::Available { min_value, .. } => min_value,
///                 _ => continue,
///             };
///             market.bid(&target, t, reserve + Value(1));
///         }
///     }
///
///     fn stop(&mut self, _t: Tick, _seed: u32) -> bool {
///         self.budget.is_zero()
///     }
/// }
/// ```
pub trait Agent<R: Region> {
    /// Called once per tick while the agent is active.  The agent may submit
    /// any number of bids through `market`; each returns acceptance
    /// immediately.
    fn bid_phase(&mut self, _t: Tick, _market: &mut BidMarket<'_, R>, _seed: u32) {}

    /// Called once per tick after settlement.  The agent may list slots it
    /// owns — including slots it won this very tick.
    fn ask_phase(&mut self, _t: Tick, _market: &mut AskMarket<'_, R>, _seed: u32) {}

    /// A bid of this agent settled in its favor: it now owns `(region, t)`.
    fn on_bought(&mut self, _region: &R, _t: Tick, _price: Value) {}

    /// A slot this agent had listed was sold.  Delivered even after the
    /// agent retires, when a standing listing settles late.
    fn on_sold(&mut self, _region: &R, _t: Tick, _price: Value) {}

    /// Delivered exactly once when the agent retires.
    fn on_finished(&mut self, _id: AgentId, _t: Tick) {}

    /// Polled once per tick after the bid phase; `true` retires the agent
    /// at the end of the tick.
    fn stop(&mut self, t: Tick, seed: u32) -> bool;
}

/// Owning, type-erased agent handle as stored in the driver's roster.
pub type BoxedAgent<R> = Box<dyn Agent<R>>;
