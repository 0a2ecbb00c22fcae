//! Simulation observer trait for telemetry and trade reporting.

use pm_core::{Region, Tick};
use pm_ledger::Ledger;

use crate::Trade;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  References handed to the callbacks
/// are borrow-only and valid for the duration of that call.
///
/// # Example — trade printer
///
/// ```rust,ignore
/// struct TradePrinter;
///
/// impl<R: Region + Debug, S> SimObserver<R, S> for TradePrinter {
///     fn on_trade(&mut self, trade: &Trade<R>) {
///         println!("{trade}");
///     }
/// }
/// ```
pub trait SimObserver<R: Region, S> {
    /// Called at the very start of each tick, before any processing, with
    /// read-only access to the space and the full ledger.
    fn on_tick_start(&mut self, _t: Tick, _space: &S, _ledger: &Ledger<R>) {}

    /// Called once per settled trade, in settlement order.
    fn on_trade(&mut self, _trade: &Trade<R>) {}

    /// Called at the end of each tick.
    ///
    /// `trades` is the number of trades settled this tick.
    fn on_tick_end(&mut self, _t: Tick, _trades: usize) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want callbacks.
pub struct NoopObserver;

impl<R: Region, S> SimObserver<R, S> for NoopObserver {}
