//! `pm-sim` — two-phase auction driver for the permit-market framework.
//!
//! # Per-tick phase order
//!
//! ```text
//! for each tick t0 (do-while, stop checked after advance):
//!   ⓪ Telemetry  — observer.on_tick_start(t0, space, ledger)
//!   ① Ingest     — factory produces new agents; append to roster + active
//!   ② Bid        — each active agent (roster order) submits bids through a
//!                  BidMarket; stop() polled right after each agent acts
//!   ③ Settlement — keys first-bid this tick, in first-bid order: emit the
//!                  trade, notify buyer/seller, flip slot to Used
//!   ④ Ask        — each active agent (same order) lists owned slots through
//!                  an AskMarket; listings applied after the loop,
//!                  last-writer-wins per key
//!   ⑤ Retirement — on_finished for agents that answered stop = true
//!   ⑥ Advance    — active ← keep_active, ledger window slides, t0 += 1
//! ```
//!
//! No phase observes writes belonging to a later phase of the same tick.
//! The driver is single-threaded and synchronous; every agent callback
//! completes before the next ledger access.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use pm_sim::{NoopObserver, SimBuilder, SimOpts, StopCriteria};
//!
//! let mut sim = SimBuilder::new(factory, space, 42)
//!     .stop(StopCriteria::TimeThreshold(Tick(100)))
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod opts;
pub mod sim;
pub mod trade;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use opts::{SimOpts, StopCriteria};
pub use sim::{simulate, Sim};
pub use trade::Trade;
