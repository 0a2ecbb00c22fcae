//! `pm-agent` — agent contract and the market views agents trade through.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`agent`]   | `Agent` trait, `BoxedAgent`                                   |
//! | [`status`]  | `PublicStatus` — the per-agent ledger projection              |
//! | [`market`]  | `BidMarket`/`AskMarket` — phase-scoped submission views       |
//! | [`factory`] | `AgentFactory` trait (blanket-implemented for closures)       |
//! | [`idle`]    | `IdleAgent` — placeholder that never trades                   |
//!
//! # Design notes
//!
//! The two-phase auction in pm-sim works as follows:
//!
//! 1. **Bid phase**: each active agent receives a [`BidMarket`] and may
//!    submit bids against on-sale slots.  Acceptance is immediate and
//!    visible to agents later in the same phase.
//!
//! 2. **Ask phase** (after settlement): each active agent receives an
//!    [`AskMarket`] and may list slots it owns.  Listings are recorded and
//!    applied only after the whole phase, so ownership checks throughout
//!    the phase see pre-ask state.
//!
//! Both views expose the same read-only [`PublicStatus`] projection; an
//! agent never sees raw ledger state, standing bids, or other agents'
//! holdings.

pub mod agent;
pub mod factory;
pub mod idle;
pub mod market;
pub mod status;

#[cfg(test)]
mod tests;

pub use agent::{Agent, BoxedAgent};
pub use factory::AgentFactory;
pub use idle::IdleAgent;
pub use market::{Ask, AskMarket, BidMarket};
pub use status::PublicStatus;
