//! Phase-scoped market views.
//!
//! The driver constructs one view per agent per phase and hands it to the
//! agent callback by mutable reference.  A view borrows the ledger for the
//! duration of the callback — references obtained through
//! [`status`][BidMarket::status] cannot outlive the call, which is exactly
//! the visibility contract: agents observe the market only while they are
//! being asked to act on it.

use pm_core::{AgentId, Region, Tick, Value};
use pm_ledger::{Ledger, PermitState};

use crate::status::{project, PublicStatus};

// ── BidMarket ─────────────────────────────────────────────────────────────────

/// Bid-phase submission view for one agent.
///
/// Constructed by the driver; agent code only ever borrows it.
pub struct BidMarket<'a, R: Region> {
    ledger: &'a mut Ledger<R>,
    viewer: AgentId,
    /// Keys receiving their first bid this tick, in first-bid order.
    /// Settlement walks this list.
    pending: &'a mut Vec<(R, Tick)>,
}

impl<'a, R: Region> BidMarket<'a, R> {
    pub fn new(
        ledger: &'a mut Ledger<R>,
        viewer: AgentId,
        pending: &'a mut Vec<(R, Tick)>,
    ) -> Self {
        Self {
            ledger,
            viewer,
            pending,
        }
    }

    /// Submit a bid of `value` on `(region, t)`.
    ///
    /// Accepted iff the slot is an in-window listing and `value` strictly
    /// exceeds both the reserve and the standing high bid.  On acceptance
    /// this agent becomes the standing high bidder and `true` is returned;
    /// any other outcome returns `false` without mutating the slot.
    ///
    /// Note there is no self-bid guard on this path: an agent that bids on
    /// its own listing (which its own [`status`][Self::status] reports as
    /// unavailable) will, if it wins, buy the permit from itself at the bid
    /// price.
    pub fn bid(&mut self, region: &R, t: Tick, value: Value) -> bool {
        let Some(entry) = self.ledger.entry_mut(region, t) else {
            return false;
        };
        match &mut entry.state {
            PermitState::Used { .. } => false,
            PermitState::OnSale {
                min_value,
                highest_bidder,
                highest_bid,
                ..
            } => {
                if value > *min_value && value > *highest_bid {
                    if highest_bidder.is_none() {
                        self.pending.push((region.clone(), t));
                    }
                    *highest_bidder = Some(self.viewer);
                    *highest_bid = value;
                    true
                } else {
                    false
                }
            }
        }
    }

    /// This agent's view of `(region, t)`.
    pub fn status(&self, region: &R, t: Tick) -> PublicStatus<'_> {
        project(self.ledger.view(region, t), self.viewer)
    }
}

// ── AskMarket ─────────────────────────────────────────────────────────────────

/// A recorded listing, applied by the driver after the ask phase completes.
#[derive(Debug, Clone)]
pub struct Ask<R> {
    pub region: R,
    pub t: Tick,
    pub lister: AgentId,
    pub min_value: Value,
}

/// Ask-phase submission view for one agent.
pub struct AskMarket<'a, R: Region> {
    ledger: &'a mut Ledger<R>,
    viewer: AgentId,
    /// Listings recorded this phase, in submission order.  Applied after
    /// the phase; duplicate keys resolve last-writer-wins.
    asks: &'a mut Vec<Ask<R>>,
}

impl<'a, R: Region> AskMarket<'a, R> {
    pub fn new(ledger: &'a mut Ledger<R>, viewer: AgentId, asks: &'a mut Vec<Ask<R>>) -> Self {
        Self {
            ledger,
            viewer,
            asks,
        }
    }

    /// List the owned slot `(region, t)` for sale at reserve `min_value`.
    ///
    /// Accepted iff the slot is in-window, `Used`, and owned by this agent.
    /// The listing takes effect only after every active agent's ask phase
    /// has run; until then the slot still reads as owned.
    pub fn ask(&mut self, region: &R, t: Tick, min_value: Value) -> bool {
        let Some(entry) = self.ledger.entry_mut(region, t) else {
            return false;
        };
        match entry.state {
            PermitState::OnSale { .. } => false,
            PermitState::Used { owner } => {
                if owner != self.viewer {
                    return false;
                }
                self.asks.push(Ask {
                    region: region.clone(),
                    t,
                    lister: self.viewer,
                    min_value,
                });
                true
            }
        }
    }

    /// This agent's view of `(region, t)` — same projection as the bid phase.
    pub fn status(&self, region: &R, t: Tick) -> PublicStatus<'_> {
        project(self.ledger.view(region, t), self.viewer)
    }
}
