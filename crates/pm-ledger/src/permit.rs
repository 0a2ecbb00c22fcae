//! Permit states and per-key trade history.

use pm_core::{AgentId, Value};

// ── PermitState ───────────────────────────────────────────────────────────────

/// The tradable state of one `(region, tick)` slot.
///
/// State transitions, enforced by the auction driver:
///
/// ```text
///   fresh ──────────────▶ OnSale { owner: None, reserve 0 }
///   OnSale + settled bid ─▶ Used  { owner: buyer }
///   Used + owner's ask ───▶ OnSale { owner: Some(lister), reserve }
/// ```
///
/// Out-of-window slots are not a state — the ledger accessor refuses to
/// produce a reference for them (see [`Ledger`][crate::Ledger]).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PermitState {
    /// Open to bids.
    ///
    /// `owner` is `None` for a never-owned slot, or the prior owner who
    /// listed it.  While `highest_bidder` is `None`, `highest_bid` is zero.
    OnSale {
        owner: Option<AgentId>,
        min_value: Value,
        highest_bidder: Option<AgentId>,
        highest_bid: Value,
    },

    /// Exclusively owned, not for sale.
    Used { owner: AgentId },
}

impl PermitState {
    /// The state a freshly materialized slot starts in: on sale, unowned,
    /// zero reserve, no standing bid.
    pub fn fresh() -> Self {
        PermitState::OnSale {
            owner: None,
            min_value: Value::ZERO,
            highest_bidder: None,
            highest_bid: Value::ZERO,
        }
    }

    /// Relist an owned slot for sale at `min_value`.
    pub fn listed(owner: AgentId, min_value: Value) -> Self {
        PermitState::OnSale {
            owner: Some(owner),
            min_value,
            highest_bidder: None,
            highest_bid: Value::ZERO,
        }
    }

    /// The current owner, if any.
    pub fn owner(&self) -> Option<AgentId> {
        match *self {
            PermitState::OnSale { owner, .. } => owner,
            PermitState::Used { owner } => Some(owner),
        }
    }

    pub fn is_on_sale(&self) -> bool {
        matches!(self, PermitState::OnSale { .. })
    }

    pub fn is_used(&self) -> bool {
        matches!(self, PermitState::Used { .. })
    }
}

impl Default for PermitState {
    fn default() -> Self {
        Self::fresh()
    }
}

// ── SaleRecord ────────────────────────────────────────────────────────────────

/// One settled trade in a slot's history: the reserve it was listed at and
/// the bid that won it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaleRecord {
    pub reserve: Value,
    pub winning_bid: Value,
}

// ── PermitEntry ───────────────────────────────────────────────────────────────

/// Everything the ledger stores per `(region, tick)` key: the live state and
/// the append-only history of settled trades for that key.
///
/// The history lives and dies with the entry's window bucket, which bounds
/// it without any explicit trimming.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PermitEntry {
    pub state: PermitState,
    pub sales: Vec<SaleRecord>,
}

impl PermitEntry {
    /// Record a settled trade and flip the slot to `Used`.
    pub fn settle(&mut self, reserve: Value, winning_bid: Value, buyer: AgentId) {
        self.sales.push(SaleRecord {
            reserve,
            winning_bid,
        });
        self.state = PermitState::Used { owner: buyer };
    }
}
