//! The public, per-agent projection of ledger state.

use pm_core::{AgentId, Value};
use pm_ledger::{PermitState, SaleRecord, SlotView};

/// What one agent is allowed to know about one slot.
///
/// Projection rules, applied against the raw ledger state:
///
/// | Ledger state        | Viewer relationship | Projection      |
/// |---------------------|---------------------|-----------------|
/// | out of limits       | —                   | `Unavailable`   |
/// | used                | viewer is owner     | `Owned`         |
/// | used                | someone else's      | `Unavailable`   |
/// | on sale             | viewer listed it    | `Unavailable`   |
/// | on sale             | anyone else         | `Available`     |
///
/// An agent's own listings project as `Unavailable` so agents do not bid
/// against themselves.  Standing bids (`highest_bid`/`highest_bidder`) are
/// never exposed — only the reserve is public.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicStatus<'a> {
    /// Not open to this agent: out of window, owned by another agent, or
    /// this agent's own listing.
    Unavailable,

    /// Open to bid at or above `min_value` (strictly above, to be precise:
    /// a bid equal to the reserve is rejected).
    Available {
        min_value: Value,
        /// Settled trades previously recorded for this slot, oldest first.
        /// Borrowed straight from the ledger — no copies are made until the
        /// agent actually reads it.
        sales: &'a [SaleRecord],
    },

    /// Held by this agent and not currently listed.
    Owned,
}

/// Apply the projection table to a raw slot view.
pub(crate) fn project(view: SlotView<'_>, viewer: AgentId) -> PublicStatus<'_> {
    match view {
        SlotView::OutOfLimits => PublicStatus::Unavailable,
        // A vacant in-window slot is logically fresh on-sale: open to all.
        SlotView::Vacant => PublicStatus::Available {
            min_value: Value::ZERO,
            sales: &[],
        },
        SlotView::Occupied(entry) => match entry.state {
            PermitState::Used { owner } => {
                if owner == viewer {
                    PublicStatus::Owned
                } else {
                    PublicStatus::Unavailable
                }
            }
            PermitState::OnSale {
                owner, min_value, ..
            } => {
                if owner == Some(viewer) {
                    PublicStatus::Unavailable
                } else {
                    PublicStatus::Available {
                        min_value,
                        sales: &entry.sales,
                    }
                }
            }
        },
    }
}
