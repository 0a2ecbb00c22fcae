//! Settled trade records.

use std::fmt;

use pm_core::{AgentId, Tick, Value};

/// One settled trade, emitted during the settlement phase.
///
/// `tick` is when the trade settled; `t` is the occupancy tick of the
/// permit that changed hands.  `seller` is `None` when the slot had never
/// been owned.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Trade<R> {
    pub tick: Tick,
    pub seller: Option<AgentId>,
    pub buyer: AgentId,
    pub region: R,
    pub t: Tick,
    pub price: Value,
}

impl<R: fmt::Debug> fmt::Display for Trade<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Trade[{}]: ({:?}, {}) @ {} (buyer: {}, seller: {})",
            self.tick,
            self.region,
            self.t,
            self.price,
            self.buyer,
            match self.seller {
                Some(id) => id.to_string(),
                None => "none".to_string(),
            },
        )
    }
}
