//! `pm-ledger` — permit state machine and sliding-window ledger.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`permit`] | `PermitState`, `PermitEntry`, `SaleRecord`                 |
//! | [`ledger`] | `Ledger<R>` — deque of per-tick maps, `SlotView`           |
//!
//! # Design notes
//!
//! The ledger is logically a total mapping from `(region, tick)` to permit
//! state over the addressable window `[t0, t0 + W]`.  Physically it is a
//! `VecDeque` of per-tick `HashMap`s indexed by `t - t0`: `advance()` pops
//! the front bucket and bumps `t0`, which makes the per-tick roll O(1) and
//! bounds memory to `W` buckets regardless of how long the run is.
//!
//! The original formulation stored an `out_of_limits` sentinel that callers
//! had to treat as read-only.  Here the accessor returns `Option`/[`SlotView`]
//! instead, so a write through an out-of-window reference is unrepresentable
//! rather than merely discouraged.

pub mod ledger;
pub mod permit;


pub use ledger::{Ledger, SlotView};
pub use permit::{PermitEntry, PermitState, SaleRecord};
