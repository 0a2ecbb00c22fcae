//! `Ledger<R>` — the sliding-window permit book.
//!
//! # Why a deque of maps
//!
//! A single map keyed by `(region, tick)` would make the per-tick roll an
//! O(live keys) sweep to evict expired slots.  A `VecDeque` of per-tick maps
//! indexed by `t - t0` makes [`advance`][Ledger::advance] a single
//! `pop_front` — O(1) amortized — and bounds memory to the window width.
//! Regions are hashed by value (semantic hash), so two handles to the same
//! region always land on the same entry.

use std::collections::{HashMap, VecDeque};

use pm_core::{Region, Tick};

use crate::PermitEntry;

// ── SlotView ──────────────────────────────────────────────────────────────────

/// Non-materializing read of one slot.
///
/// Distinguishes "not addressable" from "addressable but never touched":
/// a [`Vacant`][SlotView::Vacant] slot is logically in the fresh
/// [`PermitState::fresh`][crate::PermitState::fresh] state without the
/// ledger having allocated anything for it.
#[derive(Debug)]
pub enum SlotView<'a> {
    /// `t < t0`, or beyond the configured window.
    OutOfLimits,
    /// In the window, never materialized — logically fresh on-sale.
    Vacant,
    /// In the window with stored state.
    Occupied(&'a PermitEntry),
}

// ── Ledger ────────────────────────────────────────────────────────────────────

/// Mapping `(region, tick) → PermitEntry` over the window `[t0, t0 + W]`.
///
/// Entries are created lazily on first mutable access and destroyed when
/// their tick leaves the window.  The past (`t < t0`) is not addressable.
pub struct Ledger<R: Region> {
    /// `buckets[i]` holds slots for tick `t0 + i`.
    buckets: VecDeque<HashMap<R, PermitEntry>>,
    t0: Tick,
    /// If set, slots with `t > t0 + window` are out of limits.
    window: Option<u64>,
}

impl<R: Region> Ledger<R> {
    pub fn new(window: Option<u64>) -> Self {
        Self {
            buckets: VecDeque::new(),
            t0: Tick::ZERO,
            window,
        }
    }

    /// The window's lower bound — the current tick.
    #[inline]
    pub fn t0(&self) -> Tick {
        self.t0
    }

    /// The configured window width, if any.
    #[inline]
    pub fn window(&self) -> Option<u64> {
        self.window
    }

    /// Whether `t` is currently addressable.
    #[inline]
    pub fn in_window(&self, t: Tick) -> bool {
        t >= self.t0
            && match self.window {
                Some(w) => t <= self.t0 + w,
                None => true,
            }
    }

    /// Mutable access to the slot at `(region, t)`, materializing the fresh
    /// on-sale entry if absent.
    ///
    /// Returns `None` iff `t` is outside the window; lookups inside the
    /// window never fail.  Missing buckets between the deque's end and `t`
    /// are created empty on demand.
    pub fn entry_mut(&mut self, region: &R, t: Tick) -> Option<&mut PermitEntry> {
        if !self.in_window(t) {
            return None;
        }
        let offset = (t - self.t0) as usize;
        while self.buckets.len() <= offset {
            self.buckets.push_back(HashMap::new());
        }
        Some(
            self.buckets[offset]
                .entry(region.clone())
                .or_default(),
        )
    }

    /// Read-only view of the slot at `(region, t)`.  Never allocates.
    pub fn view(&self, region: &R, t: Tick) -> SlotView<'_> {
        if !self.in_window(t) {
            return SlotView::OutOfLimits;
        }
        let offset = (t - self.t0) as usize;
        match self.buckets.get(offset).and_then(|b| b.get(region)) {
            Some(entry) => SlotView::Occupied(entry),
            None => SlotView::Vacant,
        }
    }

    /// Drop the bucket for the current tick and advance the window.
    ///
    /// Advancing past the deque's end is fine: missing buckets are created
    /// on demand by [`entry_mut`][Self::entry_mut].
    pub fn advance(&mut self) {
        self.buckets.pop_front();
        self.t0 = self.t0 + 1;
    }

    /// Number of materialized per-tick buckets.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Iterate the materialized entries for tick `t` (telemetry).
    ///
    /// Empty for out-of-window or never-touched ticks.
    pub fn iter_at(&self, t: Tick) -> impl Iterator<Item = (&R, &PermitEntry)> {
        let bucket = if self.in_window(t) {
            self.buckets.get((t - self.t0) as usize)
        } else {
            None
        };
        bucket.into_iter().flatten()
    }
}
