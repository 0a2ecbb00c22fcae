//! Region traits — the spatial key type of every permit.
//!
//! The auction driver treats regions as opaque keys: it only needs
//! value-equality, a stable hash, and cheap cloning (the ledger stores owned
//! copies).  [`Region`] captures exactly that and is blanket-implemented, so
//! any suitable value type — a grid cell, an airspace tile, a plain tuple in
//! tests — is a region without ceremony.
//!
//! Richer spatial queries (adjacency, distance, pathfinding) are declared in
//! [`Navigable`] and consumed **only by agent implementations**; nothing in
//! the ledger or driver calls them.

use crate::{CallRng, Value};

use std::fmt::Debug;
use std::hash::Hash;

/// The capability set the auction core requires of a spatial key.
///
/// Blanket-implemented for every type with the right bounds.  `Eq + Hash`
/// must reflect semantic identity — two handles to the same region must
/// compare equal and hash identically, or the ledger will fork their state.
pub trait Region: Clone + Eq + Hash + Debug + 'static {}

impl<T: Clone + Eq + Hash + Debug + 'static> Region for T {}

/// Spatial queries for regions embedded in a navigable topology.
///
/// Agent strategies use these to plan which permits to bid on.  All methods
/// are pure; `shortest_path` breaks ties through the caller's RNG so path
/// choice stays deterministic per callback seed.
pub trait Navigable: Region {
    /// Regions reachable from `self` in one step.
    fn neighbors(&self) -> Vec<Self>;

    /// Exact step distance to `other`.
    fn distance(&self, other: &Self) -> u64;

    /// Admissible cost estimate to `other`, in auction-value units.
    fn heuristic_distance(&self, other: &Self) -> Value;

    /// A step-by-step path from `self` to `other`, inclusive of both ends.
    ///
    /// Ties between equally good steps are broken with `rng` so distinct
    /// agents spread over distinct corridors.
    fn shortest_path(&self, other: &Self, rng: &mut CallRng) -> Vec<Self>;

    /// Whether moving `before → self → to` changes heading.
    fn turn(&self, _before: &Self, _to: &Self) -> bool {
        false
    }

    /// Whether moving `self → to` changes altitude/level.
    fn climb(&self, _to: &Self) -> bool {
        false
    }
}
