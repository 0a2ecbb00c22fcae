//! `pm-grid` — a concrete region implementation: a bounded 3-D lattice.
//!
//! The auction core treats regions as opaque hashable keys; this crate
//! supplies the kind of region agents actually navigate — axis-aligned
//! cells in a bounded grid with a handful of altitude levels, the shape of
//! a low-altitude flight-corridor space.
//!
//! | Module    | Contents                                    |
//! |-----------|---------------------------------------------|
//! | [`space`] | `GridDims` — the bounded lattice            |
//! | [`cell`]  | `Cell` — one lattice position, `Navigable`  |

pub mod cell;
pub mod space;


pub use cell::Cell;
pub use space::GridDims;
