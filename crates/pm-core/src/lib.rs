//! `pm-core` — foundational types for the permit-market auction simulator.
//!
//! This crate is a dependency of every other `pm-*` crate.  It intentionally
//! has no `pm-*` dependencies and minimal external ones (only `rand`,
//! `thiserror`, and `derive_more`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`ids`]    | `AgentId`                                             |
//! | [`time`]   | `Tick`                                                |
//! | [`value`]  | `Value` — fixed-point auction prices                  |
//! | [`region`] | `Region` and `Navigable` traits                       |
//! | [`rng`]    | `MasterRng` (driver-owned), `CallRng` (per-callback)  |
//! | [`error`]  | `PmError`, `PmResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |

pub mod error;
pub mod ids;
pub mod region;
pub mod rng;
pub mod time;
pub mod value;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{PmError, PmResult};
pub use ids::AgentId;
pub use region::{Navigable, Region};
pub use rng::{CallRng, MasterRng};
pub use time::Tick;
pub use value::Value;
