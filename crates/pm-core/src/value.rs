//! Fixed-point auction values.
//!
//! All bids, reserves, and trade prices use fixed-point arithmetic with
//! 4 decimal places to keep comparisons exact — the auction rules hinge on
//! strict `>` between submitted values, which floating point would blur.
//! The protocol does not define units; `Value` is a pure magnitude.

use derive_more::{Add, AddAssign, From, Into, Sum};
use std::fmt;

/// Scale factor: 4 decimal places.
const SCALE: u64 = 10_000;

/// Fixed-point auction value with 4 decimal places.
///
/// # Examples
/// - `Value(10000)` = 1.0
/// - `Value(15000)` = 1.5
/// - `Value(1)` = 0.0001
///
/// Values are non-negative by construction (`u64` inner).
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Add,
    AddAssign,
    Sum,
    From,
    Into,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Value(pub u64);

impl Value {
    pub const ZERO: Value = Value(0);

    /// Create a `Value` from a floating-point magnitude.
    #[inline]
    pub fn from_float(v: f64) -> Self {
        Self((v.max(0.0) * SCALE as f64).round() as u64)
    }

    /// Convert to floating-point for display/calculations.
    #[inline]
    pub fn to_float(self) -> f64 {
        self.0 as f64 / SCALE as f64
    }

    /// Raw internal value.
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }

    /// Check if zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Saturating subtraction — values cannot go negative.
    #[inline]
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Value(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value({:.4})", self.to_float())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.to_float())
    }
}

// Allow `value == 50` comparisons against raw units in tests.
impl PartialEq<u64> for Value {
    fn eq(&self, other: &u64) -> bool {
        self.0 == *other
    }
}
