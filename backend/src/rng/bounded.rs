//! Bounded output reductions
//!
//! Families historically disagree on how a raw word becomes a value below a
//! bound, and streams are compared bit-for-bit, so each family names its
//! [`Reduction`] and the facade applies it verbatim.
//!
//! # Inherited restriction
//!
//! [`Reduction::FifteenBit`] keeps only 15 bits of the raw output and
//! multiplies in 32-bit arithmetic. It is exact for bounds in
//! `-32768..=32767`; larger bounds are biased and may overflow out of range.
//! This is the documented behavior of the hybrid families and is preserved.

use serde::{Deserialize, Serialize};

/// Reduction of a raw `u32` to `[0, bound)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reduction {
    /// `(bound * raw) >> 32` in 64-bit arithmetic; negative bounds give 0.
    MultiplyHigh,
    /// `(bound * (raw & 0x7FFF)) >> 15` in 32-bit arithmetic.
    FifteenBit,
}

impl Reduction {
    #[inline]
    pub fn reduce(self, raw: u32, bound: i32) -> i32 {
        match self {
            Reduction::MultiplyHigh => multiply_high(raw, bound),
            Reduction::FifteenBit => fifteen_bit(raw, bound),
        }
    }
}

#[inline]
pub fn multiply_high(raw: u32, bound: i32) -> i32 {
    (((bound as i64) * (raw as i64)) >> 32) as i32 & !(bound >> 31)
}

#[inline]
pub fn fifteen_bit(raw: u32, bound: i32) -> i32 {
    bound.wrapping_mul((raw & 0x7FFF) as i32) >> 15
}

/// A value strictly between 0 and `outer` in magnitude, for either sign.
///
/// Rounds the multiply-high toward zero so a negative `outer` never
/// produces `outer` itself.
#[inline]
pub fn signed_bounded(raw: u32, outer: i32) -> i32 {
    let o = (((outer as i64) * (raw as i64)) >> 32) as i32;
    o.wrapping_add(((o as u32) >> 31) as i32)
}

/// `inner` plus an approximate multiply-high of `raw` and `outer - inner`,
/// or `inner` when the range is empty.
///
/// Works on 32-bit halves and drops the low-by-low partial product and its
/// carries, so the result can sit up to 2 below the exact 128-bit
/// multiply-high. It never reaches `outer`.
pub fn range(raw: u64, inner: i64, outer: i64) -> i64 {
    if inner >= outer {
        return inner;
    }
    let bound = (outer as u64).wrapping_sub(inner as u64);
    let rand_low = raw & 0xFFFF_FFFF;
    let rand_high = raw >> 32;
    let bound_low = bound & 0xFFFF_FFFF;
    let bound_high = bound >> 32;
    (inner as u64)
        .wrapping_add(rand_high.wrapping_mul(bound_low) >> 32)
        .wrapping_add(rand_low.wrapping_mul(bound_high) >> 32)
        .wrapping_add(rand_high.wrapping_mul(bound_high)) as i64
}

/// [`range`] that accepts its bounds in either order.
///
/// Swapped bounds are shifted by one so the result lies in
/// `(outer, inner]`, mirroring the exclusive end.
pub fn signed_range(raw: u64, inner: i64, outer: i64) -> i64 {
    let (low, high) = if outer < inner {
        (outer.wrapping_add(1), inner.wrapping_add(1))
    } else {
        (inner, outer)
    };
    if low >= high {
        return low;
    }
    range(raw, low, high)
}
