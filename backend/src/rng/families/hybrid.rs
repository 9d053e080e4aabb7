//! Additive hybrids: Zig32, Zag32, Zog32.
//!
//! `A` is a Marsaglia xorshift word (period `2^32 - 1`, never 0) and `B` a
//! counter with period `2^32`; the combined period is `2^64 - 2^32`. Output
//! mixes the fresh counter and adds the fresh xorshift word.
//!
//! These families reduce bounded output with
//! [`Reduction::FifteenBit`]: bounds must lie in `-32768..=32767`.

use super::nonzero;
use crate::rng::bounded::{fifteen_bit, Reduction};
use crate::rng::dispersal::xorshift_fill;
use crate::rng::family::{join_sign_extended, Family};
use crate::rng::scrambler::{zag_mix, zig_mix, zog_mix, ZagMix, ZigMix, ZogMix};
use crate::rng::transition::{ZagStep, ZigStep, ZogStep};

macro_rules! hybrid_family {
    ($(#[$doc:meta])* $name:ident, $transition:ty, $scrambler:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Family for $name {
            type Word = u32;
            type State = [u32; 2];
            type Transition = $transition;
            type Scrambler = $scrambler;

            const NAME: &'static str = stringify!($name);
            const REDUCTION: Reduction = Reduction::FifteenBit;

            fn seed(seed: u64) -> [u32; 2] {
                let seed = seed as u32;
                [xorshift_fill(seed), seed]
            }

            fn repair(state: &mut [u32; 2]) -> bool {
                nonzero(&mut state[0])
            }

            fn next_u32(state: &mut [u32; 2]) -> u32 {
                Self::step(state)
            }

            /// Two steps, the second on top.
            fn next_u64(state: &mut [u32; 2]) -> u64 {
                let low = Self::step(state);
                let high = Self::step(state);
                join_sign_extended(high, low)
            }
        }
    };
}

hybrid_family!(
    /// Weyl counter with a SplitMix-style finisher.
    Zig32,
    ZigStep,
    ZigMix
);

hybrid_family!(
    /// XLCG counter with a multiplication-free finisher.
    Zag32,
    ZagStep,
    ZagMix
);

hybrid_family!(
    /// Weyl counter with a single multiply-xorshift round.
    Zog32,
    ZogStep,
    ZogMix
);

// Stateless forms. The caller owns `a` and `b`, advances them with the
// family's transition before each call, and passes the advanced words; the
// result then equals the next output of a generator that held the words
// before that update.

/// Stateless Zig32 output.
///
/// Advance with xorshift 14/1/15 on `a` and `b += 0x632BE5AB`.
#[inline]
pub fn zig_determine(a: u32, b: u32) -> u32 {
    zig_mix(a, b)
}

/// Bounded form of [`zig_determine`], with the 15-bit reduction.
#[inline]
pub fn zig_determine_bounded(a: u32, b: u32, bound: i32) -> i32 {
    fifteen_bit(zig_mix(a, b), bound)
}

/// Stateless Zag32 output.
///
/// Advance with xorshift 14/15/13 on `a` and `b = (b ^ 0xC74EAD55) * 0xA5CB3`.
#[inline]
pub fn zag_determine(a: u32, b: u32) -> u32 {
    zag_mix(a, b)
}

/// Bounded form of [`zag_determine`], with the 15-bit reduction.
#[inline]
pub fn zag_determine_bounded(a: u32, b: u32, bound: i32) -> i32 {
    fifteen_bit(zag_mix(a, b), bound)
}

/// Stateless Zog32 output.
///
/// Advance with xorshift 14/15/13 on `a` and `b += 0xC74EAD55`.
#[inline]
pub fn zog_determine(a: u32, b: u32) -> u32 {
    zog_mix(a, b)
}

/// Bounded form of [`zog_determine`], with the 15-bit reduction.
#[inline]
pub fn zog_determine_bounded(a: u32, b: u32, bound: i32) -> i32 {
    fifteen_bit(zog_mix(a, b), bound)
}
