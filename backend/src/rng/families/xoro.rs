//! Rotate-XOR families: XoRo32, Lathe32, XoshiroPlusPlus32.
//!
//! All three have a single forbidden state (all words zero), which is a
//! fixed point of the transition. Seeding never produces it; raw state is
//! repaired by setting one word to 1.

use super::nonzero;
use crate::rng::dispersal::{disperse_pair32, mix64, split_words, GOLDEN};
use crate::rng::family::{join, join_sign_extended, Family};
use crate::rng::scrambler::{PlusPlus, RotateAdd, Sum};
use crate::rng::transition::{RotateXor32, StateTransition, Xoshiro128};

/// xoroshiro64+ with rotations 13/9/26; output `A + B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XoRo32;

impl Family for XoRo32 {
    type Word = u32;
    type State = [u32; 2];
    type Transition = RotateXor32<13, 9, 26>;
    type Scrambler = Sum;

    const NAME: &'static str = "XoRo32";

    fn seed(seed: u64) -> [u32; 2] {
        disperse_pair32(seed as u32)
    }

    fn repair(state: &mut [u32; 2]) -> bool {
        state[1] == 0 && nonzero(&mut state[0])
    }

    fn next_u32(state: &mut [u32; 2]) -> u32 {
        Self::step(state)
    }

    fn next_u64(state: &mut [u32; 2]) -> u64 {
        let high = Self::step(state);
        let low = Self::step(state);
        join_sign_extended(high, low)
    }
}

/// xoroshiro64 with rotations 13/5/28; output `rotl(A + B, 10) + A`.
///
/// The rotate-add scrambler removes the linear artifacts plain `A + B`
/// leaves in the low bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lathe32;

impl Family for Lathe32 {
    type Word = u32;
    type State = [u32; 2];
    type Transition = RotateXor32<13, 5, 28>;
    type Scrambler = RotateAdd<10>;

    const NAME: &'static str = "Lathe32";

    fn seed(seed: u64) -> [u32; 2] {
        let mut state = disperse_pair32(seed as u32);
        Self::repair(&mut state);
        state
    }

    fn repair(state: &mut [u32; 2]) -> bool {
        state[1] == 0 && nonzero(&mut state[0])
    }

    fn next_u32(state: &mut [u32; 2]) -> u32 {
        Self::step(state)
    }

    fn next_u64(state: &mut [u32; 2]) -> u64 {
        let high = Self::step(state);
        let low = Self::step(state);
        join_sign_extended(high, low)
    }
}

/// xoshiro128++; period `2^128 - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct XoshiroPlusPlus32;

impl Family for XoshiroPlusPlus32 {
    type Word = u32;
    type State = [u32; 4];
    type Transition = Xoshiro128;
    type Scrambler = PlusPlus;

    const NAME: &'static str = "XoshiroPlusPlus32";

    /// Two mixed 64-bit words, each split low half first.
    fn seed(seed: u64) -> [u32; 4] {
        let [a, b] = split_words(mix64(seed));
        let [c, d] = split_words(mix64(seed.wrapping_add(GOLDEN)));
        [a, b, c, d]
    }

    fn repair(state: &mut [u32; 4]) -> bool {
        state[..3].iter().all(|&w| w == 0) && nonzero(&mut state[3])
    }

    fn next_u32(state: &mut [u32; 4]) -> u32 {
        Self::step(state)
    }

    /// One step: the usual output on top, and `rotl(C - B, 13) + C` of the
    /// same pre-state underneath. The halves are joined without sign
    /// extension, so the high half always equals `next_u32`.
    fn next_u64(state: &mut [u32; 4]) -> u64 {
        let [a, b, c, d] = *state;
        let high = a.wrapping_add(d).rotate_left(7).wrapping_add(a);
        let low = c.wrapping_sub(b).rotate_left(13).wrapping_add(c);
        Xoshiro128::advance(state);
        join(high, low)
    }
}
