//! State transitions
//!
//! Each generator family advances its state with one of the rules below.
//! Transitions are pure `(State) -> State` updates applied in place; they
//! never fail and every arithmetic step wraps modulo the word width.
//!
//! The output side lives in [`crate::rng::scrambler`], so a transition can be
//! paired with different scramblers (XoRo32 and Lathe32 share
//! [`RotateXor32`] with different constants and output functions).

use std::marker::PhantomData;

/// One step of a generator's internal state.
pub trait StateTransition {
    type State;

    /// Advance `state` by exactly one step.
    fn advance(state: &mut Self::State);
}

/// A single-word recurrence, one half of a subcycle generator.
///
/// Jump tables are built by iterating exactly this function, so a table is
/// only valid for the recurrence that produced it.
pub trait Recurrence {
    fn advance(x: u32) -> u32;
}

/// `x = rotl(x * M, R)`
pub struct MultiplyRotate<const M: u32, const R: u32>;

impl<const M: u32, const R: u32> Recurrence for MultiplyRotate<M, R> {
    #[inline]
    fn advance(x: u32) -> u32 {
        x.wrapping_mul(M).rotate_left(R)
    }
}

/// `x = rotl(x + K, R)`
pub struct AddRotate<const K: u32, const R: u32>;

impl<const K: u32, const R: u32> Recurrence for AddRotate<K, R> {
    #[inline]
    fn advance(x: u32) -> u32 {
        x.wrapping_add(K).rotate_left(R)
    }
}

// ============================================================================
// Rotate-XOR (xoroshiro-style)
// ============================================================================

/// xoroshiro64 state update over `[A, B]`.
///
/// `B ^= A; A = rotl(A, R1) ^ B ^ (B << R2); B = rotl(B, R3)`.
/// Full period `2^64 - 1`; the all-zero state is a fixed point and must be
/// kept out by the owning family.
pub struct RotateXor32<const R1: u32, const R2: u32, const R3: u32>;

impl<const R1: u32, const R2: u32, const R3: u32> StateTransition for RotateXor32<R1, R2, R3> {
    type State = [u32; 2];

    #[inline]
    fn advance(state: &mut [u32; 2]) {
        let s0 = state[0];
        let s1 = state[1] ^ s0;
        state[0] = s0.rotate_left(R1) ^ s1 ^ (s1 << R2);
        state[1] = s1.rotate_left(R3);
    }
}

/// xoshiro128 state update over `[A, B, C, D]`.
pub struct Xoshiro128;

impl StateTransition for Xoshiro128 {
    type State = [u32; 4];

    #[inline]
    fn advance(state: &mut [u32; 4]) {
        let [mut a, mut b, mut c, mut d] = *state;
        let t = b << 9;
        c ^= a;
        d ^= b;
        b ^= c;
        a ^= d;
        c ^= t;
        d = d.rotate_left(11);
        *state = [a, b, c, d];
    }
}

// ============================================================================
// Subcycle families
// ============================================================================

/// Two independent recurrences over `[A, B]`.
///
/// Neither half ever mixes with the other, which is what makes seeding
/// through a per-half jump table possible.
pub struct Subcycle<A, B>(PhantomData<(A, B)>);

impl<A: Recurrence, B: Recurrence> StateTransition for Subcycle<A, B> {
    type State = [u32; 2];

    #[inline]
    fn advance(state: &mut [u32; 2]) {
        state[0] = A::advance(state[0]);
        state[1] = B::advance(state[1]);
    }
}

/// Two independent recurrences plus an outer xorshift word over `[A, B, C]`.
///
/// `C ^= (C << 5) ^ (C >> 11) ^ (A' + B')`, where `A'` and `B'` are the
/// already-advanced halves.
pub struct SubcycleOuter<A, B>(PhantomData<(A, B)>);

impl<A: Recurrence, B: Recurrence> StateTransition for SubcycleOuter<A, B> {
    type State = [u32; 3];

    #[inline]
    fn advance(state: &mut [u32; 3]) {
        let a = A::advance(state[0]);
        let b = B::advance(state[1]);
        let c = state[2];
        *state = [a, b, c ^ (c << 5) ^ (c >> 11) ^ a.wrapping_add(b)];
    }
}

// ============================================================================
// Chaotic families
// ============================================================================

/// Jenkins Small Fast, 32-bit, rotations 27 and 17.
pub struct Jsf32Step;

impl StateTransition for Jsf32Step {
    type State = [u32; 4];

    #[inline]
    fn advance(state: &mut [u32; 4]) {
        let [a, b, c, d] = *state;
        let e = a.wrapping_sub(b.rotate_left(27));
        let a = b ^ c.rotate_left(17);
        let b = c.wrapping_add(d);
        let c = d.wrapping_add(e);
        let d = e.wrapping_add(a);
        *state = [a, b, c, d];
    }
}

/// Two Tyche-style rounds per step.
///
/// The second round rotates `D` rather than `B` when refreshing `B`; streams
/// depend on that, so it stays.
pub struct TycheStep;

impl StateTransition for TycheStep {
    type State = [u32; 4];

    #[inline]
    fn advance(state: &mut [u32; 4]) {
        let [mut a, mut b, mut c, mut d] = *state;
        b = b.rotate_left(7) ^ c;
        c = c.wrapping_sub(d);
        d = d.rotate_left(8) ^ a;
        a = a.wrapping_sub(b);
        b = d.rotate_left(12) ^ c;
        c = c.wrapping_sub(d);
        d = d.rotate_left(16) ^ a;
        a = a.wrapping_sub(b);
        *state = [a, b, c, d];
    }
}

// ============================================================================
// Additive hybrids (Zig32 / Zag32 / Zog32)
// ============================================================================
//
// State is `[A, B]`: A runs a Marsaglia xorshift (never 0), B runs a counter
// (Weyl sequence or XLCG). The scrambler combines both.

/// `B += 0x632BE5AB`; A xorshift 14/1/15.
pub struct ZigStep;

impl StateTransition for ZigStep {
    type State = [u32; 2];

    #[inline]
    fn advance(state: &mut [u32; 2]) {
        let mut a = state[0];
        a ^= a >> 14;
        a ^= a << 1;
        a ^= a >> 15;
        *state = [a, state[1].wrapping_add(0x632B_E5AB)];
    }
}

/// `B = (B ^ 0xC74EAD55) * 0xA5CB3`; A xorshift 14/15/13.
pub struct ZagStep;

impl StateTransition for ZagStep {
    type State = [u32; 2];

    #[inline]
    fn advance(state: &mut [u32; 2]) {
        let a = xorshift_14_15_13(state[0]);
        *state = [a, (state[1] ^ 0xC74E_AD55).wrapping_mul(0xA5CB3)];
    }
}

/// `B += 0xC74EAD55`; A xorshift 14/15/13.
pub struct ZogStep;

impl StateTransition for ZogStep {
    type State = [u32; 2];

    #[inline]
    fn advance(state: &mut [u32; 2]) {
        let a = xorshift_14_15_13(state[0]);
        *state = [a, state[1].wrapping_add(0xC74E_AD55)];
    }
}

#[inline]
fn xorshift_14_15_13(mut a: u32) -> u32 {
    a ^= a >> 14;
    a ^= a >> 15;
    a ^ (a << 13)
}

// ============================================================================
// 64-bit
// ============================================================================

/// Four 64-bit words: two rotations, one add, one Weyl counter in `D`.
pub struct TrimStep;

impl StateTransition for TrimStep {
    type State = [u64; 4];

    #[inline]
    fn advance(state: &mut [u64; 4]) {
        let [a, b, c, d] = *state;
        let bc = b ^ c;
        let cd = c ^ d;
        *state = [
            bc.rotate_left(57),
            cd.rotate_left(11),
            a.wrapping_add(b),
            d.wrapping_add(0xADB5_B121_49E9_3C39),
        ];
    }
}
