//! Output scramblers
//!
//! A scrambler maps state to the emitted word. It sees both the state before
//! the transition and the state after it: xoroshiro-style families read the
//! old words, while the subcycle, chaotic, and hybrid families read the new
//! ones.
//!
//! These functions are validated offline by statistical test batteries, not
//! at runtime; any change alters every stream.

/// Output function over a pre/post pair of states.
pub trait Scrambler<S> {
    type Output;

    fn scramble(before: &S, after: &S) -> Self::Output;
}

/// `A + B` of the pre-state (plain xoroshiro64+).
pub struct Sum;

impl Scrambler<[u32; 2]> for Sum {
    type Output = u32;

    #[inline]
    fn scramble(before: &[u32; 2], _after: &[u32; 2]) -> u32 {
        before[0].wrapping_add(before[1])
    }
}

/// `rotl(A + B, R) + A` of the pre-state.
pub struct RotateAdd<const R: u32>;

impl<const R: u32> Scrambler<[u32; 2]> for RotateAdd<R> {
    type Output = u32;

    #[inline]
    fn scramble(before: &[u32; 2], _after: &[u32; 2]) -> u32 {
        before[0]
            .wrapping_add(before[1])
            .rotate_left(R)
            .wrapping_add(before[0])
    }
}

/// `rotl(A + D, 7) + A` of the pre-state (xoshiro128++).
pub struct PlusPlus;

impl Scrambler<[u32; 4]> for PlusPlus {
    type Output = u32;

    #[inline]
    fn scramble(before: &[u32; 4], _after: &[u32; 4]) -> u32 {
        before[0]
            .wrapping_add(before[3])
            .rotate_left(7)
            .wrapping_add(before[0])
    }
}

/// `A ^ B` of the post-state.
pub struct XorHalves;

impl Scrambler<[u32; 2]> for XorHalves {
    type Output = u32;

    #[inline]
    fn scramble(_before: &[u32; 2], after: &[u32; 2]) -> u32 {
        after[0] ^ after[1]
    }
}

/// One word of the post-state, verbatim.
pub struct Post<const I: usize>;

impl<const I: usize, const N: usize> Scrambler<[u32; N]> for Post<I> {
    type Output = u32;

    #[inline]
    fn scramble(_before: &[u32; N], after: &[u32; N]) -> u32 {
        after[I]
    }
}

/// One word of the pre-state, verbatim.
pub struct Pre<const I: usize>;

impl<const I: usize, const N: usize> Scrambler<[u64; N]> for Pre<I> {
    type Output = u64;

    #[inline]
    fn scramble(before: &[u64; N], _after: &[u64; N]) -> u64 {
        before[I]
    }
}

// The three hybrids mix the counter word B and then add the xorshift word A.

/// SplitMix-style finisher over B with A folded in before the last round.
pub struct ZigMix;

impl Scrambler<[u32; 2]> for ZigMix {
    type Output = u32;

    #[inline]
    fn scramble(_before: &[u32; 2], after: &[u32; 2]) -> u32 {
        zig_mix(after[0], after[1])
    }
}

/// Multiplication-free finisher over B.
pub struct ZagMix;

impl Scrambler<[u32; 2]> for ZagMix {
    type Output = u32;

    #[inline]
    fn scramble(_before: &[u32; 2], after: &[u32; 2]) -> u32 {
        zag_mix(after[0], after[1])
    }
}

/// One multiply-xorshift round over B, then `+ A`.
pub struct ZogMix;

impl Scrambler<[u32; 2]> for ZogMix {
    type Output = u32;

    #[inline]
    fn scramble(_before: &[u32; 2], after: &[u32; 2]) -> u32 {
        zog_mix(after[0], after[1])
    }
}

#[inline]
pub(crate) fn zig_mix(a: u32, b: u32) -> u32 {
    let z = (b ^ (b >> 15)).wrapping_mul(0xAD7B5);
    let z = (z ^ (z >> 12)).wrapping_mul(0xCDD1D).wrapping_add(a);
    z ^ (z >> 13)
}

#[inline]
pub(crate) fn zag_mix(a: u32, b: u32) -> u32 {
    let z = b ^ (b >> 13);
    let z = (z ^ (z >> 11)).wrapping_add(a);
    z ^ (z >> 7)
}

#[inline]
pub(crate) fn zog_mix(a: u32, b: u32) -> u32 {
    let z = (b ^ (b >> 10)).wrapping_mul(0xA5CB3);
    (z ^ (z >> 20)).wrapping_add(a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_reads_pre_state() {
        assert_eq!(Sum::scramble(&[1, 1], &[0x2000, 0]), 2);
    }

    #[test]
    fn test_rotate_add_reads_pre_state() {
        // rotl(2, 10) + 1
        assert_eq!(RotateAdd::<10>::scramble(&[1, 1], &[9, 9]), 0x801);
    }

    #[test]
    fn test_post_selects_word() {
        assert_eq!(Post::<3>::scramble(&[0; 4], &[1, 2, 3, 4]), 4);
        assert_eq!(Post::<2>::scramble(&[0; 3], &[7, 8, 9]), 9);
    }

    #[test]
    fn test_xor_halves() {
        assert_eq!(XorHalves::scramble(&[0, 0], &[0xF0F0, 0x0F0F]), 0xFFFF);
    }
}
