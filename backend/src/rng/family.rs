//! Generator families
//!
//! A [`Family`] bundles everything that distinguishes one algorithm from
//! another: its state shape, its [`StateTransition`], its [`Scrambler`], how a
//! seed becomes state, and which words must never be zero. The public
//! [`crate::rng::Generator`] facade is generic over a family and contains no
//! per-algorithm code of its own.

use std::fmt::{Debug, LowerHex};
use std::hash::Hash;

use crate::rng::bounded::Reduction;
use crate::rng::scrambler::Scrambler;
use crate::rng::transition::StateTransition;

/// Fixed-width unsigned state word (`u32` or `u64`).
pub trait Word: Copy + Eq + Hash + Debug + LowerHex + Default + Into<u64> + 'static {
    const BITS: u32;

    /// `Some` only if `value` fits without truncation.
    fn try_from_u64(value: u64) -> Option<Self>;
}

impl Word for u32 {
    const BITS: u32 = 32;

    fn try_from_u64(value: u64) -> Option<Self> {
        u32::try_from(value).ok()
    }
}

impl Word for u64 {
    const BITS: u32 = 64;

    fn try_from_u64(value: u64) -> Option<Self> {
        Some(value)
    }
}

/// One PRNG algorithm.
///
/// Implementors are zero-sized marker types; all data lives in
/// `Self::State`, which is owned by the generator.
pub trait Family: 'static {
    type Word: Word;
    type State: Copy + Eq + Hash + Debug + Default + AsRef<[Self::Word]> + AsMut<[Self::Word]>;
    type Transition: StateTransition<State = Self::State>;
    type Scrambler: Scrambler<Self::State, Output = Self::Word>;

    /// Display name, also the snapshot family tag.
    const NAME: &'static str;

    /// How `next_bounded` reduces a raw output.
    const REDUCTION: Reduction = Reduction::MultiplyHigh;

    /// Build a valid starting state from a seed.
    fn seed(seed: u64) -> Self::State;

    /// Restore the non-zero invariant on caller-supplied state.
    ///
    /// Returns `true` if any word was changed. Families without a forbidden
    /// state keep the default no-op.
    fn repair(_state: &mut Self::State) -> bool {
        false
    }

    /// Advance once and scramble.
    #[inline]
    fn step(state: &mut Self::State) -> Self::Word {
        let before = *state;
        Self::Transition::advance(state);
        Self::Scrambler::scramble(&before, state)
    }

    fn next_u32(state: &mut Self::State) -> u32;

    fn next_u64(state: &mut Self::State) -> u64;
}

/// Number of words in a family's state.
pub fn word_count<F: Family>() -> usize {
    F::State::default().as_ref().len()
}

/// `(high << 32) ^ sign_extend(low)`
///
/// When `low` has its top bit set this flips the whole high half; streams
/// from the xoroshiro-style and hybrid families depend on it.
#[inline]
pub const fn join_sign_extended(high: u32, low: u32) -> u64 {
    ((high as u64) << 32) ^ (low as i32 as i64 as u64)
}

/// `(high << 32) | low`
#[inline]
pub const fn join(high: u32, low: u32) -> u64 {
    ((high as u64) << 32) | low as u64
}
