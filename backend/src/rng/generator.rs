//! Generator facade
//!
//! [`Generator<F>`] owns one family's state and exposes the uniform output
//! API. All algorithm-specific behavior comes from `F`; this file only
//! derives the secondary outputs (floats, bounded values, bytes) from
//! `next_u32`/`next_u64`.
//!
//! # Determinism
//!
//! Same family + same seed → same stream, on every platform. Every output
//! method advances the state by a fixed number of steps that depends only on
//! the method, never on the values drawn.
//!
//! # Example
//! ```
//! use subcycle_rng::{Generator, Mover32};
//!
//! let mut rng = Generator::<Mover32>::new(12345);
//! let roll = rng.next_bounded(6);
//! assert!((0..6).contains(&roll));
//!
//! let fork = rng.copy();
//! assert_eq!(fork, rng);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use rand_core::{OsRng, RngCore};

use crate::rng::bounded;
use crate::rng::family::{word_count, Family, Word};
use crate::rng::jump_table::SubcycleFamily;
use crate::rng::transition::StateTransition;

const LABELS: [&str; 4] = ["a", "b", "c", "d"];

/// A seeded PRNG of family `F`.
///
/// Plain mutable value: not shared, not synchronized. Fork a stream with
/// [`Generator::copy`].
pub struct Generator<F: Family> {
    state: F::State,
    family: PhantomData<fn() -> F>,
}

impl<F: Family> Generator<F> {
    /// Create a generator from a seed
    ///
    /// Never fails and never yields a degenerate state.
    ///
    /// # Example
    /// ```
    /// use subcycle_rng::{Generator, XoRo32};
    ///
    /// let a = Generator::<XoRo32>::new(42);
    /// let b = Generator::<XoRo32>::new(42);
    /// assert_eq!(a, b);
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            state: F::seed(seed),
            family: PhantomData,
        }
    }

    /// Create a generator from raw state words
    ///
    /// A forbidden state is silently repaired (see each family).
    ///
    /// # Example
    /// ```
    /// use subcycle_rng::{Generator, XoRo32};
    ///
    /// let rng = Generator::<XoRo32>::from_raw([0, 0]);
    /// assert_eq!(rng.get_state_words(), [1, 0]);
    /// ```
    pub fn from_raw(words: F::State) -> Self {
        let mut rng = Self {
            state: words,
            family: PhantomData,
        };
        rng.repair();
        rng
    }

    /// Create a generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(OsRng.next_u64())
    }

    /// Family display name
    pub fn family_name(&self) -> &'static str {
        F::NAME
    }

    // ========================================================================
    // Raw output
    // ========================================================================

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        F::next_u32(&mut self.state)
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        F::next_u64(&mut self.state)
    }

    /// Top `bits` bits of one `next_u32`
    ///
    /// The shift amount is taken mod 32, so `bits == 0` returns all 32 bits.
    #[inline]
    pub fn next_bits(&mut self, bits: u32) -> u32 {
        self.next_u32() >> (32u32.wrapping_sub(bits) & 31)
    }

    #[inline]
    pub fn next_bool(&mut self) -> bool {
        self.next_u32() >> 31 != 0
    }

    // ========================================================================
    // Floating point
    // ========================================================================

    /// Uniform f32 in `[0.0, 1.0)` from the low 24 bits of `next_u32`
    pub fn next_f32(&mut self) -> f32 {
        (self.next_u32() & 0xFF_FFFF) as f32 * (1.0 / (1u32 << 24) as f32)
    }

    /// Uniform f64 in `[0.0, 1.0)` from the low 53 bits of `next_u64`
    ///
    /// # Example
    /// ```
    /// use subcycle_rng::{Generator, Jsf32};
    ///
    /// let mut rng = Generator::<Jsf32>::new(7);
    /// let p = rng.next_f64();
    /// assert!(p >= 0.0 && p < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() & ((1u64 << 53) - 1)) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    // ========================================================================
    // Bounded output
    // ========================================================================

    /// Value in `[0, bound)` using the family's reduction
    ///
    /// Negative bounds give 0 under [`bounded::Reduction::MultiplyHigh`].
    /// Hybrid families use [`bounded::Reduction::FifteenBit`] and only
    /// support bounds in `-32768..=32767`.
    pub fn next_bounded(&mut self, bound: i32) -> i32 {
        F::REDUCTION.reduce(self.next_u32(), bound)
    }

    /// Value between 0 (inclusive) and `outer` (exclusive), either sign
    pub fn next_signed_bounded(&mut self, outer: i32) -> i32 {
        bounded::signed_bounded(self.next_u32(), outer)
    }

    /// Value in `[inner, outer)`, or `inner` if the range is empty
    ///
    /// Always consumes one `next_u64`.
    ///
    /// # Example
    /// ```
    /// use subcycle_rng::{Generator, Cake32};
    ///
    /// let mut rng = Generator::<Cake32>::new(1);
    /// let amount = rng.range(10_000, 100_000);
    /// assert!((10_000..100_000).contains(&amount));
    /// ```
    pub fn range(&mut self, inner: i64, outer: i64) -> i64 {
        bounded::range(self.next_u64(), inner, outer)
    }

    /// Like [`Generator::range`] but accepts the bounds in either order
    pub fn signed_range(&mut self, inner: i64, outer: i64) -> i64 {
        bounded::signed_range(self.next_u64(), inner, outer)
    }

    /// Fill `dest`, four bytes per `next_u32`, least significant first
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    // ========================================================================
    // State access
    // ========================================================================

    /// Independent generator with a value copy of this state
    pub fn copy(&self) -> Self {
        Self {
            state: self.state,
            family: PhantomData,
        }
    }

    /// Current state words, in `[A, B, ...]` order
    pub fn get_state_words(&self) -> F::State {
        self.state
    }

    /// Replace the state, repairing a forbidden state
    pub fn set_state_words(&mut self, words: F::State) {
        self.state = words;
        self.repair();
    }

    /// Word `index` (0 = A), or `None` past the end
    pub fn state_word(&self, index: usize) -> Option<F::Word> {
        self.state.as_ref().get(index).copied()
    }

    /// Set word `index`, repairing a forbidden state
    ///
    /// Returns `false` (and changes nothing) if `index` is past the end.
    pub fn set_state_word(&mut self, index: usize, word: F::Word) -> bool {
        match self.state.as_mut().get_mut(index) {
            Some(slot) => {
                *slot = word;
                self.repair();
                true
            }
            None => false,
        }
    }

    /// Number of state words
    pub fn word_count(&self) -> usize {
        word_count::<F>()
    }

    /// Advance the state without producing output
    pub fn skip(&mut self, steps: u64) {
        for _ in 0..steps {
            F::Transition::advance(&mut self.state);
        }
    }

    fn repair(&mut self) {
        if F::repair(&mut self.state) {
            log::debug!(
                "{}: repaired forbidden raw state to {:x?}",
                F::NAME,
                self.state.as_ref()
            );
        }
    }
}

impl<F: Family<Word = u32, State = [u32; 2]>> Generator<F> {
    /// Both words packed as `B << 32 | A`
    pub fn combined_state(&self) -> u64 {
        ((self.state[1] as u64) << 32) | self.state[0] as u64
    }

    /// Unpack `B << 32 | A`, repairing a forbidden state
    pub fn set_combined_state(&mut self, combined: u64) {
        self.set_state_words([combined as u32, (combined >> 32) as u32]);
    }
}

impl<F: SubcycleFamily> Generator<F> {
    /// Generator positioned exactly on table entry `index` in both halves
    ///
    /// Advancing it [`crate::rng::jump_table::STRIDE`] steps lands on entry
    /// `index + 1`.
    pub fn from_stride_index(index: usize) -> Self {
        Self::new(F::stride_seed(index) as u64)
    }
}

// ============================================================================
// Trait impls
// ============================================================================

impl<F: Family> Clone for Generator<F> {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl<F: Family> PartialEq for Generator<F> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl<F: Family> Eq for Generator<F> {}

impl<F: Family> Hash for Generator<F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

impl<F: Family> fmt::Debug for Generator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("family", &F::NAME)
            .field("state", &self.state)
            .finish()
    }
}

/// `Mover32 { a: 0x00000001, b: 0x00000001 }`
impl<F: Family> fmt::Display for Generator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = 2 + (<F::Word as Word>::BITS / 4) as usize;
        write!(f, "{} {{ ", F::NAME)?;
        for (i, word) in self.state.as_ref().iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let label = LABELS.get(i).copied().unwrap_or("?");
            write!(f, "{}: {:#0width$x}", label, word, width = width)?;
        }
        write!(f, " }}")
    }
}
