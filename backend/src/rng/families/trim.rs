//! Trim64: four 64-bit words with a Weyl counter.
//!
//! The counter in `D` guarantees a minimum period of `2^64`; the other three
//! words form a chaotic mixer. Output is `C` before the step.

use crate::rng::dispersal::disperse;
use crate::rng::family::Family;
use crate::rng::scrambler::Pre;
use crate::rng::transition::TrimStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Trim64;

impl Family for Trim64 {
    type Word = u64;
    type State = [u64; 4];
    type Transition = TrimStep;
    type Scrambler = Pre<2>;

    const NAME: &'static str = "Trim64";

    fn seed(seed: u64) -> [u64; 4] {
        disperse::<4>(seed)
    }

    /// Low half of one 64-bit step.
    fn next_u32(state: &mut [u64; 4]) -> u32 {
        Self::step(state) as u32
    }

    fn next_u64(state: &mut [u64; 4]) -> u64 {
        Self::step(state)
    }
}
